//! Credential extraction from request headers
//!
//! Anything that fails to parse is reported as absent; callers never see a
//! parse error, only `None`.

use axum::http::{header, HeaderMap};
use base64::Engine;
use subtle::ConstantTimeEq;

/// Prefix a Bearer `Authorization` header must start with, case-sensitive
pub const BEARER_PREFIX: &str = "Bearer ";

/// Decoded HTTP Basic credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Decode `Authorization: Basic <base64(user:pass)>`
///
/// The scheme name is matched case-insensitively and the payload is split at
/// the first `:`, so passwords may themselves contain colons. A payload with
/// no colon is a username with an empty password.
pub fn basic_credentials(headers: &HeaderMap) -> Option<BasicCredentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, payload) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':').unwrap_or((decoded.as_str(), ""));

    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Token following the literal `Bearer ` prefix, taken verbatim
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
}

/// Constant-time string comparison
pub fn secure_eq(a: &str, b: &str) -> bool {
    a.len() == b.len() && bool::from(a.as_bytes().ct_eq(b.as_bytes()))
}
