//! Auth gate decision functions
//!
//! One function per supported scheme. Each inspects the request headers,
//! compares against the process-wide [`CredentialsConfig`] and returns
//! `Ok` (allow) or an [`AuthError`] describing the challenge to send back.
//! The functions are pure: no logging, no I/O, no shared mutable state.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use super::credentials::{basic_credentials, bearer_token, secure_eq};
use crate::config::CredentialsConfig;
use crate::error::AuthError;

/// Request header the custom-header gate inspects
pub const API_VERSION_HEADER: HeaderName = HeaderName::from_static("x-api-version");

/// Only accepted `X-API-Version` value
pub const REQUIRED_API_VERSION: &str = "v2";

/// Response header carrying the fixture's own version
pub const SERVER_VERSION_HEADER: HeaderName = HeaderName::from_static("x-server-version");

/// Response header echoing the client's `User-Agent`
pub const RECEIVED_USER_AGENT_HEADER: HeaderName =
    HeaderName::from_static("x-received-user-agent");

const SERVER_VERSION: &str = "1.0";

/// Scheme that satisfied the combined gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Basic,
    Bearer,
}

/// Headers the caller must add to a response the gate allowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseStamp {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl ResponseStamp {
    /// Headers to be added, in order
    pub fn headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.headers
    }

    /// Write the stamped headers into a response header map
    pub fn apply(self, target: &mut HeaderMap) {
        for (name, value) in self.headers {
            target.insert(name, value);
        }
    }
}

/// HTTP Basic gate
///
/// Missing, malformed and wrong credentials all produce the same 401.
pub fn check_basic(headers: &HeaderMap, credentials: &CredentialsConfig) -> Result<(), AuthError> {
    match basic_credentials(headers) {
        Some(basic)
            if secure_eq(&basic.username, &credentials.username)
                & secure_eq(&basic.password, &credentials.password) =>
        {
            Ok(())
        }
        _ => Err(AuthError::BasicAuthRequired),
    }
}

/// Bearer token gate
///
/// A header without the `Bearer ` prefix is a 401; a well-formed header with
/// the wrong token is a 403.
pub fn check_bearer(
    headers: &HeaderMap,
    credentials: &CredentialsConfig,
) -> Result<(), AuthError> {
    let token = bearer_token(headers).ok_or(AuthError::BearerTokenRequired)?;
    if secure_eq(token, &credentials.bearer_token) {
        Ok(())
    } else {
        Err(AuthError::InvalidToken)
    }
}

/// Custom-header gate requiring `X-API-Version: v2`
pub fn check_api_version(headers: &HeaderMap) -> Result<ResponseStamp, AuthError> {
    let version = headers
        .get(&API_VERSION_HEADER)
        .and_then(|v| v.to_str().ok());
    if version != Some(REQUIRED_API_VERSION) {
        return Err(AuthError::InvalidApiVersion);
    }

    let user_agent = headers
        .get(axum::http::header::USER_AGENT)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("none"));

    Ok(ResponseStamp {
        headers: vec![
            (
                SERVER_VERSION_HEADER,
                HeaderValue::from_static(SERVER_VERSION),
            ),
            (RECEIVED_USER_AGENT_HEADER, user_agent),
        ],
    })
}

/// Combined gate: Basic first, then Bearer
///
/// Reports which scheme matched so the caller can pick the payload. A wrong
/// Bearer token is a plain 401 here, not the 403 of [`check_bearer`].
pub fn check_any(headers: &HeaderMap, credentials: &CredentialsConfig) -> Result<Scheme, AuthError> {
    if check_basic(headers, credentials).is_ok() {
        return Ok(Scheme::Basic);
    }
    if check_bearer(headers, credentials).is_ok() {
        return Ok(Scheme::Bearer);
    }
    Err(AuthError::NoAcceptedCredentials)
}
