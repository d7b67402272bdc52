//! Application error types for tinyetl-test-server
//!
//! Every request-level failure is an authentication or validation failure
//! raised by the auth gate. Each variant knows the status code, response
//! body and challenge scheme it is surfaced with.

use axum::http::StatusCode;
use thiserror::Error;

/// Authentication scheme advertised in a `WWW-Authenticate` challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Challenge {
    Basic,
    Bearer,
    /// Both schemes, comma-joined in Basic, Bearer order
    BasicOrBearer,
}

impl Challenge {
    /// Render the `WWW-Authenticate` header value for the given realm
    pub fn header_value(self, realm: &str) -> String {
        match self {
            Challenge::Basic => format!("Basic realm=\"{}\"", realm),
            Challenge::Bearer => format!("Bearer realm=\"{}\"", realm),
            Challenge::BasicOrBearer => {
                format!("Basic realm=\"{}\", Bearer realm=\"{}\"", realm, realm)
            }
        }
    }
}

/// Authentication-related errors
///
/// The `Display` text is the response body without its trailing newline.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Basic credentials missing, malformed or wrong
    #[error("Authentication required")]
    BasicAuthRequired,

    /// Authorization header missing or not a Bearer header
    #[error("Bearer token required")]
    BearerTokenRequired,

    /// Well-formed Bearer header carrying the wrong token
    #[error("Invalid token")]
    InvalidToken,

    /// `X-API-Version` absent or not `v2`
    #[error("X-API-Version header must be \"v2\"")]
    InvalidApiVersion,

    /// Neither Basic nor Bearer credentials were accepted
    #[error("Authentication required (Basic Auth or Bearer Token)")]
    NoAcceptedCredentials,
}

impl AuthError {
    /// HTTP status the failure is surfaced with
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::BasicAuthRequired
            | AuthError::BearerTokenRequired
            | AuthError::NoAcceptedCredentials => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken => StatusCode::FORBIDDEN,
            AuthError::InvalidApiVersion => StatusCode::BAD_REQUEST,
        }
    }

    /// Challenge to advertise, if any
    pub fn challenge(&self) -> Option<Challenge> {
        match self {
            AuthError::BasicAuthRequired => Some(Challenge::Basic),
            AuthError::BearerTokenRequired => Some(Challenge::Bearer),
            AuthError::NoAcceptedCredentials => Some(Challenge::BasicOrBearer),
            AuthError::InvalidToken | AuthError::InvalidApiVersion => None,
        }
    }

    /// Plain-text response body
    pub fn body(&self) -> String {
        format!("{}\n", self)
    }
}
