//! HTTP middleware for tinyetl-test-server
//!
//! This module provides per-route middleware for:
//! - Basic, Bearer and custom-header authentication gates
//! - Request/response logging

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;

use super::router::AppState;
use crate::auth::gate;
use crate::error::AuthError;

/// Basic authentication middleware
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AuthResponse> {
    gate::check_basic(request.headers(), &state.credentials)
        .map_err(|e| deny(&request, e, &state))?;
    Ok(next.run(request).await)
}

/// Bearer token middleware
pub async fn require_bearer_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AuthResponse> {
    gate::check_bearer(request.headers(), &state.credentials)
        .map_err(|e| deny(&request, e, &state))?;
    Ok(next.run(request).await)
}

/// `X-API-Version: v2` middleware
///
/// Stamps the server version and the echoed user agent onto the handler's
/// response once the request is allowed.
pub async fn require_api_version(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AuthResponse> {
    let stamp =
        gate::check_api_version(request.headers()).map_err(|e| deny(&request, e, &state))?;
    let mut response = next.run(request).await;
    stamp.apply(response.headers_mut());
    Ok(response)
}

fn deny(request: &Request, error: AuthError, state: &AppState) -> AuthResponse {
    tracing::debug!(
        path = %request.uri().path(),
        reason = %error,
        status = error.status().as_u16(),
        "Request denied by auth gate"
    );
    AuthResponse::from_error(&error, &state.credentials.realm)
}

/// Authentication error response
#[derive(Debug)]
pub struct AuthResponse {
    status: StatusCode,
    message: String,
    challenge: Option<String>,
}

impl AuthResponse {
    /// Build the challenge response for a gate failure
    pub fn from_error(error: &AuthError, realm: &str) -> Self {
        Self {
            status: error.status(),
            message: error.body(),
            challenge: error.challenge().map(|c| c.header_value(realm)),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for AuthResponse {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        if let Some(challenge) = self.challenge {
            match HeaderValue::from_str(&challenge) {
                Ok(value) => {
                    headers.insert(header::WWW_AUTHENTICATE, value);
                }
                Err(_) => {
                    tracing::warn!(
                        challenge = %challenge.escape_debug(),
                        "Challenge is not a valid header value, sending without WWW-Authenticate"
                    );
                }
            }
        }
        (self.status, headers, self.message).into_response()
    }
}

/// Logging middleware function
///
/// Logs request and response details including:
/// - Method and path
/// - Status code
/// - Response time
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    let status = response.status();

    tracing::info!(
        method = %method,
        path = %uri.path(),
        status = %status.as_u16(),
        duration_ms = %elapsed.as_millis(),
        "Request completed"
    );

    response
}
