//! HTTP router for tinyetl-test-server
//!
//! This module defines the axum router that handles all HTTP requests.
//! It provides routes for:
//! - Health check and service descriptor
//! - Public CSV data
//! - CSV data behind Basic, Bearer, custom-header and combined gates

use axum::{
    extract::State,
    http::{header, HeaderMap},
    middleware::from_fn_with_state,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::middleware::{
    require_api_version, require_basic_auth, require_bearer_token, AuthResponse,
};
use crate::auth::{check_any, Scheme};
use crate::config::{CredentialsConfig, REDACTED};
use crate::datasets::{Dataset, CSV_CONTENT_TYPE};

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "tinyetl-http-server";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Read-only credentials the gates compare against
    pub credentials: Arc<CredentialsConfig>,
}

impl AppState {
    pub fn new(credentials: CredentialsConfig) -> Self {
        Self {
            credentials: Arc::new(credentials),
        }
    }
}

// Fields are declared in alphabetical order so serialized keys come out sorted.

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub endpoints: BTreeMap<String, String>,
    pub service: String,
    pub status: String,
}

/// Root service descriptor
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    pub authentication: AuthenticationInfo,
    pub endpoints: BTreeMap<String, String>,
    pub service: String,
    pub version: String,
}

/// Credentials summary with secrets redacted
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthenticationInfo {
    pub basic_auth: BasicAuthInfo,
    pub bearer_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BasicAuthInfo {
    pub password: String,
    pub username: String,
}

/// Guarded and public data routes with their descriptions
pub const DATA_ENDPOINTS: &[(&str, &str)] = &[
    ("/public/data.csv", "Public CSV data (no auth)"),
    ("/basic-auth/users.csv", "CSV with Basic Auth required"),
    ("/bearer-auth/products.csv", "CSV with Bearer Token required"),
    ("/custom-headers/data.csv", "CSV with custom header validation"),
    ("/multi-auth/data.csv", "CSV accepting either auth method"),
];

/// Build the main application router
///
/// Each guarded route gets its gate as a route-level middleware, so an
/// unauthenticated request never reaches the handler.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Open endpoints
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/public/data.csv", get(people_csv_handler))
        // Gated endpoints
        .route(
            "/basic-auth/users.csv",
            get(people_csv_handler)
                .route_layer(from_fn_with_state(state.clone(), require_basic_auth)),
        )
        .route(
            "/bearer-auth/products.csv",
            get(products_csv_handler)
                .route_layer(from_fn_with_state(state.clone(), require_bearer_token)),
        )
        .route(
            "/custom-headers/data.csv",
            get(people_csv_handler)
                .route_layer(from_fn_with_state(state.clone(), require_api_version)),
        )
        .route("/multi-auth/data.csv", get(multi_auth_handler))
        .with_state(state)
}

/// CSV response for a dataset
fn csv_response(dataset: Dataset) -> Response {
    (
        [(header::CONTENT_TYPE, CSV_CONTENT_TYPE)],
        dataset.body(),
    )
        .into_response()
}

// =============================================================================
// Open Handlers
// =============================================================================

/// Health check endpoint handler
async fn health_handler() -> impl IntoResponse {
    let endpoints = [
        ("/public/data.csv", "Public CSV (no auth)"),
        ("/basic-auth/users.csv", "Basic Auth CSV"),
        ("/bearer-auth/products.csv", "Bearer Token CSV"),
        ("/custom-headers/data.csv", "CSV with custom header validation"),
    ]
    .into_iter()
    .map(|(path, description)| (path.to_string(), description.to_string()))
    .collect();

    Json(HealthResponse {
        endpoints,
        service: SERVICE_NAME.to_string(),
        status: "healthy".to_string(),
    })
}

/// Service descriptor handler
async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    let endpoints = std::iter::once(("/health", "Health check (no auth)"))
        .chain(DATA_ENDPOINTS.iter().copied())
        .map(|(path, description)| (format!("GET {}", path), description.to_string()))
        .collect();

    Json(IndexResponse {
        authentication: AuthenticationInfo {
            basic_auth: BasicAuthInfo {
                password: REDACTED.to_string(),
                username: state.credentials.username.clone(),
            },
            bearer_token: REDACTED.to_string(),
        },
        endpoints,
        service: "TinyETL HTTP Test Server".to_string(),
        version: "1.0".to_string(),
    })
}

// =============================================================================
// Data Handlers
// =============================================================================

async fn people_csv_handler() -> Response {
    csv_response(Dataset::People)
}

async fn products_csv_handler() -> Response {
    csv_response(Dataset::Products)
}

/// Basic-or-Bearer handler
///
/// The payload depends on which scheme matched: Basic serves the people
/// table, Bearer the products table.
async fn multi_auth_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match check_any(&headers, &state.credentials) {
        Ok(Scheme::Basic) => csv_response(Dataset::People),
        Ok(Scheme::Bearer) => csv_response(Dataset::Products),
        Err(e) => {
            tracing::debug!(reason = %e, "Multi-auth request denied");
            AuthResponse::from_error(&e, &state.credentials.realm).into_response()
        }
    }
}
