//! Common test utilities and helpers for integration tests

#![allow(dead_code)]

use base64::Engine;

use tinyetl_test_server::config::CredentialsConfig;
use tinyetl_test_server::server::{AppState, Server};

pub const TEST_USERNAME: &str = "etl-user";
pub const TEST_PASSWORD: &str = "etl-pass:with-colon";
pub const TEST_TOKEN: &str = "integration-token-987";
pub const TEST_REALM: &str = "Integration Realm";

/// Credentials distinct from the built-in defaults
pub fn test_credentials() -> CredentialsConfig {
    CredentialsConfig {
        username: TEST_USERNAME.to_string(),
        password: TEST_PASSWORD.to_string(),
        bearer_token: TEST_TOKEN.to_string(),
        realm: TEST_REALM.to_string(),
    }
}

/// `Authorization` value for Basic credentials
pub fn basic_auth_value(username: &str, password: &str) -> String {
    let encoded =
        base64::engine::general_purpose::STANDARD.encode(format!("{}:{}", username, password));
    format!("Basic {}", encoded)
}

/// Run a test server in the background and return its base URL
/// The server will be shut down when the returned shutdown sender is dropped or sent
pub async fn run_test_server(
    credentials: CredentialsConfig,
) -> (String, tokio::sync::oneshot::Sender<()>) {
    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to get local address");

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let app = Server::app(AppState::new(credentials));

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
            .expect("Server error");
    });

    (format!("http://{}", addr), shutdown_tx)
}
