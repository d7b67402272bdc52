//! tinyetl-test-server - HTTP fixture for exercising ETL fetch code paths
//!
//! This is the main entry point for the fixture server.

use clap::Parser;
use tokio::signal;
use tracing::{info, warn};

use tinyetl_test_server::config::Config;
use tinyetl_test_server::logging::init_tracing;
use tinyetl_test_server::server::router::DATA_ENDPOINTS;
use tinyetl_test_server::server::{AppState, Server};

/// tinyetl-test-server - static CSV behind Basic, Bearer and header auth
#[derive(Parser, Debug)]
#[command(name = "tinyetl-test-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long, env = "TINYETL_CONFIG")]
    config: Option<String>,

    /// Override the listening port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = load_config(&args)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_tracing(&config.logging)?;

    for warning in config.warnings() {
        warn!(warning = %warning, "Suspicious configuration value");
    }

    log_banner(&config);

    let state = AppState::new(config.credentials.clone());
    let server = Server::new(config.server.clone(), state);

    server.run(shutdown_signal()).await?;

    info!("tinyetl-test-server shutdown complete");
    Ok(())
}

/// Load configuration from file or environment
fn load_config(args: &Args) -> anyhow::Result<Config> {
    match &args.config {
        Some(path) => {
            // Use eprintln! since tracing is not yet initialized
            eprintln!("Loading configuration from file: {}", path);
            Config::from_file(path).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
        }
        None => {
            eprintln!("Loading configuration from environment variables");
            Config::from_env().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
        }
    }
}

/// Startup banner: who can log in and where the data lives
fn log_banner(config: &Config) {
    let base = format!("http://localhost:{}", config.server.port);
    let endpoints: Vec<String> = DATA_ENDPOINTS
        .iter()
        .map(|(path, _)| format!("{}{}", base, path))
        .collect();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        basic_auth_username = %config.credentials.username,
        realm = %config.credentials.realm,
        endpoints = ?endpoints,
        "Starting TinyETL HTTP test server"
    );
}

/// Create a future that resolves when a shutdown signal is received
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
