//! Configuration management for tinyetl-test-server
//!
//! This module handles loading, parsing, and validating application configuration
//! from YAML files and environment variables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Credentials the auth gate compares against
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileRead(format!("Failed to read config file: {}", e)))?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let expanded = expand_env_vars(yaml);
        serde_yaml::from_str(&expanded)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse YAML: {}", e)))
    }

    /// Load configuration from environment variables
    ///
    /// Credentials use the unprefixed names ETL test suites already export
    /// (`BASIC_AUTH_USERNAME`, `BASIC_AUTH_PASSWORD`, `BEARER_TOKEN`); everything
    /// else is read with the `TINYETL_` prefix.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Server config from env
        if let Ok(host) = std::env::var("TINYETL_SERVER_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("TINYETL_SERVER_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid port number".to_string()))?;
        }

        // Credentials from env
        if let Ok(username) = std::env::var("BASIC_AUTH_USERNAME") {
            config.credentials.username = username;
        }
        if let Ok(password) = std::env::var("BASIC_AUTH_PASSWORD") {
            config.credentials.password = password;
        }
        if let Ok(token) = std::env::var("BEARER_TOKEN") {
            config.credentials.bearer_token = token;
        }
        if let Ok(realm) = std::env::var("TINYETL_AUTH_REALM") {
            config.credentials.realm = realm;
        }

        // Logging config from env
        if let Ok(level) = std::env::var("TINYETL_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(format) = std::env::var("TINYETL_LOG_FORMAT") {
            config.logging.format = format;
        }

        Ok(config)
    }

    /// Values the server accepts but that no client will ever match
    ///
    /// These never stop startup; the caller logs them and serves anyway.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.credentials.username.contains(':') {
            warnings.push(
                "Basic auth username contains ':'; Basic credentials will never match".to_string(),
            );
        }
        if self.credentials.bearer_token.is_empty() {
            warnings.push("Bearer token is empty; Bearer requests will never match".to_string());
        }
        if axum::http::HeaderValue::from_str(&self.credentials.realm).is_err() {
            warnings.push(
                "Auth realm is not a valid header value; challenges will omit WWW-Authenticate"
                    .to_string(),
            );
        }
        warnings
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8680
}

/// Expected credentials and challenge realm
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct CredentialsConfig {
    /// Basic auth username
    #[serde(default = "default_username")]
    pub username: String,

    /// Basic auth password
    #[serde(default = "default_password")]
    pub password: String,

    /// Bearer token
    #[serde(default = "default_bearer_token")]
    pub bearer_token: String,

    /// Realm advertised in `WWW-Authenticate` challenges
    #[serde(default = "default_realm")]
    pub realm: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
            bearer_token: default_bearer_token(),
            realm: default_realm(),
        }
    }
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .field("bearer_token", &REDACTED)
            .field("realm", &self.realm)
            .finish()
    }
}

/// Placeholder shown wherever a secret would otherwise be rendered
pub const REDACTED: &str = "***hidden***";

fn default_username() -> String {
    "testuser".to_string()
}

fn default_password() -> String {
    "testpass".to_string()
}

fn default_bearer_token() -> String {
    "test-bearer-token-12345".to_string()
}

fn default_realm() -> String {
    "TinyETL Test Server".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (`json` or `pretty`)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

/// Configuration error types
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Error reading configuration file
    #[error("Failed to read configuration file: {0}")]
    FileRead(String),

    /// Error parsing configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Expand environment variables in a string
///
/// Supports `${VAR_NAME}` syntax; unknown variables are left untouched.
fn expand_env_vars(input: &str) -> String {
    let re = regex_lite::Regex::new(r"\$\{([^}]+)\}")
        .expect("Invalid regex pattern for environment variable expansion");

    re.replace_all(input, |caps: &regex_lite::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
    })
    .into_owned()
}
