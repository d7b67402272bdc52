//! Authentication gate for tinyetl-test-server
//!
//! This module provides the credential checks wrapped around endpoint handlers:
//! - Basic authentication
//! - Bearer token authentication
//! - Custom header validation
//! - Basic-or-Bearer combined check

pub mod credentials;
pub mod gate;

pub use credentials::{basic_credentials, bearer_token, BasicCredentials, BEARER_PREFIX};
pub use gate::{
    check_any, check_api_version, check_basic, check_bearer, ResponseStamp, Scheme,
    API_VERSION_HEADER, RECEIVED_USER_AGENT_HEADER, SERVER_VERSION_HEADER,
};
