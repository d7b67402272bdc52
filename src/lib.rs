//! tinyetl-test-server - HTTP fixture for exercising ETL fetch code paths
//!
//! This crate serves two static CSV datasets behind Basic, Bearer and
//! custom-header authentication gates.

pub mod auth;
pub mod config;
pub mod datasets;
pub mod error;
pub mod logging;
pub mod server;
