//! Error types for the debug bar client.
//!
//! These cover construction and delivery failures inside the crate. They
//! never escape the public notification methods: a failed delivery is logged
//! at debug level and dropped so the host application is unaffected by a
//! missing or unreachable debug bar.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while building or delivering a notification.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration-related error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
