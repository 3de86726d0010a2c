//! Error types for the reqres client.

use thiserror::Error;

/// Errors that can occur while talking to the reqres service.
///
/// An unexpected status code is not one of them; statuses are returned to
/// the caller inside [`crate::ApiResponse`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service is offline or unreachable
    #[error("Service unreachable: {0}")]
    ServiceUnreachable(String),

    /// Base URL or request path does not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Response body did not match the expected shape
    #[error("Failed to parse {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request body could not be serialized
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
