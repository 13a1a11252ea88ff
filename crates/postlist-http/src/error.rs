//! Internal error types for listing HTTP operations.
//!
//! These errors are internal to `postlist-http` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for listing HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors raised while talking to the listing endpoint.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The endpoint answered with a non-success status.
    #[error("Listing request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The client could not be built from its configuration.
    #[error("Invalid client configuration: {message}")]
    InvalidConfig {
        /// What was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
