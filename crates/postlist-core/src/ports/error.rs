//! Error types for listing port operations.

use thiserror::Error;

/// Errors from listing port operations.
///
/// These are domain-level errors. Implementation-specific errors (HTTP,
/// JSON) are mapped to these by the adapter.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The request never produced a response.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The endpoint answered with a non-success status.
    #[error("Listing request failed with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The response body did not match the expected shape.
    #[error("Invalid listing response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The adapter is misconfigured (bad base URL and similar).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for listing port operations.
pub type ListingResult<T> = Result<T, ListingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ListingError::Status { status: 503 };
        assert!(err.to_string().contains("503"));

        let err = ListingError::InvalidResponse {
            message: "missing field `totalPages`".to_string(),
        };
        assert!(err.to_string().contains("totalPages"));
    }
}
