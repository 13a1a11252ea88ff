//! Errors raised by the list controller itself.

use thiserror::Error;

/// Errors from controller construction and parameter changes.
///
/// Fetch failures are never returned through this type; they land in
/// `ListState::error` instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ControllerError {
    /// Construction options failed validation.
    #[error("Invalid controller options: {message}")]
    InvalidOptions {
        /// What was invalid
        message: String,
    },

    /// A page size of zero was requested.
    #[error("Page size must be at least 1")]
    InvalidPageSize,
}
