//! Error types for the `sous-model` crate.

use thiserror::Error;

/// Errors that can occur when talking to a chat-completion backend.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Invalid client configuration (missing key, bad base URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP request itself failed (connect, timeout, TLS).
    #[error("Request error ({provider}): {message}")]
    Request {
        /// The backend that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// The API answered with a non-success status.
    #[error("API error ({provider}): {message}")]
    Api {
        /// The backend that produced the error.
        provider: String,
        /// The API's own error message, or the raw body.
        message: String,
    },

    /// The response body could not be interpreted.
    #[error("Response parse error: {0}")]
    Parse(String),
}

/// A convenience result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
