//! Error types for the minard library.
//!
//! This module defines a comprehensive error enum that covers all possible
//! error conditions in the library. The render hot path (classification and
//! selection) never returns these: hot-path failures degrade to sensible
//! defaults instead of propagating.

use thiserror::Error;

/// The main error type for minard operations.
#[derive(Error, Debug)]
pub enum MinardError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Color token parsing errors
    #[error("Invalid color token: {token}")]
    InvalidColor { token: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with MinardError
pub type Result<T> = std::result::Result<T, MinardError>;
