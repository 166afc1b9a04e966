//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A non-empty `received_at` value that could not be parsed as a
    /// timestamp. The offending string is carried so callers can decide
    /// whether to hide or flag the row.
    #[error("invalid received timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
