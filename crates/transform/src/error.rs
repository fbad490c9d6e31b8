//! Error types for the transform crate.

use thiserror::Error;

/// Result type alias for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Errors that can occur while reading a record payload.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Payload is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload is valid JSON but the top level is not an array
    #[error("Expected a JSON array at the top level, found {0}")]
    NotAnArray(&'static str),
}
