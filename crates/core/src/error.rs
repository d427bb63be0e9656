//! Error types for docsnap-core
//!
//! Field absence is not an error: resolvers return `Option`. These errors
//! cover malformed input only.

use thiserror::Error;

/// Errors raised while constructing core values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Field path is empty or contains an empty segment
    #[error("invalid field path: {0}")]
    InvalidPath(String),

    /// Timestamp components are out of range
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
