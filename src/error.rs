//! Unified error types for docsnap.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users. Field absence is never an
//! error; accessors return `Option`.

use thiserror::Error;

/// All docsnap errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Entity not found (e.g. the reference behind a missing snapshot)
    #[error("not found: {0}")]
    NotFound(String),

    /// Wrong type for operation
    #[error("wrong type: expected {expected}, got {actual}")]
    WrongType {
        /// Expected type
        expected: String,
        /// Actual type found
        actual: String,
    },

    /// Invalid field path
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Timestamp out of range
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for docsnap operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is an invalid-path error.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Error::InvalidPath(_))
    }

    /// Check if this error was caused by bad input rather than state.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::WrongType { .. }
                | Error::InvalidPath(_)
                | Error::InvalidTimestamp(_)
                | Error::Serialization(_)
        )
    }
}

// Convert from core errors
impl From<docsnap_core::CoreError> for Error {
    fn from(e: docsnap_core::CoreError) -> Self {
        use docsnap_core::CoreError;
        match e {
            CoreError::InvalidPath(msg) => Error::InvalidPath(msg),
            CoreError::InvalidTimestamp(msg) => Error::InvalidTimestamp(msg),
        }
    }
}

// Convert from document errors
impl From<docsnap_document::SnapshotError> for Error {
    fn from(e: docsnap_document::SnapshotError) -> Self {
        use docsnap_document::SnapshotError;
        match e {
            SnapshotError::Core(core) => core.into(),
            SnapshotError::MissingReference => {
                Error::NotFound("document reference".to_string())
            }
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
