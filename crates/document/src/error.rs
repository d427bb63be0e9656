//! Error types for docsnap-document

use docsnap_core::CoreError;
use thiserror::Error;

/// Errors raised by references and snapshots
///
/// A missing field is not an error. `MissingReference` is raised only when
/// a caller asks a snapshot of an absent document for its identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// Error from core value construction (timestamps, paths)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Snapshot wraps no document reference
    #[error("snapshot has no document reference")]
    MissingReference,
}

/// Result type for document operations
pub type Result<T> = std::result::Result<T, SnapshotError>;
