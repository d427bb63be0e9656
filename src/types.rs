//! Public types for the docsnap API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Core value types
pub use docsnap_core::{DocumentData, Value};

// Time
pub use docsnap_core::Timestamp;

// Field paths
pub use docsnap_core::FieldPath;

// Document types
pub use docsnap_document::{
    DocumentReference, DocumentSnapshot, ServerTimestampBehavior, SnapshotMetadata,
    SnapshotOptions,
};

// Path resolution and JSON conversion
pub use docsnap_core::{data_from_json, data_to_json, resolve, resolve_value};
