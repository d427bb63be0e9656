//! Convenient imports for docsnap.
//!
//! ```
//! use docsnap::prelude::*;
//!
//! let doc = docsnap::document("a", json!({"k": "v"}))?;
//! assert_eq!(doc.id(), "a");
//! # Ok::<(), docsnap::Error>(())
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Document types
pub use crate::types::{DocumentReference, DocumentSnapshot, SnapshotMetadata, SnapshotOptions};

// Core types
pub use crate::types::{DocumentData, FieldPath, Timestamp, Value};

// Re-export serde_json for convenience
pub use serde_json::json;
