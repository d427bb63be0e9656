//! # docsnap
//!
//! In-memory document snapshots with dotted field-path lookup.
//!
//! A [`DocumentReference`] owns a document's id and its mutable payload. A
//! [`DocumentSnapshot`] is a read-only view over a reference: it reports
//! existence, exposes the whole payload, and resolves single fields by
//! [`FieldPath`].
//!
//! ## Quick Start
//!
//! ```
//! use docsnap::prelude::*;
//!
//! let doc = docsnap::document("users/alice", json!({"profile": {"age": 30}}))?;
//! let snap = docsnap::snapshot(&doc)?;
//!
//! assert!(snap.exists());
//! assert_eq!(*snap.get("profile.age").unwrap(), Value::Int(30));
//! assert!(snap.get("profile.name").is_none());
//! # Ok::<(), docsnap::Error>(())
//! ```
//!
//! ## Semantics
//!
//! - Missing fields and missing documents are `None`, never errors
//! - Snapshots read the reference's payload live; nothing is copied
//! - Empty paths and empty segments resolve to `None`
//! - Snapshot equality is instance identity

#![warn(missing_docs)]

mod document;
mod error;
mod types;

pub mod prelude;

// Re-export main entry points
pub use document::{document, document_from_str, snapshot};
pub use error::{Error, Result};

// Re-export types
pub use types::*;
