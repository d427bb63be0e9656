//! Document references and snapshots for docsnap
//!
//! This crate provides the read path over a single document:
//! - [`DocumentReference`]: shared handle owning a document's id and payload
//! - [`DocumentSnapshot`]: read-only live view with field-path lookup
//! - [`SnapshotMetadata`] and [`SnapshotOptions`]: values carried alongside
//!
//! ## Design Principle
//!
//! - **docsnap-core** defines values, timestamps and path resolution
//! - **docsnap-document** wires them to a shared, mutable reference
//!
//! Everything here is synchronous. Snapshots never copy payloads.

#![warn(missing_docs)]

pub mod error;
pub mod metadata;
pub mod options;
pub mod reference;
pub mod snapshot;

pub use error::{Result, SnapshotError};
pub use metadata::SnapshotMetadata;
pub use options::{ServerTimestampBehavior, SnapshotOptions};
pub use reference::DocumentReference;
pub use snapshot::DocumentSnapshot;
