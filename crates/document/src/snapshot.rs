//! DocumentSnapshot: read-only view over a document reference
//!
//! ## Design: LIVE VIEW
//!
//! A snapshot holds only an optional `Arc<DocumentReference>` and three
//! timestamps captured at construction. It never copies the payload: `data`
//! and `get` return read guards into the reference, so writes made through
//! the reference before the call are visible in the result.
//!
//! ## Existence
//!
//! A snapshot exists iff it wraps a reference. There is no state for
//! "reference present but no data": a reference with an empty payload
//! still exists.
//!
//! ## Absence
//!
//! Missing fields and missing documents are `None`. Only [`DocumentSnapshot::id`]
//! fails on a missing document, since an absent document has no identity.
//!
//! ## Equality
//!
//! [`DocumentSnapshot::is_equal`] is instance identity. Two snapshots of the
//! same reference are never equal to each other.

use crate::error::{Result, SnapshotError};
use crate::metadata::SnapshotMetadata;
use crate::options::SnapshotOptions;
use crate::reference::DocumentReference;
use chrono::Utc;
use docsnap_core::{data_to_json, resolve, DocumentData, FieldPath, Timestamp, Value};
use parking_lot::{MappedRwLockReadGuard, RwLockReadGuard};
use std::sync::Arc;
use tracing::trace;

/// Read of a single document at a point in time
pub struct DocumentSnapshot {
    reference: Option<Arc<DocumentReference>>,
    create_time: Timestamp,
    update_time: Timestamp,
    read_time: Timestamp,
}

impl DocumentSnapshot {
    /// Create a snapshot of `reference`, or of a missing document if `None`
    ///
    /// Each of the create, update and read times captures "now"
    /// independently, so they need not be equal.
    ///
    /// # Errors
    ///
    /// Propagates timestamp construction failures.
    pub fn new(reference: Option<Arc<DocumentReference>>) -> Result<Self> {
        let create_time = Timestamp::from_date(Utc::now())?;
        let update_time = Timestamp::from_date(Utc::now())?;
        let read_time = Timestamp::from_date(Utc::now())?;

        trace!(
            doc = ?reference.as_deref().map(DocumentReference::id),
            read_time = %read_time,
            "created document snapshot"
        );

        Ok(Self {
            reference,
            create_time,
            update_time,
            read_time,
        })
    }

    /// Snapshot of an existing document
    ///
    /// # Examples
    ///
    /// ```
    /// use docsnap_document::{DocumentReference, DocumentSnapshot};
    /// use docsnap_core::{data_from_json, Value};
    ///
    /// let doc = DocumentReference::new("a", data_from_json(serde_json::json!({"n": 1})).unwrap())
    ///     .into_shared();
    /// let snap = DocumentSnapshot::of(doc).unwrap();
    /// assert!(snap.exists());
    /// assert_eq!(*snap.get("n").unwrap(), Value::Int(1));
    /// ```
    pub fn of(reference: Arc<DocumentReference>) -> Result<Self> {
        Self::new(Some(reference))
    }

    /// Snapshot of a document that does not exist
    pub fn missing() -> Result<Self> {
        Self::new(None)
    }

    /// True if the snapshot wraps a document reference
    pub fn exists(&self) -> bool {
        self.reference.is_some()
    }

    /// The wrapped reference
    pub fn reference(&self) -> Option<&Arc<DocumentReference>> {
        self.reference.as_ref()
    }

    /// Document id
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::MissingReference`] if the snapshot does not
    /// exist. Callers should check [`exists`](Self::exists) first.
    pub fn id(&self) -> Result<&str> {
        self.reference
            .as_deref()
            .map(DocumentReference::id)
            .ok_or(SnapshotError::MissingReference)
    }

    /// Metadata about this read, rebuilt on every call
    pub fn metadata(&self) -> SnapshotMetadata {
        SnapshotMetadata::synced()
    }

    /// When the snapshot was constructed
    pub fn create_time(&self) -> Timestamp {
        self.create_time
    }

    /// Update marker captured at construction
    pub fn update_time(&self) -> Timestamp {
        self.update_time
    }

    /// Read marker captured at construction
    pub fn read_time(&self) -> Timestamp {
        self.read_time
    }

    /// The whole payload, read live from the reference
    ///
    /// Returns `None` if the document does not exist. The guard must be
    /// dropped before writing through the reference on this thread.
    pub fn data(&self) -> Option<RwLockReadGuard<'_, DocumentData>> {
        self.data_with_options(&SnapshotOptions::default())
    }

    /// [`data`](Self::data) with read options
    pub fn data_with_options(
        &self,
        _options: &SnapshotOptions,
    ) -> Option<RwLockReadGuard<'_, DocumentData>> {
        self.reference.as_ref().map(|r| r.read())
    }

    /// The value at `path`, read live from the reference
    ///
    /// Returns `None` if the document does not exist or the path does not
    /// resolve.
    pub fn get(&self, path: impl Into<FieldPath>) -> Option<MappedRwLockReadGuard<'_, Value>> {
        self.get_with_options(path, &SnapshotOptions::default())
    }

    /// [`get`](Self::get) with read options
    pub fn get_with_options(
        &self,
        path: impl Into<FieldPath>,
        _options: &SnapshotOptions,
    ) -> Option<MappedRwLockReadGuard<'_, Value>> {
        let path = path.into();
        let guard = self.reference.as_ref()?.read();
        RwLockReadGuard::try_map(guard, |data| resolve(data, &path)).ok()
    }

    /// Copy of the whole payload as JSON
    pub fn data_json(&self) -> Option<serde_json::Value> {
        self.data().map(|data| data_to_json(&data))
    }

    /// Copy of the value at `path` as JSON
    pub fn get_json(&self, path: impl Into<FieldPath>) -> Option<serde_json::Value> {
        self.get(path).map(|v| serde_json::Value::from(v.clone()))
    }

    /// True only if `other` is this very snapshot
    ///
    /// This does not compare references or payloads.
    pub fn is_equal(&self, other: &DocumentSnapshot) -> bool {
        std::ptr::eq(self, other)
    }
}

impl std::fmt::Debug for DocumentSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentSnapshot")
            .field("id", &self.reference.as_deref().map(DocumentReference::id))
            .field("exists", &self.exists())
            .field("create_time", &self.create_time)
            .field("update_time", &self.update_time)
            .field("read_time", &self.read_time)
            .finish()
    }
}
