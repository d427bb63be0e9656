//! Document references
//!
//! A [`DocumentReference`] owns a document's identity and its mutable
//! payload. It is shared as `Arc<DocumentReference>` between the caller and
//! any number of snapshots. Snapshots never copy the payload; they read it
//! through the reference on every access.
//!
//! ## Locking
//!
//! The payload sits behind a `parking_lot::RwLock`. Read guards handed out by
//! [`DocumentReference::read`] (and by snapshot accessors) must be dropped
//! before writing through the same reference on the same thread.

use crate::error::{Result, SnapshotError};
use docsnap_core::{CoreError, DocumentData, FieldPath, Value};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;
use tracing::trace;

/// Handle to a document's identity and payload
pub struct DocumentReference {
    id: String,
    path: String,
    data: RwLock<DocumentData>,
}

impl DocumentReference {
    /// Create a reference whose path is its id
    ///
    /// # Examples
    ///
    /// ```
    /// use docsnap_document::DocumentReference;
    /// use docsnap_core::DocumentData;
    ///
    /// let doc = DocumentReference::new("alice", DocumentData::new());
    /// assert_eq!(doc.id(), "alice");
    /// assert_eq!(doc.path(), "alice");
    /// ```
    pub fn new(id: impl Into<String>, data: DocumentData) -> Self {
        let id = id.into();
        Self {
            path: id.clone(),
            id,
            data: RwLock::new(data),
        }
    }

    /// Create a reference from a slash-separated document path
    ///
    /// The id is the last path segment: `users/alice` has id `alice`.
    pub fn with_path(path: impl Into<String>, data: DocumentData) -> Self {
        let path = path.into();
        let id = path.rsplit('/').next().unwrap_or_default().to_string();
        Self {
            id,
            path,
            data: RwLock::new(data),
        }
    }

    /// Wrap this reference for sharing with snapshots
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Document id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full document path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Live read access to the payload
    pub fn read(&self) -> RwLockReadGuard<'_, DocumentData> {
        self.data.read()
    }

    /// Live write access to the payload
    pub fn write(&self) -> RwLockWriteGuard<'_, DocumentData> {
        self.data.write()
    }

    /// Replace the whole payload, returning the previous one
    pub fn set_data(&self, data: DocumentData) -> DocumentData {
        trace!(doc = %self.id, fields = data.len(), "replacing document data");
        std::mem::replace(&mut *self.data.write(), data)
    }

    /// Write `value` at `path`
    ///
    /// Missing intermediate fields are created as empty objects. An
    /// intermediate field holding a non-object value is replaced by an
    /// object.
    ///
    /// # Errors
    ///
    /// Returns an invalid-path error if `path` is empty or has an empty
    /// segment.
    pub fn set_field(&self, path: impl Into<FieldPath>, value: Value) -> Result<()> {
        let path = path.into();
        let segments = path
            .segments()
            .ok_or_else(|| SnapshotError::from(CoreError::InvalidPath(path.to_string())))?;
        trace!(doc = %self.id, path = %path, "setting field");
        insert_at(&mut self.data.write(), &segments, value);
        Ok(())
    }

    /// Remove the value at `path`, returning it if it was present
    pub fn delete_field(&self, path: impl Into<FieldPath>) -> Option<Value> {
        let path = path.into();
        let segments = path.segments()?;
        trace!(doc = %self.id, path = %path, "deleting field");
        remove_at(&mut self.data.write(), &segments)
    }
}

fn insert_at(map: &mut DocumentData, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [last] => {
            map.insert(last.to_string(), value);
        }
        [first, rest @ ..] => {
            let slot = map.entry(first.to_string()).or_insert_with(Value::object);
            match slot {
                Value::Object(child) => insert_at(child, rest, value),
                other => {
                    let mut child = DocumentData::new();
                    insert_at(&mut child, rest, value);
                    *other = Value::Object(child);
                }
            }
        }
    }
}

fn remove_at(map: &mut DocumentData, segments: &[&str]) -> Option<Value> {
    match segments {
        [] => None,
        [last] => map.remove(*last),
        [first, rest @ ..] => match map.get_mut(*first)? {
            Value::Object(child) => remove_at(child, rest),
            _ => None,
        },
    }
}

impl std::fmt::Debug for DocumentReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentReference")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("fields", &self.data.read().len())
            .finish()
    }
}
