//! Building references and snapshots from JSON.
//!
//! These helpers cover the common case of seeding a document from a JSON
//! object and reading it back through a snapshot.

use crate::error::{Error, Result};
use crate::types::{data_from_json, DocumentReference, DocumentSnapshot};
use std::sync::Arc;

/// Create a shared reference at `path` with a JSON object payload.
///
/// # Errors
///
/// Returns [`Error::WrongType`] if `json` is not an object.
///
/// # Example
///
/// ```
/// use docsnap::{document, snapshot};
///
/// let doc = document("users/alice", serde_json::json!({"age": 30}))?;
/// let snap = snapshot(&doc)?;
/// assert_eq!(snap.id()?, "alice");
/// # Ok::<(), docsnap::Error>(())
/// ```
pub fn document(path: &str, json: serde_json::Value) -> Result<Arc<DocumentReference>> {
    let actual = json_type_name(&json);
    let data = data_from_json(json).ok_or_else(|| Error::WrongType {
        expected: "object".to_string(),
        actual: actual.to_string(),
    })?;
    Ok(DocumentReference::with_path(path, data).into_shared())
}

/// Create a shared reference at `path` from JSON text.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if `text` is not valid JSON, and
/// [`Error::WrongType`] if it is not an object.
pub fn document_from_str(path: &str, text: &str) -> Result<Arc<DocumentReference>> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    document(path, json)
}

/// Take a snapshot of `reference`.
pub fn snapshot(reference: &Arc<DocumentReference>) -> Result<DocumentSnapshot> {
    Ok(DocumentSnapshot::of(Arc::clone(reference))?)
}

fn json_type_name(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
