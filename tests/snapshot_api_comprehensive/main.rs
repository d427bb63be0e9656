//! Snapshot API Comprehensive Test Suite
//!
//! Tests organized by functionality:
//! - snapshot::basic_ops: existence, identity, whole-document reads
//! - snapshot::path_ops: dotted and segmented field lookup
//! - snapshot::live_view: reads observe writes made through the reference
//! - snapshot::metadata_ops: metadata, timestamps, identity equality
//! - snapshot::edge_cases: empty paths, non-traversable values, odd keys
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test snapshot_api_comprehensive
//! cargo test --test snapshot_api_comprehensive snapshot::path_ops::
//! ```

use std::sync::{Arc, Once};

pub use docsnap::{
    data_from_json, DocumentData, DocumentReference, DocumentSnapshot, FieldPath,
    SnapshotMetadata, SnapshotOptions, Timestamp, Value,
};
pub use serde_json::json;

// Test modules
pub mod snapshot;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

static TRACING: Once = Once::new();

/// Install a fmt subscriber once; trace output shows with `--nocapture`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
            .try_init();
    });
}

/// Create a shared reference with a JSON payload
pub fn doc(json: serde_json::Value) -> Arc<DocumentReference> {
    init_tracing();
    docsnap::document("col/doc1", json).expect("payload must be an object")
}

/// Snapshot of a fresh reference with a JSON payload
pub fn snap(json: serde_json::Value) -> DocumentSnapshot {
    docsnap::snapshot(&doc(json)).expect("snapshot")
}

/// Build an object value from pairs
pub fn obj<const N: usize>(pairs: [(&str, Value); N]) -> Value {
    Value::Object(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

/// Standard leaf values covering every type
pub fn standard_test_values() -> Vec<(&'static str, Value)> {
    vec![
        ("null", Value::Null),
        ("bool", Value::Bool(true)),
        ("int", Value::Int(-42)),
        ("float", Value::Float(3.5)),
        ("string", Value::String("hello world".into())),
        ("string_unicode", Value::String("日本語 🌍".into())),
        ("bytes", Value::Bytes(vec![0, 1, 255])),
        ("array", Value::Array(vec![Value::Int(1), Value::Null])),
        ("object", obj([("k", Value::Int(1))])),
        (
            "timestamp",
            Value::Timestamp(Timestamp::new(1_700_000_000, 5).expect("valid")),
        ),
    ]
}
