//! Snapshot Basic Operations Tests
//!
//! Tests for exists, id, data and get on present and missing documents.

use crate::*;

#[test]
fn test_exists_true_for_reference() {
    let s = snap(json!({"a": 1}));
    assert!(s.exists());
}

#[test]
fn test_exists_true_for_empty_payload() {
    let s = snap(json!({}));
    assert!(s.exists());
    assert!(s.data().unwrap().is_empty());
}

#[test]
fn test_exists_false_without_reference() {
    let s = DocumentSnapshot::new(None).unwrap();
    assert!(!s.exists());
}

#[test]
fn test_id_is_last_path_segment() {
    let s = snap(json!({}));
    assert_eq!(s.id().unwrap(), "doc1");
    assert_eq!(s.reference().unwrap().path(), "col/doc1");
}

#[test]
fn test_id_of_missing_document_fails() {
    let s = DocumentSnapshot::missing().unwrap();
    let err: docsnap::Error = s.id().unwrap_err().into();
    assert!(err.is_not_found());
}

#[test]
fn test_data_returns_whole_payload() {
    let s = snap(json!({"name": "Alice", "age": 30}));
    let data = s.data().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data["name"], Value::from("Alice"));
    assert_eq!(data["age"], Value::Int(30));
}

#[test]
fn test_data_json_round_trips_document() {
    let payload = json!({"a": {"b": [1, 2]}, "c": null});
    let s = snap(payload.clone());
    assert_eq!(s.data_json(), Some(payload));
}

#[test]
fn test_missing_document_reads_are_none() {
    let s = DocumentSnapshot::missing().unwrap();
    assert!(s.data().is_none());
    assert!(s.get("a").is_none());
    assert!(s.get_json("a").is_none());
}

#[test]
fn test_get_each_value_type() {
    let d = doc(json!({}));
    for (key, value) in standard_test_values() {
        d.set_field(key, value).unwrap();
    }
    let s = docsnap::snapshot(&d).unwrap();
    for (key, value) in standard_test_values() {
        assert_eq!(*s.get(key).unwrap(), value, "field {}", key);
    }
}

#[test]
fn test_options_accepted_and_inert() {
    let s = snap(json!({"t": {"u": 1}}));
    let estimate = SnapshotOptions::with_server_timestamps(
        docsnap::ServerTimestampBehavior::Estimate,
    );
    assert_eq!(*s.get_with_options("t.u", &estimate).unwrap(), Value::Int(1));
    assert_eq!(s.data_with_options(&estimate).unwrap().len(), 1);
}
