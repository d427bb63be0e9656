//! Snapshot Edge Case Tests
//!
//! Empty paths, empty segments, non-traversable values and keys that look
//! like paths.

use crate::*;

#[test]
fn test_empty_data_any_path_is_none() {
    let s = snap(json!({}));
    for p in ["anything", "a.b", "x.y.z"] {
        assert!(s.get(p).is_none(), "{}", p);
    }
}

#[test]
fn test_empty_string_path_is_none_not_document() {
    let s = snap(json!({"a": 1}));
    assert!(s.get("").is_none());
}

#[test]
fn test_empty_segment_list_is_none() {
    let s = snap(json!({"a": 1}));
    assert!(s.get(FieldPath::Segments(vec![])).is_none());
}

#[test]
fn test_empty_segments_are_none() {
    let s = snap(json!({"a": {"b": 1}}));
    for p in ["a..b", ".a", "a.", ".", "a.b."] {
        assert!(s.get(p).is_none(), "{}", p);
    }
}

#[test]
fn test_array_index_not_traversed() {
    let s = snap(json!({"a": [{"b": 1}]}));
    assert!(s.get("a.0").is_none());
    assert!(s.get("a.0.b").is_none());
}

#[test]
fn test_through_string_is_none() {
    let s = snap(json!({"a": "text"}));
    assert!(s.get("a.length").is_none());
}

#[test]
fn test_through_null_is_none() {
    let s = snap(json!({"a": null}));
    assert!(s.get("a.b").is_none());
}

#[test]
fn test_dotted_key_reachable_only_by_segments() {
    let s = snap(json!({"a.b": "literal"}));
    assert!(s.get("a.b").is_none());
    assert_eq!(*s.get(["a.b"]).unwrap(), Value::from("literal"));
}

#[test]
fn test_unicode_keys() {
    let s = snap(json!({"日本": {"語": 1}}));
    assert_eq!(*s.get("日本.語").unwrap(), Value::Int(1));
}

#[test]
fn test_set_field_rejects_empty_segment() {
    let d = doc(json!({}));
    let err: docsnap::Error = d.set_field("a..b", Value::Null).unwrap_err().into();
    assert!(err.is_invalid_path());
}

#[test]
fn test_document_from_non_object_rejected() {
    let err = docsnap::document("x", json!("scalar")).unwrap_err();
    assert!(err.is_invalid_input());
}
