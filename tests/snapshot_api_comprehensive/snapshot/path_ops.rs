//! Snapshot Path Operations Tests
//!
//! Tests for field lookup:
//! - Dotted string paths ("foo.bar")
//! - Segment list paths (["foo", "bar"])
//! - Subtree and array returns

use crate::*;

#[test]
fn test_dotted_path_nested_value() {
    let s = snap(json!({"foo": {"bar": 42}}));
    assert_eq!(*s.get("foo.bar").unwrap(), Value::Int(42));
}

#[test]
fn test_segment_path_nested_value() {
    let s = snap(json!({"foo": {"bar": 42}}));
    assert_eq!(*s.get(["foo", "bar"]).unwrap(), Value::Int(42));
    assert_eq!(
        *s.get(vec!["foo".to_string(), "bar".to_string()]).unwrap(),
        Value::Int(42)
    );
}

#[test]
fn test_field_path_value_accepted() {
    let s = snap(json!({"foo": {"bar": 42}}));
    let path: FieldPath = "foo.bar".parse().unwrap();
    assert_eq!(*s.get(&path).unwrap(), Value::Int(42));
}

#[test]
fn test_deep_nesting() {
    let s = snap(json!({"l1": {"l2": {"l3": {"value": "deep"}}}}));
    assert_eq!(*s.get("l1.l2.l3.value").unwrap(), Value::from("deep"));
}

#[test]
fn test_missing_leaf_is_none() {
    let s = snap(json!({"foo": {"bar": 42}}));
    assert!(s.get("foo.baz").is_none());
}

#[test]
fn test_missing_intermediate_is_none() {
    let s = snap(json!({"foo": {"bar": 42}}));
    assert!(s.get("nope.bar").is_none());
}

#[test]
fn test_through_scalar_is_none() {
    let s = snap(json!({"foo": 1}));
    assert!(s.get("foo.baz").is_none());
}

#[test]
fn test_returns_subtree() {
    let s = snap(json!({"a": {"b": {"c": 1, "d": 2}}}));
    assert_eq!(
        *s.get("a.b").unwrap(),
        obj([("c", Value::Int(1)), ("d", Value::Int(2))])
    );
}

#[test]
fn test_returns_whole_array() {
    let s = snap(json!({"a": [1, 2, 3]}));
    assert_eq!(
        *s.get("a").unwrap(),
        Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
    );
    assert_eq!(s.get_json("a"), Some(json!([1, 2, 3])));
}

#[test]
fn test_null_leaf_is_present() {
    let s = snap(json!({"a": null}));
    assert_eq!(*s.get("a").unwrap(), Value::Null);
}

#[test]
fn test_matches_manual_traversal() {
    let payload = json!({"x": {"y": {"z": [true, "s"]}}});
    let s = snap(payload.clone());
    let manual = Value::from(payload["x"]["y"]["z"].clone());
    assert_eq!(*s.get("x.y.z").unwrap(), manual);
}
