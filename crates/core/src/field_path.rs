//! Field paths and field-path resolution
//!
//! A [`FieldPath`] locates a value inside nested document data. It is given
//! either as a dotted string (`"foo.bar"`) or as an explicit list of
//! segments. Both forms normalize to the same segment sequence before
//! traversal.
//!
//! ## Resolution Rules
//!
//! - Traversal descends only through `Value::Object`
//! - Arrays are returned whole; there is no index traversal
//! - A missing key, or a non-object value before the last segment, is
//!   NOT_FOUND (`None`), never an error
//! - An empty path, or a path with any empty segment (`"a..b"`, `".a"`,
//!   `"a."`), is NOT_FOUND. It never resolves to the whole document

use crate::error::{CoreError, CoreResult};
use crate::value::{DocumentData, Value};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Separator between segments of a dotted field path
pub const SEPARATOR: char = '.';

/// Location of a field within a document
///
/// # Examples
///
/// ```
/// use docsnap_core::FieldPath;
///
/// let dotted = FieldPath::from("foo.bar");
/// let segmented = FieldPath::from(["foo", "bar"]);
/// assert_eq!(dotted.segments(), segmented.segments());
///
/// // Segment lists treat dots as part of the key
/// let literal = FieldPath::from(["foo.bar"]);
/// assert_eq!(literal.segments(), Some(vec!["foo.bar"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldPath {
    /// Dot-separated path string
    Dotted(String),
    /// Already-segmented path
    Segments(Vec<String>),
}

impl FieldPath {
    /// Normalized segment sequence
    ///
    /// Returns `None` when the path is empty or contains an empty segment.
    pub fn segments(&self) -> Option<Vec<&str>> {
        let segments: Vec<&str> = match self {
            FieldPath::Dotted(s) => s.split(SEPARATOR).collect(),
            FieldPath::Segments(v) => v.iter().map(String::as_str).collect(),
        };
        if segments.is_empty() || segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        Some(segments)
    }

    /// Check whether this path can ever resolve to a value
    pub fn is_valid(&self) -> bool {
        self.segments().is_some()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Dotted(s) => f.write_str(s),
            FieldPath::Segments(v) => f.write_str(&v.join(".")),
        }
    }
}

impl FromStr for FieldPath {
    type Err = CoreError;

    /// Strict parse: rejects empty paths and empty segments
    fn from_str(s: &str) -> CoreResult<Self> {
        if s.is_empty() {
            return Err(CoreError::InvalidPath("path is empty".to_string()));
        }
        if s.split(SEPARATOR).any(str::is_empty) {
            return Err(CoreError::InvalidPath(format!(
                "empty segment in '{}'",
                s
            )));
        }
        Ok(FieldPath::Dotted(s.to_string()))
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        FieldPath::Dotted(s.to_string())
    }
}

impl From<String> for FieldPath {
    fn from(s: String) -> Self {
        FieldPath::Dotted(s)
    }
}

impl From<&String> for FieldPath {
    fn from(s: &String) -> Self {
        FieldPath::Dotted(s.clone())
    }
}

impl From<Vec<String>> for FieldPath {
    fn from(v: Vec<String>) -> Self {
        FieldPath::Segments(v)
    }
}

impl From<&[&str]> for FieldPath {
    fn from(v: &[&str]) -> Self {
        FieldPath::Segments(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldPath {
    fn from(v: [&str; N]) -> Self {
        FieldPath::Segments(v.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&FieldPath> for FieldPath {
    fn from(p: &FieldPath) -> Self {
        p.clone()
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve `path` against document data
///
/// Pure function of its inputs. Returns the value at `path`, which may itself
/// be an object, an array, a scalar or `Null`, or `None` if any segment is
/// missing or the walk reaches a value that is not an object.
///
/// # Examples
///
/// ```
/// use docsnap_core::{data_from_json, resolve, FieldPath, Value};
///
/// let data = data_from_json(serde_json::json!({"foo": {"bar": 42}})).unwrap();
/// assert_eq!(resolve(&data, &FieldPath::from("foo.bar")), Some(&Value::Int(42)));
/// assert_eq!(resolve(&data, &FieldPath::from("foo.baz")), None);
/// ```
pub fn resolve<'a>(data: &'a DocumentData, path: &FieldPath) -> Option<&'a Value> {
    let Some(segments) = path.segments() else {
        debug!(path = %path, "field path is empty or has an empty segment");
        return None;
    };

    let (first, rest) = segments.split_first()?;
    let mut current = data.get(*first)?;
    for segment in rest {
        current = match current {
            Value::Object(map) => map.get(*segment)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Resolve `path` against an arbitrary root value
///
/// A root that is not an object has no fields, so every path is NOT_FOUND.
pub fn resolve_value<'a>(root: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    match root {
        Value::Object(map) => resolve(map, path),
        _ => None,
    }
}
