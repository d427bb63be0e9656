//! Core types for docsnap
//!
//! This crate defines the value model shared by every docsnap crate:
//! - [`Value`] and [`DocumentData`]: the document payload
//! - [`Timestamp`]: nanosecond-precision points in time
//! - [`FieldPath`] and [`resolve`]: locating a field inside nested data

#![warn(missing_docs)]

pub mod error;
pub mod field_path;
pub mod timestamp;
pub mod value;

pub use error::{CoreError, CoreResult};
pub use field_path::{resolve, resolve_value, FieldPath};
pub use timestamp::Timestamp;
pub use value::{data_from_json, data_to_json, DocumentData, Value};
