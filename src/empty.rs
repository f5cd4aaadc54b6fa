//! The empty predicate
//!
//! A value is empty when it is:
//! - [`Value::Null`];
//! - the zero value of its scalar type (`false`, `0`, `0.0`, `""`);
//! - a list or map with no elements;
//! - a record whose every field is itself empty, checked in declaration order.
//!
//! A record with no fields is therefore empty, and a single non-empty field
//! is enough to make a record non-empty.
//!
//! # Example
//!
//! ```rust
//! use fieldguard::{empty::is_empty, record, Value};
//!
//! assert!(is_empty(&Value::Null));
//! assert!(is_empty(&Value::from(0)));
//! assert!(is_empty(&record! { name: "", tags: Vec::<u8>::new() }));
//! assert!(!is_empty(&record! { name: "hello", tags: Vec::<u8>::new() }));
//! ```

use crate::Value;

/// Returns `true` if `value` is empty.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !*b,
        Value::Int(i) => *i == 0,
        Value::Uint(u) => *u == 0,
        Value::Float(f) => *f == 0.0,
        Value::Float32(f) => *f == 0.0,
        Value::Str(s) => s.is_empty(),
        Value::List(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        Value::Record(fields) => fields.iter().all(|(_, field)| is_empty(field)),
    }
}
