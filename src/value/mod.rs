//! Dynamic input values
//!
//! Validators accept anything a form or request might carry. Rather than
//! inspecting arbitrary types at runtime, inputs are converted once, at the
//! boundary, into the closed [`Value`] enum. Numeric checks then work on the
//! even smaller [`Scalar`] classification.
//!
//! # Example
//!
//! ```rust
//! use fieldguard::{record, Scalar, Value};
//!
//! assert_eq!(Value::from(7u8).scalar(), Scalar::Unsigned(7));
//! assert_eq!(Value::from(-3i16).scalar(), Scalar::Signed(-3));
//! assert_eq!(Value::from("7").scalar(), Scalar::Other);
//!
//! let user = record! { name: "Ada", age: 36 };
//! assert_eq!(user.to_string(), "{name: Ada, age: 36}");
//! ```

#[cfg(feature = "serde")]
mod serde_impl;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

/// A value submitted for validation.
///
/// Every signed integer width collapses into [`Value::Int`], every unsigned
/// width into [`Value::Uint`]. `f32` keeps its own variant so messages echo
/// it as written; numeric checks widen it to `f64`. Sets convert to
/// [`Value::List`]. `None` converts to [`Value::Null`] and `Some(x)` converts
/// exactly as `x` would.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// An absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer of any width.
    Int(i64),
    /// An unsigned integer of any width.
    Uint(u64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A 32-bit floating-point number.
    Float32(f32),
    /// A string.
    Str(String),
    /// A sequence, array or set.
    List(Vec<Value>),
    /// A mapping keyed by strings.
    Map(BTreeMap<String, Value>),
    /// A composite value whose fields are kept in declaration order.
    Record(Vec<(String, Value)>),
}

/// Numeric classification of a [`Value`].
///
/// Range validators match on this exhaustively; everything that is not a
/// number is [`Scalar::Other`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// Signed integer, any width.
    Signed(i64),
    /// Unsigned integer, any width.
    Unsigned(u64),
    /// Floating-point number, any width.
    Float(f64),
    /// Not a number (null, bool, string, container or record).
    Other,
}

impl Value {
    /// Build a record from `(field, value)` pairs, keeping their order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldguard::Value;
    ///
    /// let v = Value::record([("name", Value::from("")), ("age", Value::from(0))]);
    /// assert_eq!(v.to_string(), "{name: , age: 0}");
    /// ```
    pub fn record<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a map from `(key, value)` pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Classify this value for numeric validation.
    pub fn scalar(&self) -> Scalar {
        match self {
            Value::Int(i) => Scalar::Signed(*i),
            Value::Uint(u) => Scalar::Unsigned(*u),
            Value::Float(f) => Scalar::Float(*f),
            Value::Float32(f) => Scalar::Float(f64::from(*f)),
            Value::Null
            | Value::Bool(_)
            | Value::Str(_)
            | Value::List(_)
            | Value::Map(_)
            | Value::Record(_) => Scalar::Other,
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the variant, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) | Value::Float32(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Record(_) => "record",
        }
    }
}

fn write_entries<'a, I>(f: &mut fmt::Formatter<'_>, entries: I) -> fmt::Result
where
    I: IntoIterator<Item = (&'a String, &'a Value)>,
{
    f.write_str("{")?;
    for (i, (k, v)) in entries.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}: {}", k, v)?;
    }
    f.write_str("}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{}", x),
            Value::Float32(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => write_entries(f, entries),
            Value::Record(fields) => write_entries(f, fields.iter().map(|(k, v)| (k, v))),
        }
    }
}

macro_rules! impl_from_numeric {
    ($variant:ident, $target:ty, [$($ty:ty),+]) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from_numeric!(Int, i64, [i8, i16, i32, i64, isize]);
impl_from_numeric!(Uint, u64, [u8, u16, u32, u64, usize]);
impl_from_numeric!(Float, f64, [f64]);
impl_from_numeric!(Float32, f32, [f32]);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(value: &[T]) -> Self {
        Value::List(value.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, S> From<HashSet<T, S>> for Value {
    fn from(value: HashSet<T, S>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeSet<T>> for Value {
    fn from(value: BTreeSet<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(value: HashMap<K, V, S>) -> Self {
        Value::map(value)
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(value: BTreeMap<K, V>) -> Self {
        Value::map(value)
    }
}

/// Build a [`Value::Record`] with fields in the order written.
///
/// # Example
///
/// ```rust
/// use fieldguard::{record, Value};
///
/// let empty = record! {};
/// assert_eq!(empty, Value::Record(vec![]));
///
/// let user = record! { name: "hello", tags: Vec::<String>::new() };
/// assert_eq!(user.to_string(), "{name: hello, tags: []}");
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Value::Record(::std::vec::Vec::new())
    };
    ($($field:ident : $value:expr),+ $(,)?) => {
        $crate::Value::Record(::std::vec![
            $((::std::string::String::from(::std::stringify!($field)), $crate::Value::from($value))),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widths_collapse() {
        assert_eq!(Value::from(-1i8), Value::Int(-1));
        assert_eq!(Value::from(i64::MIN), Value::Int(i64::MIN));
        assert_eq!(Value::from(3isize), Value::Int(3));
        assert_eq!(Value::from(255u8), Value::Uint(255));
        assert_eq!(Value::from(u64::MAX), Value::Uint(u64::MAX));
        assert_eq!(Value::from(9usize), Value::Uint(9));
    }

    #[test]
    fn test_f32_keeps_its_representation() {
        assert_eq!(Value::from(1.5f32), Value::Float32(1.5));
        assert_eq!(Value::from(2.25f64), Value::Float(2.25));
        assert_eq!(Value::from(1.1f32).to_string(), "1.1");
        assert_eq!(Value::from(0.1f32).kind(), "float");
        assert_eq!(Value::from(0.5f32).scalar(), Scalar::Float(0.5));
    }

    #[test]
    fn test_scalar_classification() {
        assert_eq!(Value::from(5).scalar(), Scalar::Signed(5));
        assert_eq!(Value::from(5u32).scalar(), Scalar::Unsigned(5));
        assert_eq!(Value::from(0.5).scalar(), Scalar::Float(0.5));
        assert_eq!(Value::Null.scalar(), Scalar::Other);
        assert_eq!(Value::from(true).scalar(), Scalar::Other);
        assert_eq!(Value::from("12").scalar(), Scalar::Other);
        assert_eq!(Value::from(vec![1, 2]).scalar(), Scalar::Other);
        assert_eq!(record! { n: 1 }.scalar(), Scalar::Other);
    }

    #[test]
    fn test_option_is_transparent() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(4)), Value::Int(4));
        assert_eq!(Value::from(Some(Some("x"))), Value::Str("x".into()));
    }

    #[test]
    fn test_collections() {
        let set: BTreeSet<u8> = [3, 1, 2].into_iter().collect();
        assert_eq!(
            Value::from(set),
            Value::List(vec![Value::Uint(1), Value::Uint(2), Value::Uint(3)])
        );

        let mut map = HashMap::new();
        map.insert("hello", "world");
        let value = Value::from(map);
        assert_eq!(value.to_string(), "{hello: world}");

        let slice: &[i32] = &[1, 2];
        assert_eq!(Value::from(slice), Value::from(vec![1, 2]));
    }

    #[test]
    fn test_record_keeps_declaration_order() {
        let v = record! { zeta: 1, alpha: 2 };
        match v {
            Value::Record(fields) => {
                let names: Vec<_> = fields.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(names, vec!["zeta", "alpha"]);
            }
            other => panic!("expected record, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(3.0).to_string(), "3");
        assert_eq!(Value::from(-2).to_string(), "-2");
        assert_eq!(Value::from(vec!["a", "b"]).to_string(), "[a, b]");
        assert_eq!(
            Value::map([("b", 2), ("a", 1)]).to_string(),
            "{a: 1, b: 2}"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from(1u8).kind(), "uint");
        assert_eq!(record! {}.kind(), "record");
    }
}
