//! Parsed literal values.

use indexmap::IndexMap;
use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;
use std::fmt;

/// Key of an object property.
///
/// Keys written as decimal digits (`{1: 'a'}`) become indices; quoted and
/// identifier keys become names. The two never compare equal, so `{1: a}`
/// and `{"1": a}` are distinct properties.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Non-negative integer key.
    Index(BigUint),
    /// String or identifier key.
    Name(String),
}

/// Object properties in insertion order.
pub type Object = IndexMap<Key, Value>;

/// A parsed literal.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// Integer literal of any radix, with or without a BigInt suffix.
    Integer(BigInt),
    /// Decimal literal with a fraction or an exponent.
    Float(f64),
    /// Quoted string.
    String(String),
    /// Array literal. Elided slots (`[1,,3]`) are `None`.
    Array(Vec<Option<Value>>),
    /// Object literal.
    Object(Object),
}

impl Value {
    /// Returns `true` if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean value if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns a reference to the integer if this is an `Integer`.
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the integer as an `i64` if it is an `Integer` that fits.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer().and_then(|n| n.to_i64())
    }

    /// Returns the float value if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the slots of the array if this is an `Array`.
    pub fn as_array(&self) -> Option<&[Option<Value>]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an `Object`.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up a named property of an object.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.as_object()?.get(&Key::Name(name.to_string()))
    }

    /// Looks up an element of an array, or an index key of an object.
    ///
    /// Returns `None` for holes and out-of-range indices.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(index)?.as_ref(),
            Value::Object(obj) => obj.get(&Key::from(index)),
            _ => None,
        }
    }
}

/// Placeholder printed for an elided array slot.
struct Hole;

impl fmt::Debug for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<empty>")
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(n) => write!(f, "{}", n),
            Key::Name(s) => write!(f, "{:?}", s),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => {
                if n.is_infinite() {
                    if *n > 0.0 {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else {
                    write!(f, "{:?}", n)
                }
            }
            Value::String(s) => write!(f, "{:?}", s),
            Value::Array(arr) => {
                let mut list = f.debug_list();
                for slot in arr {
                    match slot {
                        Some(v) => list.entry(v),
                        None => list.entry(&Hole),
                    };
                }
                list.finish()
            }
            Value::Object(obj) => f.debug_map().entries(obj).finish(),
        }
    }
}

impl From<u64> for Key {
    fn from(n: u64) -> Self {
        Key::Index(BigUint::from(n))
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Index(BigUint::from(n))
    }
}

impl From<BigUint> for Key {
    fn from(n: BigUint) -> Self {
        Key::Index(n)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Integer(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(BigInt::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<Value>>> for Value {
    fn from(arr: Vec<Option<Value>>) -> Self {
        Value::Array(arr)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl<K: Into<Key>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_scalars() {
        assert_eq!(format!("{:?}", Value::Null), "null");
        assert_eq!(format!("{:?}", Value::from(true)), "true");
        assert_eq!(format!("{:?}", Value::from(42i64)), "42");
        assert_eq!(format!("{:?}", Value::from(1200.0)), "1200.0");
        assert_eq!(format!("{:?}", Value::from(f64::NEG_INFINITY)), "-Infinity");
        assert_eq!(format!("{:?}", Value::from("a'b")), "\"a'b\"");
    }

    #[test]
    fn test_debug_sparse_array() {
        let arr = Value::Array(vec![None, Some(Value::from(1i64)), None]);
        assert_eq!(format!("{:?}", arr), "[<empty>, 1, <empty>]");
    }

    #[test]
    fn test_debug_object() {
        let obj: Value = vec![
            (Key::from("foo"), Value::from("bar")),
            (Key::from(2u64), Value::Null),
        ]
        .into_iter()
        .collect();
        assert_eq!(format!("{:?}", obj), "{\"foo\": \"bar\", 2: null}");
    }

    #[test]
    fn test_accessors() {
        let obj: Value = [("n", Value::from(7i64))].into_iter().collect();
        assert_eq!(obj.get("n").and_then(Value::as_i64), Some(7));
        assert!(obj.get("missing").is_none());

        let arr = Value::Array(vec![None, Some(Value::from("x"))]);
        assert!(arr.get_index(0).is_none());
        assert_eq!(arr.get_index(1).and_then(Value::as_str), Some("x"));
        assert!(arr.get_index(5).is_none());
    }
}
