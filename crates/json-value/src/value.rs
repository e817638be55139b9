//! The [`Value`] tagged union and its construction helpers.

use std::fmt;

use indexmap::IndexMap;

/// Dictionary payload. Keeps insertion order for rendering; equality ignores it.
pub type Map = IndexMap<String, Value>;

/// A JSON-compatible value.
///
/// `Int` and `Double` are distinct variants and are never coerced into each
/// other, and `Bool` is never a number. Containers own their children
/// outright, so a tree can only be built bottom-up and cannot contain cycles.
///
/// Equality is structural, see the `PartialEq` impl.
#[derive(Debug, Clone, Default)]
pub enum Value {
    String(String),
    Double(f64),
    Int(i64),
    Bool(bool),
    #[default]
    Null,
    Array(Vec<Value>),
    Dictionary(Map),
}

/// Variant tag of a [`Value`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Double,
    Int,
    Bool,
    Null,
    Array,
    Dictionary,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Double => "double",
            ValueKind::Int => "int",
            ValueKind::Bool => "bool",
            ValueKind::Null => "null",
            ValueKind::Array => "array",
            ValueKind::Dictionary => "dictionary",
        }
    }

    /// True for the variants that may appear at the root of a JSON document.
    pub fn is_container(self) -> bool {
        matches!(self, ValueKind::Array | ValueKind::Dictionary)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Double(_) => ValueKind::Double,
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::Null => ValueKind::Null,
            Value::Array(_) => ValueKind::Array,
            Value::Dictionary(_) => ValueKind::Dictionary,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// `None` for `Null`, otherwise `Some(self)`.
    ///
    /// Lets a missing key and an explicit `null` be handled the same way:
    ///
    /// ```
    /// use json_value::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// map.insert("bar".to_owned(), Value::Null);
    /// let dict = Value::Dictionary(map);
    ///
    /// let bar = dict.as_dictionary().unwrap().get("bar").and_then(Value::nullable);
    /// let baz = dict.as_dictionary().unwrap().get("baz").and_then(Value::nullable);
    /// assert!(bar.is_none());
    /// assert!(baz.is_none());
    /// ```
    pub fn nullable(&self) -> Option<&Value> {
        match self {
            Value::Null => None,
            other => Some(other),
        }
    }

    /// Owned form of [`Value::nullable`].
    pub fn into_nullable(self) -> Option<Value> {
        match self {
            Value::Null => None,
            other => Some(other),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Dictionary(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Dictionary(iter.into_iter().collect())
    }
}
