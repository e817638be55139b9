//! Typed extraction.
//!
//! Every extraction follows the same matrix:
//!
//! | held variant            | plain form            | nullable form         |
//! |-------------------------|-----------------------|-----------------------|
//! | matches requested type  | `Ok(payload)`         | `Ok(Some(payload))`   |
//! | `Null`                  | `Err(NoValue)`        | `Ok(None)`            |
//! | any other variant       | `Err(TypeMismatch)`   | `Err(TypeMismatch)`   |

use crate::{Map, Value, ValueError, ValueKind};

/// A payload type that can be borrowed out of exactly one [`Value`] variant.
pub trait Extract<'a>: Sized {
    /// The variant this type is read from.
    const KIND: ValueKind;

    /// Returns the payload if `value` holds [`Self::KIND`].
    fn from_value(value: &'a Value) -> Option<Self>;
}

impl<'a> Extract<'a> for &'a str {
    const KIND: ValueKind = ValueKind::String;

    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl<'a> Extract<'a> for f64 {
    const KIND: ValueKind = ValueKind::Double;

    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }
}

impl<'a> Extract<'a> for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl<'a> Extract<'a> for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl<'a> Extract<'a> for &'a [Value] {
    const KIND: ValueKind = ValueKind::Array;

    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl<'a> Extract<'a> for &'a Map {
    const KIND: ValueKind = ValueKind::Dictionary;

    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Dictionary(map) => Some(map),
            _ => None,
        }
    }
}

impl Value {
    /// Borrows the payload as `T`, failing on `Null` or on any other variant.
    ///
    /// ```
    /// use json_value::Value;
    ///
    /// let value = Value::from("foo");
    /// let s: &str = value.extract().unwrap();
    /// assert_eq!(s, "foo");
    /// assert!(value.extract::<i64>().is_err());
    /// ```
    pub fn extract<'a, T: Extract<'a>>(&'a self) -> Result<T, ValueError> {
        match T::from_value(self) {
            Some(payload) => Ok(payload),
            None => Err(self.mismatch(T::KIND)),
        }
    }

    /// Like [`Value::extract`], but `Null` yields `Ok(None)`.
    pub fn extract_nullable<'a, T: Extract<'a>>(&'a self) -> Result<Option<T>, ValueError> {
        match self {
            Value::Null => Ok(None),
            other => other.extract().map(Some),
        }
    }

    pub fn as_string(&self) -> Result<&str, ValueError> {
        self.extract()
    }

    pub fn as_double(&self) -> Result<f64, ValueError> {
        self.extract()
    }

    pub fn as_int(&self) -> Result<i64, ValueError> {
        self.extract()
    }

    pub fn as_bool(&self) -> Result<bool, ValueError> {
        self.extract()
    }

    pub fn as_array(&self) -> Result<&[Value], ValueError> {
        self.extract()
    }

    pub fn as_dictionary(&self) -> Result<&Map, ValueError> {
        self.extract()
    }

    pub fn as_nullable_string(&self) -> Result<Option<&str>, ValueError> {
        self.extract_nullable()
    }

    pub fn as_nullable_double(&self) -> Result<Option<f64>, ValueError> {
        self.extract_nullable()
    }

    pub fn as_nullable_int(&self) -> Result<Option<i64>, ValueError> {
        self.extract_nullable()
    }

    pub fn as_nullable_bool(&self) -> Result<Option<bool>, ValueError> {
        self.extract_nullable()
    }

    pub fn as_nullable_array(&self) -> Result<Option<&[Value]>, ValueError> {
        self.extract_nullable()
    }

    pub fn as_nullable_dictionary(&self) -> Result<Option<&Map>, ValueError> {
        self.extract_nullable()
    }

    fn mismatch(&self, expected: ValueKind) -> ValueError {
        match self {
            Value::Null => ValueError::NoValue { expected },
            other => ValueError::TypeMismatch {
                expected,
                found: other.kind(),
            },
        }
    }
}

macro_rules! impl_try_from_value {
    ($target:ty, $variant:ident) => {
        impl TryFrom<Value> for $target {
            type Error = ValueError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$variant(payload) => Ok(payload),
                    other => Err(other.mismatch(ValueKind::$variant)),
                }
            }
        }
    };
}

impl_try_from_value!(String, String);
impl_try_from_value!(f64, Double);
impl_try_from_value!(i64, Int);
impl_try_from_value!(bool, Bool);
impl_try_from_value!(Vec<Value>, Array);
impl_try_from_value!(Map, Dictionary);
