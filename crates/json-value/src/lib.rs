//! json-value - tagged in-memory representation of JSON data.
//!
//! A [`Value`] holds exactly one of seven variants (string, double, int,
//! bool, null, array, dictionary). Payloads are read back through typed
//! extraction that never coerces between variants:
//!
//! ```
//! use json_value::{Value, ValueError};
//!
//! let value = Value::Int(5);
//! assert_eq!(value.as_int(), Ok(5));
//! assert!(matches!(value.as_double(), Err(ValueError::TypeMismatch { .. })));
//! assert_eq!(Value::Null.as_nullable_int(), Ok(None));
//! ```
//!
//! Equality is structural: same variant, and recursively equal payloads.

mod equal;
mod error;
mod extract;
mod value;

pub use error::ValueError;
pub use extract::Extract;
pub use value::{Map, Value, ValueKind};
