//! Coders between [`json_value::Value`] and external representations.
//!
//! [`ValueCoder`] is the format-agnostic contract; [`JsonByteCoder`] is the
//! implementation for UTF-8 JSON bytes, using `serde_json` as its engine.
//!
//! ```
//! use json_value_coder::{JsonByteCoder, Value};
//!
//! let coder = JsonByteCoder::new();
//! let value = coder.decode(br#"[true, 1, 1.5]"#).unwrap();
//! assert_eq!(
//!     value,
//!     Value::Array(vec![Value::Bool(true), Value::Int(1), Value::Double(1.5)])
//! );
//! assert_eq!(coder.encode(&value).unwrap(), b"[true,1,1.5]");
//! ```

mod types;

pub mod json_bytes;

pub use json_bytes::{JsonByteCoder, JsonByteCoderError, JsonByteCoderOptions};
pub use json_value::{Map, Value, ValueError, ValueKind};
pub use types::{CoderError, ValueCoder};
