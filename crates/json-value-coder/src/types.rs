//! Common coder trait and error.

use json_value::Value;

use crate::json_bytes::JsonByteCoderError;

/// Format-agnostic coder failure. Each concrete coder's error converts into
/// it, so callers generic over [`ValueCoder`] handle one error type.
#[derive(Debug, thiserror::Error)]
pub enum CoderError {
    #[error("JSON byte coder error: {0}")]
    JsonBytes(#[from] JsonByteCoderError),
}

impl CoderError {
    /// True when the value or document was rejected because its root is not
    /// an array or dictionary.
    pub fn is_not_root_type(&self) -> bool {
        match self {
            CoderError::JsonBytes(err) => matches!(err, JsonByteCoderError::NotRootType(_)),
        }
    }
}

/// Converts [`Value`]s to and from some external representation.
///
/// Implementations may reject values that are not valid document roots, and
/// input that cannot be fully represented as a `Value`.
pub trait ValueCoder {
    /// The external representation, e.g. `Vec<u8>` for JSON bytes.
    type Conversion;

    fn encode(&self, value: &Value) -> Result<Self::Conversion, CoderError>;
    fn decode(&self, input: &Self::Conversion) -> Result<Value, CoderError>;
}
