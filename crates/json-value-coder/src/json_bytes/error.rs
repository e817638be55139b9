//! JSON byte coder error type.

use json_value::ValueKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonByteCoderError {
    /// The value being encoded, or the root of the decoded document, is not
    /// an array or dictionary. `None` when the document has no parseable root.
    #[error(
        "root must be an array or dictionary, found {}",
        .0.map_or("no valid root", ValueKind::as_str)
    )]
    NotRootType(Option<ValueKind>),
    /// A decoded object has a key that is not a string.
    #[error("object key is not a string")]
    InvalidObjectKey,
    /// Decoded content has no `Value` representation.
    #[error("object cannot be represented as a value")]
    InvalidObject,
    /// NaN and infinities have no JSON number form.
    #[error("non-finite double {0} cannot be encoded")]
    NonFiniteDouble(f64),
    #[error(transparent)]
    Engine(#[from] serde_json::Error),
}
