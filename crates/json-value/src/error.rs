//! Extraction error type.

use thiserror::Error;

use crate::ValueKind;

/// Failure of a typed extraction from a [`Value`](crate::Value).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    /// The value holds a non-null variant other than the one requested.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
    },
    /// The value is null and the extraction does not accept null.
    #[error("no value: expected {expected}, found null")]
    NoValue { expected: ValueKind },
}
