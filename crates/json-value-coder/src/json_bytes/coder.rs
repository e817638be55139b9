use json_value::{Value, ValueKind};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::{debug, trace};

use super::convert::{lift, lower};
use super::error::JsonByteCoderError;
use crate::types::{CoderError, ValueCoder};

/// Options for [`JsonByteCoder`].
#[derive(Debug, Clone, Default)]
pub struct JsonByteCoderOptions {
    /// Render indented, multi-line JSON instead of compact output.
    pub pretty: bool,
}

/// Converts between [`Value`] and UTF-8 JSON bytes.
///
/// Only arrays and dictionaries are accepted as document roots, in both
/// directions.
#[derive(Debug, Clone, Default)]
pub struct JsonByteCoder {
    options: JsonByteCoderOptions,
}

impl JsonByteCoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: JsonByteCoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &JsonByteCoderOptions {
        &self.options
    }

    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, JsonByteCoderError> {
        let kind = value.kind();
        if !kind.is_container() {
            trace!(%kind, "rejecting scalar root on encode");
            return Err(JsonByteCoderError::NotRootType(Some(kind)));
        }
        let object = lower(value)?;
        let bytes = if self.options.pretty {
            serde_json::to_vec_pretty(&object)?
        } else {
            serde_json::to_vec(&object)?
        };
        debug!(%kind, len = bytes.len(), "encoded JSON document");
        Ok(bytes)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Value, JsonByteCoderError> {
        let object = match parse(bytes) {
            Ok(object) => object,
            Err(err) if err.is_syntax() || err.is_eof() => {
                trace!(%err, len = bytes.len(), "rejecting document without a valid root");
                return Err(JsonByteCoderError::NotRootType(None));
            }
            Err(err) => return Err(err.into()),
        };
        let kind = root_kind(&object);
        if !kind.is_container() {
            trace!(%kind, "rejecting scalar root on decode");
            return Err(JsonByteCoderError::NotRootType(Some(kind)));
        }
        let value = lift(object)?;
        debug!(%kind, len = bytes.len(), "decoded JSON document");
        Ok(value)
    }
}

/// Parses a whole document. Nesting depth is unbounded so that any tree
/// `encode` produces can be read back.
fn parse(bytes: &[u8]) -> Result<JsonValue, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let object = JsonValue::deserialize(&mut de)?;
    de.end()?;
    Ok(object)
}

fn root_kind(object: &JsonValue) -> ValueKind {
    match object {
        JsonValue::Null => ValueKind::Null,
        JsonValue::Bool(_) => ValueKind::Bool,
        JsonValue::Number(n) if n.is_f64() => ValueKind::Double,
        JsonValue::Number(_) => ValueKind::Int,
        JsonValue::String(_) => ValueKind::String,
        JsonValue::Array(_) => ValueKind::Array,
        JsonValue::Object(_) => ValueKind::Dictionary,
    }
}

impl ValueCoder for JsonByteCoder {
    type Conversion = Vec<u8>;

    fn encode(&self, value: &Value) -> Result<Vec<u8>, CoderError> {
        Ok(self.encode(value)?)
    }

    fn decode(&self, input: &Vec<u8>) -> Result<Value, CoderError> {
        Ok(self.decode(input)?)
    }
}
