//! Conversion between [`Value`] and the engine's generic `serde_json::Value`.

use json_value::{Map, Value};
use serde_json::{Number, Value as JsonValue};

use super::error::JsonByteCoderError;

/// Lower a [`Value`] tree into the engine's generic shape.
///
/// Any value may be lowered; the root restriction is applied by the coder.
pub(crate) fn lower(value: &Value) -> Result<JsonValue, JsonByteCoderError> {
    Ok(match value {
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Double(d) => Number::from_f64(*d)
            .map(JsonValue::Number)
            .ok_or(JsonByteCoderError::NonFiniteDouble(*d))?,
        Value::Int(i) => JsonValue::Number(Number::from(*i)),
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Null => JsonValue::Null,
        Value::Array(items) => {
            JsonValue::Array(items.iter().map(lower).collect::<Result<_, _>>()?)
        }
        Value::Dictionary(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (key, child) in map {
                object.insert(key.clone(), lower(child)?);
            }
            JsonValue::Object(object)
        }
    })
}

/// Lift the engine's generic shape into a [`Value`] tree.
///
/// Numbers are classified by how the engine stored them: `i64` becomes
/// `Int`, `f64` becomes `Double`. An integer only representable as `u64`
/// (above `i64::MAX`) has no `Value` form and fails with `InvalidObject`.
/// Booleans are a separate engine variant and never reach the number path.
pub(crate) fn lift(object: JsonValue) -> Result<Value, JsonByteCoderError> {
    Ok(match object {
        JsonValue::Array(items) => {
            Value::Array(items.into_iter().map(lift).collect::<Result<_, _>>()?)
        }
        JsonValue::Object(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, child) in entries {
                map.insert(key, lift(child)?);
            }
            Value::Dictionary(map)
        }
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => lift_number(&n)?,
        JsonValue::String(s) => Value::String(s),
        JsonValue::Null => Value::Null,
    })
}

fn lift_number(n: &Number) -> Result<Value, JsonByteCoderError> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::Int(i));
    }
    if n.is_f64() {
        if let Some(d) = n.as_f64() {
            return Ok(Value::Double(d));
        }
    }
    Err(JsonByteCoderError::InvalidObject)
}
