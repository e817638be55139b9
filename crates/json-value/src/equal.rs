//! Structural equality for [`Value`].

use crate::Value;

/// Two values are equal only when they hold the same variant and their
/// payloads are recursively equal. Arrays compare index-wise; dictionaries
/// compare key-wise and ignore insertion order. `Int(5)` never equals
/// `Double(5.0)`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,

            (Value::Array(arr_a), Value::Array(arr_b)) => {
                if arr_a.len() != arr_b.len() {
                    return false;
                }
                arr_a.iter().zip(arr_b).all(|(a, b)| a == b)
            }

            (Value::Dictionary(obj_a), Value::Dictionary(obj_b)) => {
                if obj_a.len() != obj_b.len() {
                    return false;
                }
                for (key, val_a) in obj_a {
                    match obj_b.get(key) {
                        Some(val_b) => {
                            if val_a != val_b {
                                return false;
                            }
                        }
                        None => return false,
                    }
                }
                true
            }

            _ => false,
        }
    }
}
