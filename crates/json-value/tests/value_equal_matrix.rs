//! Structural equality matrix covering same-variant comparisons, every
//! cross-variant pairing, and nested containers.

use json_value::{Map, Value};

fn dict(entries: &[(&str, Value)]) -> Value {
    let mut map = Map::new();
    for (key, value) in entries {
        map.insert((*key).to_owned(), value.clone());
    }
    Value::Dictionary(map)
}

/// One representative per variant, in declaration order.
fn one_of_each() -> Vec<Value> {
    vec![
        Value::String("foo".to_owned()),
        Value::Double(6.3),
        Value::Int(5),
        Value::Bool(false),
        Value::Null,
        Value::Array(vec![Value::Int(3)]),
        dict(&[("bar", Value::Int(3))]),
    ]
}

// ---------------------------------------------------------------------------
// Same variant
// ---------------------------------------------------------------------------

#[test]
fn equal_scalars_are_equal() {
    assert_eq!(Value::String("foo".to_owned()), Value::String("foo".to_owned()));
    assert_eq!(Value::Double(6.3), Value::Double(6.3));
    assert_eq!(Value::Int(5), Value::Int(5));
    assert_eq!(Value::Bool(true), Value::Bool(true));
    assert_eq!(Value::Null, Value::Null);
}

#[test]
fn unequal_scalars_are_unequal() {
    assert_ne!(Value::String("foo".to_owned()), Value::String("bar".to_owned()));
    assert_ne!(Value::Double(6.3), Value::Double(3.3));
    assert_ne!(Value::Int(6), Value::Int(2));
    assert_ne!(Value::Bool(true), Value::Bool(false));
}

#[test]
fn arrays_compare_element_wise() {
    assert_eq!(
        Value::Array(vec![Value::Int(3)]),
        Value::Array(vec![Value::Int(3)])
    );
    assert_ne!(
        Value::Array(vec![Value::Int(3)]),
        Value::Array(vec![Value::Int(2)])
    );
    assert_ne!(
        Value::Array(vec![Value::Int(1), Value::Int(2)]),
        Value::Array(vec![Value::Int(2), Value::Int(1)])
    );
    assert_eq!(Value::Array(Vec::new()), Value::Array(Vec::new()));
}

#[test]
fn dictionaries_compare_key_wise() {
    assert_eq!(dict(&[("bar", Value::Int(3))]), dict(&[("bar", Value::Int(3))]));
    assert_ne!(dict(&[("bar", Value::Int(3))]), dict(&[("bar", Value::Int(4))]));
    assert_ne!(dict(&[("bar", Value::Int(3))]), dict(&[("baz", Value::Int(3))]));
    assert_ne!(
        dict(&[("bar", Value::Int(3))]),
        dict(&[("bar", Value::Int(3)), ("baz", Value::Null)])
    );
    assert_eq!(dict(&[]), dict(&[]));
}

// ---------------------------------------------------------------------------
// Cross variant
// ---------------------------------------------------------------------------

#[test]
fn different_variants_are_never_equal() {
    let values = one_of_each();
    for (i, left) in values.iter().enumerate() {
        for (j, right) in values.iter().enumerate() {
            if i == j {
                assert_eq!(left, right);
            } else {
                assert_ne!(left, right, "{:?} vs {:?}", left.kind(), right.kind());
            }
        }
    }
}

#[test]
fn int_and_double_with_same_magnitude_are_unequal() {
    assert_ne!(Value::Int(5), Value::Double(5.0));
    assert_ne!(Value::Double(0.0), Value::Int(0));
}

#[test]
fn bool_is_not_equal_to_zero_or_one() {
    assert_ne!(Value::Bool(true), Value::Int(1));
    assert_ne!(Value::Bool(false), Value::Int(0));
    assert_ne!(Value::Bool(false), Value::Double(0.0));
}

#[test]
fn null_is_not_equal_to_empty_values() {
    assert_ne!(Value::Null, Value::String(String::new()));
    assert_ne!(Value::Null, Value::Array(Vec::new()));
    assert_ne!(Value::Null, dict(&[]));
}

// ---------------------------------------------------------------------------
// Nesting
// ---------------------------------------------------------------------------

#[test]
fn nested_difference_is_detected() {
    let make = |leaf: Value| {
        Value::Array(vec![
            Value::from("wat"),
            dict(&[("inner", Value::Array(vec![dict(&[("leaf", leaf)])]))]),
        ])
    };
    assert_eq!(make(Value::Int(1)), make(Value::Int(1)));
    assert_ne!(make(Value::Int(1)), make(Value::Double(1.0)));
    assert_ne!(make(Value::Int(1)), make(Value::Null));
}

#[test]
fn equality_is_symmetric() {
    let a = dict(&[("x", Value::Array(vec![Value::Bool(true)]))]);
    let b = dict(&[("x", Value::Array(vec![Value::Bool(false)]))]);
    assert_ne!(a, b);
    assert_ne!(b, a);
    assert_eq!(a.clone(), a);
}
