//! Integration tests for Value and Type
//!
//! Tests value display forms, type coercion, and the JSON encoding.

use hbnb_foundation::{PersistentVec, Type, Value};

// =============================================================================
// Display and repr
// =============================================================================

#[test]
fn display_uses_python_literal_forms() {
    assert_eq!(Value::Nil.to_string(), "None");
    assert_eq!(Value::Bool(true).to_string(), "True");
    assert_eq!(Value::Float(3.0).to_string(), "3.0");
    assert_eq!(Value::Float(0.25).to_string(), "0.25");
    assert_eq!(Value::from("plain").to_string(), "plain");
}

#[test]
fn repr_quotes_strings() {
    assert_eq!(Value::from("Texas").repr(), "'Texas'");
    assert_eq!(Value::from("it's").repr(), "\"it's\"");
    assert_eq!(Value::Int(5).repr(), "5");
}

#[test]
fn list_display_reprs_items() {
    let list = Value::from(vec![Value::from("wifi"), Value::Int(2), Value::Float(1.5)]);
    assert_eq!(list.to_string(), "['wifi', 2, 1.5]");
    assert_eq!(Value::from(Vec::<Value>::new()).to_string(), "[]");
}

// =============================================================================
// Coercion
// =============================================================================

#[test]
fn coerce_strings_to_declared_types() {
    assert_eq!(Type::Int.coerce(Value::from("42")), Some(Value::Int(42)));
    assert_eq!(Type::Float.coerce(Value::from("2.5")), Some(Value::Float(2.5)));
    assert_eq!(Type::Float.coerce(Value::Int(2)), Some(Value::Float(2.0)));
    assert_eq!(Type::String.coerce(Value::Int(7)), Some(Value::from("7")));
    assert_eq!(Type::Int.coerce(Value::from("seven")), None);
}

#[test]
fn coerce_lists_elementwise() {
    let ty = Type::list(Type::String);
    let list = Value::from(vec![Value::from("a"), Value::Int(1)]);
    assert_eq!(
        ty.coerce(list),
        Some(Value::from(vec![Value::from("a"), Value::from("1")]))
    );
    assert_eq!(ty.coerce(Value::from("a")), None);
}

#[test]
fn defaults_per_type() {
    assert_eq!(Type::String.default_value(), Value::from(""));
    assert_eq!(Type::Int.default_value(), Value::Int(0));
    assert_eq!(Type::Float.default_value(), Value::Float(0.0));
    assert_eq!(Type::list(Type::String).default_value(), Value::List(PersistentVec::new()));
}

// =============================================================================
// JSON encoding
// =============================================================================

#[test]
fn json_encoding_keeps_number_kinds() {
    let value = Value::from(vec![Value::Int(1), Value::Float(1.0), Value::Nil, Value::Bool(false)]);
    let text = serde_json::to_string(&value).unwrap();
    assert_eq!(text, "[1,1.0,null,false]");
    let back: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(back, value);
}

#[test]
fn json_objects_are_not_values() {
    assert!(serde_json::from_str::<Value>(r#"{"a": 1}"#).is_err());
}
