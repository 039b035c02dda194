//! JSON encoding and decoding of containers.

use arrayy::{Arrayy, Value};

use crate::helpers::*;

// ===== ENCODING =====

#[test]
fn test_list_encodes_as_json_array() {
    assert_json(&Arrayy::from(vec![1, 2, 3]), "[1,2,3]");
    assert_json(&Arrayy::new(), "[]");
}

#[test]
fn test_sparse_or_unordered_keys_encode_as_object() {
    let mut sparse = Arrayy::from(vec!["a", "b"]);
    sparse.remove(0);
    assert_json(&sparse, r#"{"1":"b"}"#);

    let unordered: Arrayy = [(1, "b"), (0, "a")].into_iter().collect();
    assert_json(&unordered, r#"{"1":"b","0":"a"}"#);
}

#[test]
fn test_scalars_encode() {
    let array = Arrayy::new()
        .with("null", Value::Null)
        .with("bool", true)
        .with("int", -3)
        .with("float", 0.25)
        .with("text", "quote \" inside");

    assert_json(
        &array,
        r#"{"null":null,"bool":true,"int":-3,"float":0.25,"text":"quote \" inside"}"#,
    );
}

#[test]
fn test_pretty_output() {
    let array = Arrayy::new().with("a", 1);
    assert_eq!(array.to_json_pretty().unwrap(), "{\n  \"a\": 1\n}");
}

#[test]
fn test_to_json_value() {
    let array = setup_user();
    let json = array.to_json_value().unwrap();
    assert_eq!(json["user"]["roles"][1], "ops");
    assert_eq!(json["user"]["profile"]["email"], serde_json::Value::Null);
}

#[test]
fn test_display_matches_to_json() {
    let array = setup_user();
    assert_eq!(array.to_string(), array.to_json().unwrap());
}

// ===== DECODING =====

#[test]
fn test_json_roundtrip_preserves_structure() {
    let json = r#"{"user":{"name":"Alice","tags":["x","y"]},"count":2,"ratio":0.5}"#;
    let array = array_from_json(json);
    assert_json(&array, json);
}

#[test]
fn test_serde_deserialize_through_serde_json() {
    let array: Arrayy = serde_json::from_str(r#"{"a": {"b": [1, 2]}}"#).unwrap();
    assert_eq!(array.get("a.b.1"), Some(&Value::Int(2)));

    let value: Value = serde_json::from_str("[true]").unwrap();
    assert_eq!(value.as_array().and_then(|a| a.get(0)), Some(&Value::Bool(true)));
}

#[test]
fn test_large_unsigned_becomes_float() {
    let array = array_from_json("[18446744073709551615]");
    assert!(matches!(array.get(0), Some(Value::Float(_))));
}

#[test]
fn test_separator_is_not_serialized() {
    let mut slashed = Arrayy::with_separator('/');
    slashed.set("a/b", 1);

    let decoded = array_from_json(&slashed.to_json().unwrap());
    assert_eq!(decoded, slashed);
    assert_eq!(decoded.separator(), '.');
    assert_eq!(decoded.get("a.b"), Some(&Value::Int(1)));
}
