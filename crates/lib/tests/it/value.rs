//! Value conversion and comparison tests

use arrayy::{Arrayy, ArrayyError, Value};

#[test]
fn test_value_from_primitives() {
    assert_eq!(Value::from(()), Value::Null);
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7i32), Value::Int(7));
    assert_eq!(Value::from(7u32), Value::Int(7));
    assert_eq!(Value::from(1.5f32), Value::Float(1.5));
    assert_eq!(Value::from("x"), Value::Text("x".to_string()));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("y")), Value::from("y"));
}

#[test]
fn test_value_from_vec_is_nested_list() {
    let value = Value::from(vec![1, 2]);
    let array = value.as_array().expect("vec should become a container");
    assert!(array.is_list());
    assert_eq!(array.len(), 2);
}

#[test]
fn test_type_names() {
    let cases = vec![
        (Value::Null, "null"),
        (Value::Bool(false), "bool"),
        (Value::Int(0), "int"),
        (Value::Float(0.0), "float"),
        (Value::from(""), "string"),
        (Value::Array(Arrayy::new()), "array"),
    ];
    for (value, expected) in cases {
        assert_eq!(value.type_name(), expected);
        assert_eq!(value.is_scalar(), expected != "array");
    }
}

#[test]
fn test_try_from_reports_mismatch() {
    let value = Value::from("text");
    let err = i64::try_from(&value).unwrap_err();
    assert_eq!(
        err,
        ArrayyError::TypeMismatch {
            expected: "int".to_string(),
            actual: "string".to_string(),
        }
    );
    assert!(err.is_type_error());
    assert_eq!(err.key(), None);
}

#[test]
fn test_try_from_success() {
    let text = Value::from("hello");
    assert_eq!(<&str>::try_from(&text).unwrap(), "hello");
    assert_eq!(String::try_from(&text).unwrap(), "hello");
    assert!(bool::try_from(&Value::Bool(true)).unwrap());

    let nested = Value::from(vec!["a"]);
    let array = <&Arrayy>::try_from(&nested).unwrap();
    assert_eq!(array.len(), 1);
}

#[test]
fn test_direct_comparisons() {
    assert_eq!(Value::from("a"), "a");
    assert_eq!("a", Value::from("a"));
    assert_eq!(Value::Int(3), 3i64);
    assert_eq!(3, Value::Int(3));
    assert_eq!(Value::Float(0.5), 0.5);
    assert_eq!(Value::Bool(true), true);
    assert_ne!(Value::Int(1), Value::Float(1.0));
    assert_ne!(Value::from("1"), 1);
}

#[test]
fn test_display() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Int(-2).to_string(), "-2");
    assert_eq!(Value::from("plain").to_string(), "plain");
    assert_eq!(Value::from(vec![1, 2]).to_string(), "[1,2]");
}

#[test]
fn test_into_array() {
    assert!(Value::Int(1).into_array().is_none());
    let array = Value::from(vec![true]).into_array().unwrap();
    assert_eq!(array.get(0), Some(&Value::Bool(true)));
}
