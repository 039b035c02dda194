//! Construction tests: native shapes, JSON text and serializable values.

use arrayy::{Arrayy, Entries, Key, Value};
use serde::{Deserialize, Serialize};

use crate::helpers::*;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Server {
    host: String,
    port: u16,
    tags: Vec<String>,
}

// ===== NATIVE SHAPES =====

#[test]
fn test_new_is_empty() {
    let array = Arrayy::new();
    assert!(array.is_empty());
    assert_eq!(array.len(), 0);
    assert_eq!(array, Arrayy::default());
}

#[test]
fn test_from_vec_is_a_list() {
    let array = Arrayy::from(vec!["a", "b", "c"]);
    assert!(array.is_list());
    assert_eq!(array.get(2), Some(&Value::from("c")));
}

#[test]
fn test_from_iterator_coerces_keys() {
    let array: Arrayy = [("0", "zero"), ("name", "n"), ("007", "bond")]
        .into_iter()
        .collect();

    let keys: Vec<&Key> = array.keys().collect();
    assert_eq!(
        keys,
        vec![
            &Key::Int(0),
            &Key::Str("name".to_string()),
            &Key::Str("007".to_string())
        ]
    );
}

#[test]
fn test_from_entries() {
    let mut entries = Entries::new();
    entries.insert(Key::from("k"), Value::Int(1));
    let array = Arrayy::from(entries.clone());
    assert_eq!(array.as_map(), &entries);
    assert_eq!(array.into_map(), entries);
}

#[test]
fn test_create_from_scalars_and_null() {
    assert_json(&Arrayy::create("solo"), r#"["solo"]"#);
    assert_json(&Arrayy::create(1.5), "[1.5]");
    assert!(Arrayy::create(Value::Null).is_empty());
}

#[test]
fn test_builder_with() {
    let array = Arrayy::new()
        .with("db.host", "localhost")
        .with("db.port", 5432)
        .with("debug", false);

    assert_json(&array, r#"{"db":{"host":"localhost","port":5432},"debug":false}"#);
}

// ===== JSON TEXT =====

#[test]
fn test_from_json_keeps_document_order() {
    let array = array_from_json(r#"{"z": 1, "a": 2, "m": 3}"#);
    assert_eq!(array.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
}

#[test]
fn test_from_json_wraps_scalars() {
    assert_eq!(array_from_json("42").get(0), Some(&Value::Int(42)));
    assert_eq!(array_from_json(r#""text""#).get(0), Some(&Value::from("text")));
    assert!(array_from_json("null").is_empty());
}

#[test]
fn test_from_json_numeric_object_keys_become_integers() {
    let array = array_from_json(r#"{"0": "a", "1": "b"}"#);
    assert!(array.is_list());
    assert_json(&array, r#"["a","b"]"#);
}

#[test]
fn test_from_json_rejects_invalid_input() {
    let err = Arrayy::from_json("{\"unterminated\": ").unwrap_err();
    assert!(err.is_input_error());
    assert_eq!(err.module(), "arrayy");
}

// ===== SERIALIZABLE VALUES =====

#[test]
fn test_from_serialize_struct() {
    let server = Server {
        host: "example.org".to_string(),
        port: 8080,
        tags: vec!["edge".to_string()],
    };

    let array = Arrayy::from_serialize(&server).unwrap();
    assert_text(&array, "host", "example.org");
    assert_eq!(array.get_as::<i64>("port"), Some(8080));
    assert_text(&array, "tags.0", "edge");
}

#[test]
fn test_deserialize_into_struct() {
    let array = Arrayy::new()
        .with("host", "example.org")
        .with("port", 443)
        .with("tags", vec!["a", "b"]);

    let server: Server = array.deserialize_into().unwrap();
    assert_eq!(
        server,
        Server {
            host: "example.org".to_string(),
            port: 443,
            tags: vec!["a".to_string(), "b".to_string()],
        }
    );
}

#[test]
fn test_deserialize_into_wrong_shape_is_serialization_error() {
    let array = Arrayy::new().with("host", 1);
    let err = array.deserialize_into::<Server>().unwrap_err();
    assert!(err.is_serialization_error());
}
