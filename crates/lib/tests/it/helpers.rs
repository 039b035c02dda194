use arrayy::{Arrayy, Schema, StrictArrayy, Value};

/// Parses a container from JSON, panicking on invalid fixtures
pub fn array_from_json(json: &str) -> Arrayy {
    Arrayy::from_json(json).expect("Fixture JSON should parse")
}

/// Create a container with a small nested user record
pub fn setup_user() -> Arrayy {
    array_from_json(
        r#"{
            "user": {
                "name": "Alice",
                "age": 30,
                "roles": ["admin", "ops"],
                "profile": {"city": "Berlin", "email": null}
            },
            "active": true
        }"#,
    )
}

/// Create a strict container with one property per value kind
pub fn setup_strict() -> StrictArrayy {
    let schema = Schema::parse([
        ("id", "int"),
        ("name", "string"),
        ("score", "?float"),
        ("tags", "array"),
        ("extra", "mixed"),
    ])
    .expect("Fixture schema should parse");
    StrictArrayy::new(schema)
}

/// Assert that the value at `path` is the given text
pub fn assert_text(array: &Arrayy, path: &str, expected: &str) {
    match array.get(path) {
        Some(Value::Text(actual)) => {
            assert_eq!(actual, expected, "Value mismatch for path '{path}'");
        }
        Some(other) => panic!("Expected text value for path '{path}', got: {other:?}"),
        None => panic!("Path '{path}' not found"),
    }
}

/// Assert the compact JSON encoding of a container
pub fn assert_json(array: &Arrayy, expected: &str) {
    assert_eq!(array.to_json().expect("Container should encode"), expected);
}
