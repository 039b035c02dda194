//! Bulk collection operations over the ordered entries.

use arrayy::{Arrayy, Key, Value};

use crate::helpers::*;

#[test]
fn test_iteration_follows_insertion_order() {
    let array = Arrayy::new().with("b", 1).with(5, 2).with("a", 3);

    let pairs: Vec<(String, i64)> = array
        .iter()
        .map(|(k, v)| (k.to_string(), v.as_int().unwrap()))
        .collect();
    assert_eq!(
        pairs,
        vec![("b".to_string(), 1), ("5".to_string(), 2), ("a".to_string(), 3)]
    );

    let values: Vec<&Value> = (&array).into_iter().map(|(_, v)| v).collect();
    assert_eq!(values.len(), 3);

    let owned: Vec<(Key, Value)> = array.into_iter().collect();
    assert_eq!(owned[1], (Key::Int(5), Value::Int(2)));
}

#[test]
fn test_first_and_last() {
    let array = Arrayy::from(vec![10, 20, 30]);
    assert_eq!(array.first(), Some((&Key::Int(0), &Value::Int(10))));
    assert_eq!(array.last(), Some((&Key::Int(2), &Value::Int(30))));
    assert!(Arrayy::new().first().is_none());
}

#[test]
fn test_push_appends_to_list() {
    let mut array = Arrayy::from(vec!["a"]);
    assert_eq!(array.push("b"), Some(Key::Int(1)));
    assert!(array.is_list());
    assert_json(&array, r#"["a","b"]"#);
}

#[test]
fn test_push_never_overwrites_max_key() {
    let mut array = Arrayy::new();
    array.set(i64::MAX, "last");

    assert_eq!(array.push("new"), None);
    assert_eq!(array.len(), 1);
    assert_eq!(array.get_as::<&str>(i64::MAX), Some("last"));
}

#[test]
fn test_push_many_keeps_a_list() {
    let mut array = Arrayy::new();
    for i in 0..1000 {
        assert_eq!(array.push(i), Some(Key::Int(i64::from(i))));
    }
    assert!(array.is_list());
    assert_eq!(array.next_index(), Some(1000));
}

#[test]
fn test_values_mut_and_iter_mut() {
    let mut array = Arrayy::from(vec![1, 2, 3]);
    for value in array.values_mut() {
        if let Value::Int(n) = value {
            *n *= 10;
        }
    }
    for (key, value) in array.iter_mut() {
        if *key == Key::Int(0) {
            *value = Value::Null;
        }
    }
    assert_json(&array, "[null,20,30]");
}

#[test]
fn test_clear() {
    let mut array = setup_user();
    array.clear();
    assert!(array.is_empty());
    assert!(!array.has("user.name"));
}

#[test]
fn test_merge_leaves_receiver_untouched() {
    let left = Arrayy::from(vec!["a"]).with("mode", "left");
    let right = Arrayy::from(vec!["b"]).with("mode", "right").with("extra", 1);

    let merged = left.merge(&right);
    assert_json(&merged, r#"{"0":"a","mode":"right","1":"b","extra":1}"#);
    assert_json(&left, r#"{"0":"a","mode":"left"}"#);
}

#[test]
fn test_replace_keeps_integer_keys() {
    let left = Arrayy::from(vec!["a", "b"]);
    let right = Arrayy::from(vec!["c"]);
    assert_json(&left.replace(&right), r#"["c","b"]"#);
}

#[test]
fn test_filter_and_map() {
    let array = Arrayy::from(vec![1, 2, 3, 4]);

    let even = array.filter(|_, v| v.as_int().is_some_and(|n| n % 2 == 0));
    assert_json(&even, r#"{"1":2,"3":4}"#);

    let labels = array.map(|k, v| format!("{k}:{v}"));
    assert_json(&labels, r#"["0:1","1:2","2:3","3:4"]"#);
    assert_eq!(array.len(), 4);
}

#[test]
fn test_extend_overwrites_existing_keys() {
    let mut array = Arrayy::new().with("a", 1);
    array.extend([("a", 2), ("b", 3)]);
    assert_json(&array, r#"{"a":2,"b":3}"#);
}

#[test]
fn test_contains_key_ignores_paths() {
    let array = setup_user();
    assert!(array.contains_key("user"));
    assert!(!array.contains_key("user.name"));
    assert!(array.has("user.name"));
}
