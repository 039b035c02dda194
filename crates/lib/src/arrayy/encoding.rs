//! JSON encoding and decoding for containers and values.
//!
//! A container whose keys are exactly `0..len` in order encodes as a JSON
//! array; every other container encodes as an object with stringified keys.
//! Decoding accepts any JSON document: object keys go through key coercion,
//! `null` decodes to an empty container and a bare scalar is wrapped as a
//! one-element list.

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    ser::{SerializeMap, SerializeSeq},
};

use crate::{Arrayy, Key, Result, Value, errors::ArrayyError};

impl Serialize for Arrayy {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(&key.to_string(), value)?;
            }
            map.end()
        }
    }
}

impl<'de> Deserialize<'de> for Arrayy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Arrayy::from)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Array(array) => array.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // u64 beyond i64::MAX and fractional numbers
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect::<Vec<_>>().into())
            }
            serde_json::Value::Object(fields) => Value::Array(
                fields
                    .into_iter()
                    .map(|(k, v)| (Key::from(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Arrayy {
    fn from(json: serde_json::Value) -> Self {
        Arrayy::create(Value::from(json))
    }
}

impl Arrayy {
    /// Parses a container from JSON text.
    ///
    /// ```
    /// # use arrayy::Arrayy;
    /// let array = Arrayy::from_json(r#"{"a": {"b": 5}}"#)?;
    /// assert_eq!(array.get_as::<i64>("a.b"), Some(5));
    ///
    /// assert!(Arrayy::from_json("{not json").is_err());
    /// # Ok::<(), arrayy::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: serde_json::Value = serde_json::from_str(json).map_err(|e| {
            tracing::debug!(error = %e, "Rejected JSON container input");
            ArrayyError::InvalidInput {
                reason: e.to_string(),
            }
        })?;
        Ok(Arrayy::from(parsed))
    }

    /// Builds a container from any serializable value.
    ///
    /// Structs and maps become string-keyed containers, sequences become lists
    /// and scalars are wrapped as one-element lists.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let json = serde_json::to_value(value).map_err(|e| {
            tracing::debug!(error = %e, "Rejected serializable container input");
            ArrayyError::InvalidInput {
                reason: e.to_string(),
            }
        })?;
        Ok(Arrayy::from(json))
    }

    /// Deserializes the container into any `Deserialize` type
    pub fn deserialize_into<T>(&self) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        Ok(serde_json::from_value(self.to_json_value()?)?)
    }

    /// Encodes the container as compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes the container as indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Converts the container into a `serde_json::Value`
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
