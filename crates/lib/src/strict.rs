//! Type-checked containers.
//!
//! A [`StrictArrayy`] wraps an [`Arrayy`] together with a [`Schema`] that
//! declares which top-level keys may exist and which value kinds each of them
//! accepts. Reads go straight to the wrapped container; every write is checked
//! against the property owning the top-level key first.
//!
//! Kinds are written as type tags in the familiar `int|string|null` notation:
//!
//! ```
//! use arrayy::{Schema, StrictArrayy, Value};
//!
//! let schema = Schema::parse([("id", "int"), ("name", "?string"), ("tags", "string[]")])?;
//! let mut user = StrictArrayy::new(schema);
//!
//! user.set("id", 7)?;
//! user.set("name", Value::Null)?;
//! user.set("tags.0", "admin")?;
//!
//! assert!(user.set("id", "seven").is_err());
//! assert!(user.set("email", "a@b.c").is_err());
//! assert_eq!(user.get_as::<&str>("tags.0"), Some("admin"));
//! # Ok::<(), arrayy::Error>(())
//! ```

use std::{fmt, ops::Deref, str::FromStr};

use indexmap::IndexMap;

use crate::{Arrayy, Key, Result, Value, errors::ArrayyError, path::Path};

/// The kind of value a property accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `null`
    Null,
    /// `bool` / `boolean`
    Bool,
    /// `int` / `integer`
    Int,
    /// `float` / `double`; integers are not accepted
    Float,
    /// `string`
    String,
    /// `array` or any `T[]` tag
    Array,
    /// Accepts every value
    Mixed,
}

impl ValueKind {
    /// Returns the kind of `value`. Never `Mixed`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
        }
    }

    /// Returns true if `value` is of this kind
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ValueKind::Mixed => true,
            kind => *kind == Self::of(value),
        }
    }

    /// Returns the canonical tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = ArrayyError;

    /// Parses a single tag. `T[]` is read as `array`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.ends_with("[]") {
            return Ok(ValueKind::Array);
        }
        match tag.to_ascii_lowercase().as_str() {
            "null" => Ok(ValueKind::Null),
            "bool" | "boolean" => Ok(ValueKind::Bool),
            "int" | "integer" => Ok(ValueKind::Int),
            "float" | "double" => Ok(ValueKind::Float),
            "string" => Ok(ValueKind::String),
            "array" => Ok(ValueKind::Array),
            "mixed" => Ok(ValueKind::Mixed),
            _ => Err(ArrayyError::InvalidType {
                tag: tag.to_string(),
            }),
        }
    }
}

/// A declared top-level key and the kinds of value it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    key: Key,
    kinds: Vec<ValueKind>,
}

impl Property {
    /// Creates a property accepting any of `kinds`
    pub fn new(key: impl Into<Key>, kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        let mut property = Self {
            key: key.into().normalize(),
            kinds: Vec::new(),
        };
        for kind in kinds {
            property.add_kind(kind);
        }
        property
    }

    /// Parses a property from a type tag such as `"int|string"` or `"?float"`.
    ///
    /// Alternatives are separated by `|`. A leading `?` on an alternative also
    /// allows `null`. An empty tag is rejected.
    ///
    /// ```
    /// # use arrayy::{Property, Value};
    /// let property = Property::parse("age", "?int")?;
    /// assert!(property.accepts(&Value::Int(3)));
    /// assert!(property.accepts(&Value::Null));
    /// assert!(!property.accepts(&Value::Float(3.5)));
    /// # Ok::<(), arrayy::Error>(())
    /// ```
    pub fn parse(key: impl Into<Key>, tag: &str) -> Result<Self> {
        if tag.trim().is_empty() {
            return Err(ArrayyError::InvalidType {
                tag: tag.to_string(),
            }
            .into());
        }

        let mut property = Self {
            key: key.into().normalize(),
            kinds: Vec::new(),
        };
        for alternative in tag.split('|') {
            let alternative = alternative.trim();
            let alternative = match alternative.strip_prefix('?') {
                Some(rest) => {
                    property.add_kind(ValueKind::Null);
                    rest
                }
                None => alternative,
            };
            property.add_kind(alternative.parse()?);
        }
        Ok(property)
    }

    fn add_kind(&mut self, kind: ValueKind) {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
    }

    /// Returns the key this property declares
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Returns the accepted kinds in declaration order
    pub fn kinds(&self) -> &[ValueKind] {
        &self.kinds
    }

    /// Returns true if `value` may be stored under this property
    pub fn accepts(&self, value: &Value) -> bool {
        self.kinds.iter().any(|kind| kind.accepts(value))
    }

    /// Returns true if values of `kind` may be stored under this property
    pub fn accepts_kind(&self, kind: ValueKind) -> bool {
        self.kinds
            .iter()
            .any(|k| *k == kind || *k == ValueKind::Mixed)
    }

    /// Returns the tag describing the accepted kinds, e.g. `"int|null"`
    pub fn type_tag(&self) -> String {
        self.kinds
            .iter()
            .map(ValueKind::as_str)
            .collect::<Vec<_>>()
            .join("|")
    }

    fn mismatch(&self, actual: &str) -> ArrayyError {
        ArrayyError::PropertyMismatch {
            key: self.key.to_string(),
            expected: self.type_tag(),
            actual: actual.to_string(),
        }
    }

    /// Checks `value` against this property
    pub fn check(&self, value: &Value) -> std::result::Result<(), ArrayyError> {
        if self.accepts(value) {
            Ok(())
        } else {
            Err(self.mismatch(value.type_name()))
        }
    }
}

/// The declared properties of a strict container, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    properties: IndexMap<Key, Property>,
}

impl Schema {
    /// Creates an empty schema. It declares nothing, so it rejects every write.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to declare a property. Redeclaring a key replaces it.
    pub fn property(mut self, property: Property) -> Self {
        self.properties.insert(property.key.clone(), property);
        self
    }

    /// Builds a schema from `(key, type tag)` pairs
    pub fn parse<I, K, T>(declarations: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<Key>,
        T: AsRef<str>,
    {
        declarations
            .into_iter()
            .try_fold(Self::new(), |schema, (key, tag)| {
                Ok(schema.property(Property::parse(key, tag.as_ref())?))
            })
    }

    /// Returns the property declared for `key`
    pub fn get(&self, key: impl Into<Key>) -> Option<&Property> {
        self.properties.get(&key.into().normalize())
    }

    /// Returns the number of declared properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if no property is declared
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns an iterator over the properties in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    /// Checks every top-level entry of `array` against its property
    pub fn validate(&self, array: &Arrayy) -> Result<()> {
        for (key, value) in array {
            self.lookup(key)?.check(value)?;
        }
        Ok(())
    }

    fn lookup(&self, key: &Key) -> std::result::Result<&Property, ArrayyError> {
        self.properties
            .get(key)
            .ok_or_else(|| ArrayyError::UnknownProperty {
                key: key.to_string(),
            })
    }
}

/// A container whose top-level entries are validated against a [`Schema`].
///
/// Reads are available through `Deref<Target = Arrayy>`. There is no mutable
/// access to the wrapped container, so every write goes through [`set`].
///
/// [`set`]: StrictArrayy::set
#[derive(Debug, Clone, PartialEq)]
pub struct StrictArrayy {
    inner: Arrayy,
    schema: Schema,
}

impl StrictArrayy {
    /// Creates an empty container governed by `schema`
    pub fn new(schema: Schema) -> Self {
        Self {
            inner: Arrayy::new(),
            schema,
        }
    }

    /// Wraps an existing container after validating all of its entries
    pub fn from_arrayy(schema: Schema, array: Arrayy) -> Result<Self> {
        schema.validate(&array)?;
        Ok(Self {
            inner: array,
            schema,
        })
    }

    /// Returns the schema writes are checked against
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Consumes the wrapper, returning the unchecked container
    pub fn into_inner(self) -> Arrayy {
        self.inner
    }

    /// Sets a value at a key or path once the owning property accepts it.
    ///
    /// A single-key write checks `value` itself. A path write stores a nested
    /// container under the top-level key, so that property has to accept
    /// arrays. Nothing is modified when the write is rejected.
    pub fn set(&mut self, path: impl Into<Key>, value: impl Into<Value>) -> Result<Option<Value>> {
        let key = path.into().normalize();
        let value = value.into();

        if let Err(err) = self.check_write(&key, &value) {
            tracing::debug!(key = %key, error = %err, "Strict container rejected write");
            return Err(err.into());
        }
        Ok(self.inner.set(key, value))
    }

    fn check_write(&self, key: &Key, value: &Value) -> std::result::Result<(), ArrayyError> {
        let separator = self.inner.separator();
        match key {
            Key::Str(raw) if raw.contains(separator) && !self.inner.contains_key(key) => {
                let owner = Path::new(raw, separator)
                    .first()
                    .unwrap_or_else(|| Key::from(""));
                let property = self.schema.lookup(&owner)?;
                if property.accepts_kind(ValueKind::Array) {
                    Ok(())
                } else {
                    Err(property.mismatch(ValueKind::Array.as_str()))
                }
            }
            _ => self.schema.lookup(key)?.check(value),
        }
    }

    /// Removes the value at a key or path. See [`Arrayy::remove`].
    pub fn remove(&mut self, path: impl Into<Key>) -> bool {
        self.inner.remove(path)
    }

    /// Removes and returns the value at a key or path
    pub fn take(&mut self, path: impl Into<Key>) -> Option<Value> {
        self.inner.take(path)
    }

    /// Changes the path separator of the wrapped container
    pub fn set_path_separator(&mut self, separator: char) -> &mut Self {
        self.inner.set_path_separator(separator);
        self
    }
}

impl Deref for StrictArrayy {
    type Target = Arrayy;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<Arrayy> for StrictArrayy {
    fn as_ref(&self) -> &Arrayy {
        &self.inner
    }
}
