//! The ordered, path-addressable container.
//!
//! [`Arrayy`] maps [`Key`]s to [`Value`]s and keeps insertion order. Values are
//! addressed either by a single key or by a separator-delimited path that
//! descends into nested containers.
//!
//! # Usage
//!
//! ```
//! use arrayy::{Arrayy, Value};
//!
//! let mut array = Arrayy::new();
//! array.set("user.profile.name", "Alice");
//! array.set("user.roles", vec!["admin", "ops"]);
//!
//! assert_eq!(array.get_as::<&str>("user.profile.name"), Some("Alice"));
//! assert_eq!(array.get_as::<&str>("user.roles.1"), Some("ops"));
//! assert_eq!(array.get_or("user.email", "none"), Value::from("none"));
//!
//! assert!(array.remove("user.profile.name"));
//! assert!(!array.has("user.profile.name"));
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::{Key, Value, nested, path::DEFAULT_SEPARATOR};

mod encoding;

/// Ordered map backing every container.
pub type Entries = IndexMap<Key, Value>;

/// Ordered mapping from keys to values with dot-notation access.
///
/// # Core Operations
///
/// - **Path access**: `get()`, `get_or()`, `get_or_else()`, `get_as()`, `has()`
/// - **Path modification**: `set()`, `remove()`, `take()`
/// - **Bulk operations**: `push()`, `merge()`, `replace()`, `filter()`, `map()`
///
/// # Lookup Precedence
///
/// A key that exists as-is wins over path interpretation:
///
/// ```
/// # use arrayy::Arrayy;
/// let array: Arrayy = [("a.b", 1)].into_iter().collect();
/// assert_eq!(array.get_as::<i64>("a.b"), Some(1));
/// ```
///
/// # Separator
///
/// The path separator is per-container configuration. It is not part of the
/// data: it is neither serialized nor compared.
///
/// ```
/// # use arrayy::Arrayy;
/// let mut array = Arrayy::with_separator('/');
/// array.set("a/b", 1);
/// assert_eq!(array.get_as::<i64>("a/b"), Some(1));
/// assert!(array.get("a.b").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Arrayy {
    pub(crate) entries: Entries,
    separator: char,
    /// Key for the next `push`; `None` once `i64::MAX` has been used
    next_free: Option<i64>,
}

/// The result of [`Arrayy::resolve`]: the container itself or a value in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// No path was given
    Whole(&'a Arrayy),
    /// The value found at the path
    Value(&'a Value),
}

impl<'a> Resolved<'a> {
    /// Returns the container, if the resolved item is one
    pub fn as_array(&self) -> Option<&'a Arrayy> {
        match self {
            Resolved::Whole(array) => Some(array),
            Resolved::Value(value) => value.as_array(),
        }
    }

    /// Clones the resolved item into an owned value
    pub fn to_value(&self) -> Value {
        match self {
            Resolved::Whole(array) => Value::Array((*array).clone()),
            Resolved::Value(value) => (*value).clone(),
        }
    }
}

impl Arrayy {
    /// Creates a new empty container using the default separator
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    /// Creates a new empty container that splits paths on `separator`
    pub fn with_separator(separator: char) -> Self {
        Self {
            entries: Entries::new(),
            separator,
            next_free: Some(0),
        }
    }

    /// Builds a container around existing entries, recomputing the next index
    fn from_parts(entries: Entries, separator: char) -> Self {
        let next_free = match entries.keys().filter_map(Key::as_int).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        };
        Self {
            entries,
            separator,
            next_free,
        }
    }

    /// Wraps any value as a container.
    ///
    /// A nested container is returned as-is, `Null` becomes an empty container
    /// and any other scalar becomes a one-element list.
    ///
    /// ```
    /// # use arrayy::{Arrayy, Value};
    /// assert!(Arrayy::create(Value::Null).is_empty());
    /// assert_eq!(Arrayy::create("x").get_as::<&str>(0), Some("x"));
    /// ```
    pub fn create(value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Array(array) => array,
            Value::Null => Self::new(),
            scalar => Self::from(vec![scalar]),
        }
    }

    /// Returns the separator used to split paths
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Changes the path separator of this container and every nested one
    pub fn set_path_separator(&mut self, separator: char) -> &mut Self {
        self.separator = separator;
        for value in self.entries.values_mut() {
            if let Value::Array(child) = value {
                child.set_path_separator(separator);
            }
        }
        self
    }

    /// Returns the number of top-level entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the container has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `key` is a top-level entry. Paths are not followed.
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into().normalize())
    }

    /// Gets a value by key or path
    pub fn get(&self, path: impl Into<Key>) -> Option<&Value> {
        nested::get(&self.entries, &path.into().normalize(), self.separator)
    }

    /// Gets a mutable reference to a value by key or path
    pub fn get_mut(&mut self, path: impl Into<Key>) -> Option<&mut Value> {
        nested::get_mut(&mut self.entries, &path.into().normalize(), self.separator)
    }

    /// Gets a value by key or path, or `fallback` when nothing is stored there
    pub fn get_or(&self, path: impl Into<Key>, fallback: impl Into<Value>) -> Value {
        match self.get(path) {
            Some(value) => value.clone(),
            None => fallback.into(),
        }
    }

    /// Gets a value by key or path, calling `fallback` only on a miss
    ///
    /// ```
    /// # use arrayy::{Arrayy, Value};
    /// let array = Arrayy::new();
    /// let value = array.get_or_else("missing.path", || "computed");
    /// assert_eq!(value, Value::from("computed"));
    /// ```
    pub fn get_or_else<V, F>(&self, path: impl Into<Key>, fallback: F) -> Value
    where
        V: Into<Value>,
        F: FnOnce() -> V,
    {
        match self.get(path) {
            Some(value) => value.clone(),
            None => fallback().into(),
        }
    }

    /// Gets a value by key or path with automatic type conversion
    ///
    /// Returns `None` if nothing is stored there or the value has another type.
    ///
    /// ```
    /// # use arrayy::Arrayy;
    /// let mut array = Arrayy::new();
    /// array.set("user.age", 30);
    ///
    /// assert_eq!(array.get_as::<i64>("user.age"), Some(30));
    /// assert_eq!(array.get_as::<String>("user.age"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl Into<Key>) -> Option<T>
    where
        T: TryFrom<&'a Value>,
    {
        T::try_from(self.get(path)?).ok()
    }

    /// Gets a nested container by key or path
    pub fn get_array(&self, path: impl Into<Key>) -> Option<&Arrayy> {
        self.get(path)?.as_array()
    }

    /// Gets a mutable nested container by key or path
    pub fn get_array_mut(&mut self, path: impl Into<Key>) -> Option<&mut Arrayy> {
        self.get_mut(path)?.as_array_mut()
    }

    /// Resolves an optional path. `None` resolves to the whole container.
    pub fn resolve<K: Into<Key>>(&self, path: Option<K>) -> Option<Resolved<'_>> {
        match path {
            None => Some(Resolved::Whole(self)),
            Some(path) => self.get(path).map(Resolved::Value),
        }
    }

    /// Returns true if a value, including `Null`, is stored at the key or path
    pub fn has(&self, path: impl Into<Key>) -> bool {
        self.get(path).is_some()
    }

    /// Sets a value at the given key or path, returns the old value if present
    ///
    /// Intermediate containers are created as needed. An intermediate segment
    /// holding a scalar is replaced by an empty container.
    pub fn set(&mut self, path: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        nested::set(self, path.into().normalize(), value.into())
    }

    /// Inserts a top-level entry, keeping the next push index past it
    pub(crate) fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        self.reserve_index(&key);
        self.entries.insert(key, value)
    }

    /// Moves the next push index past `key` if it is an integer
    pub(crate) fn reserve_index(&mut self, key: &Key) {
        match (key.as_int(), self.next_free) {
            (Some(n), Some(next)) if n >= next => self.next_free = n.checked_add(1),
            _ => {}
        }
    }

    /// Sets a value at an optional path. Returns false, changing nothing, when
    /// no path is given.
    pub fn set_at<K: Into<Key>>(&mut self, path: Option<K>, value: impl Into<Value>) -> bool {
        match path {
            Some(path) => {
                self.set(path, value);
                true
            }
            None => false,
        }
    }

    /// Removes the value at the given key or path.
    ///
    /// Returns false only if an intermediate segment of the path does not lead
    /// to a container. Removing a final key that is already absent succeeds.
    pub fn remove(&mut self, path: impl Into<Key>) -> bool {
        nested::take(&mut self.entries, &path.into().normalize(), self.separator).is_some()
    }

    /// Removes and returns the value at the given key or path
    pub fn take(&mut self, path: impl Into<Key>) -> Option<Value> {
        nested::take(&mut self.entries, &path.into().normalize(), self.separator).flatten()
    }

    /// Builder method to set a value and return self
    pub fn with(mut self, path: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.set(path, value);
        self
    }

    /// Returns the key `push` would use next.
    ///
    /// This is one past the largest integer key ever stored, or 0. Removing
    /// entries does not lower it; `clear` resets it. Returns `None` once key
    /// `i64::MAX` has been stored, since no larger key exists.
    pub fn next_index(&self) -> Option<i64> {
        self.next_free
    }

    /// Appends a value under the next free integer key and returns that key.
    ///
    /// Returns `None`, storing nothing, when no next key exists.
    ///
    /// ```
    /// # use arrayy::{Arrayy, Key};
    /// let mut array = Arrayy::new();
    /// assert_eq!(array.push("a"), Some(Key::Int(0)));
    ///
    /// array.set(i64::MAX, "last");
    /// assert_eq!(array.push("b"), None);
    /// assert_eq!(array.get_as::<&str>(i64::MAX), Some("last"));
    /// ```
    pub fn push(&mut self, value: impl Into<Value>) -> Option<Key> {
        let Some(index) = self.next_free else {
            tracing::debug!(len = self.len(), "Refusing push: next integer key is out of range");
            return None;
        };
        let key = Key::Int(index);
        self.insert(key.clone(), value.into());
        Some(key)
    }

    /// Returns true if the keys are exactly `0..len` in order
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, key)| key.as_int() == Some(i as i64))
    }

    /// Returns the first entry in insertion order
    pub fn first(&self) -> Option<(&Key, &Value)> {
        self.entries.first()
    }

    /// Returns the last entry in insertion order
    pub fn last(&self) -> Option<(&Key, &Value)> {
        self.entries.last()
    }

    /// Returns an iterator over all key-value pairs in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over all key-value pairs
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, Key, Value> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over all keys
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Returns an iterator over all values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns a mutable iterator over all values
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.values_mut()
    }

    /// Clears all entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_free = Some(0);
    }

    /// Merges `other` after this container into a new one.
    ///
    /// String keys from `other` overwrite; integer keys from both sides are
    /// renumbered from 0 and appended in order.
    ///
    /// ```
    /// # use arrayy::Arrayy;
    /// let left = Arrayy::from(vec!["a", "b"]).with("name", "left");
    /// let right = Arrayy::from(vec!["c"]).with("name", "right");
    ///
    /// let merged = left.merge(&right);
    /// assert_eq!(merged.to_json().unwrap(), r#"{"0":"a","1":"b","name":"right","2":"c"}"#);
    /// ```
    pub fn merge(&self, other: &Arrayy) -> Arrayy {
        let mut merged = Arrayy::with_separator(self.separator);
        let mut index: i64 = 0;
        for (key, value) in self.iter().chain(other.iter()) {
            match key {
                // One renumbered key per entry, so `index` stays below the entry count
                Key::Int(_) => {
                    merged.insert(Key::Int(index), value.clone());
                    index += 1;
                }
                Key::Str(_) => {
                    merged.insert(key.clone(), value.clone());
                }
            }
        }
        merged
    }

    /// Returns a new container where every key of `other` overwrites this one
    pub fn replace(&self, other: &Arrayy) -> Arrayy {
        let mut replaced = self.clone();
        replaced.extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
        replaced
    }

    /// Returns a new container holding the entries for which `predicate` is true
    pub fn filter<F>(&self, mut predicate: F) -> Arrayy
    where
        F: FnMut(&Key, &Value) -> bool,
    {
        let entries = self
            .iter()
            .filter(|&(k, v)| predicate(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Arrayy::from_parts(entries, self.separator)
    }

    /// Returns a new container with every value replaced by `f(key, value)`
    pub fn map<V, F>(&self, mut f: F) -> Arrayy
    where
        V: Into<Value>,
        F: FnMut(&Key, &Value) -> V,
    {
        let entries = self
            .iter()
            .map(|(k, v)| (k.clone(), f(k, v).into()))
            .collect();
        Arrayy {
            entries,
            separator: self.separator,
            next_free: self.next_free,
        }
    }

    /// Returns the underlying ordered map
    pub fn as_map(&self) -> &Entries {
        &self.entries
    }

    /// Consumes the container, returning the underlying ordered map
    pub fn into_map(self) -> Entries {
        self.entries
    }
}

impl Default for Arrayy {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Arrayy {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Display for Arrayy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Arrayy {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut array = Arrayy::new();
        array.extend(iter);
        array
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Arrayy {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key.into().normalize(), value.into());
        }
    }
}

impl<V: Into<Value>> From<Vec<V>> for Arrayy {
    fn from(values: Vec<V>) -> Self {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::from(i), v.into()))
            .collect()
    }
}

impl From<Entries> for Arrayy {
    fn from(entries: Entries) -> Self {
        let canonical = entries
            .keys()
            .all(|k| k.as_str().is_none_or(|s| crate::key::canonical_int(s).is_none()));
        if canonical {
            Self::from_parts(entries, DEFAULT_SEPARATOR)
        } else {
            entries.into_iter().collect()
        }
    }
}

impl IntoIterator for Arrayy {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Arrayy {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
