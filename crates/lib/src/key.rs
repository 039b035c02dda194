//! Keys for container entries.
//!
//! A [`Key`] is either an integer or a string. Conversions into `Key` apply the
//! same coercions a native associative array does, so that `true`, `1` and
//! `"1"` all address the same entry:
//!
//! - booleans become `0` / `1`;
//! - strings holding a canonical decimal integer become integers;
//! - every other string stays a string.
//!
//! ```
//! use arrayy::Key;
//!
//! assert_eq!(Key::from(true), Key::Int(1));
//! assert_eq!(Key::from("42"), Key::Int(42));
//! assert_eq!(Key::from("042"), Key::Str("042".to_string()));
//! assert_eq!(Key::from("name"), Key::Str("name".to_string()));
//! ```

use std::fmt;

/// A key identifying one entry at one nesting level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key (list positions and numeric keys)
    Int(i64),
    /// Any key that is not a canonical integer
    Str(String),
}

impl Key {
    /// Returns true if this is an integer key
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Returns the integer value of this key, if it is one
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }

    /// Returns the string value of this key, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            Key::Int(_) => None,
        }
    }

    /// Applies integer coercion to a hand-built `Key::Str`.
    ///
    /// Every `From` conversion already produces canonical keys; containers call
    /// this on each incoming key so `Key::Str("1".into())` still addresses `1`.
    ///
    /// ```
    /// # use arrayy::Key;
    /// assert_eq!(Key::Str("1".to_string()).normalize(), Key::Int(1));
    /// assert_eq!(Key::Str("01".to_string()).normalize(), Key::from("01"));
    /// ```
    pub fn normalize(self) -> Self {
        match self {
            Key::Str(s) => Key::from(s),
            key => key,
        }
    }
}

/// Parses `s` as an integer only if it is written the way the integer would
/// print: no sign `+`, no leading zeros, no `-0`, and within `i64` range.
pub(crate) fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if s == "-0" {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match canonical_int(value) {
            Some(n) => Key::Int(n),
            None => Key::Str(value.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match canonical_int(&value) {
            Some(n) => Key::Int(n),
            None => Key::Str(value),
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::from(value.as_str())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        // Positions past i64::MAX cannot exist in memory
        Key::Int(value as i64)
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        *self == Key::from(other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        *self == Key::from(*other)
    }
}

impl PartialEq<i64> for Key {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Key::Int(n) if n == other)
    }
}
