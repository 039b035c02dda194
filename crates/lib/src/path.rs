//! Delimiter-separated paths into nested containers.
//!
//! A path is a plain string such as `"user.profile.name"`. Splitting it on the
//! container's separator yields one [`Key`] per nesting level. Each segment goes
//! through the usual key coercion, so `"items.0"` addresses integer key `0`
//! inside `items`.
//!
//! Unlike file-system paths, empty segments are meaningful: the empty string is
//! a valid key, so `"a..b"` has three segments `a`, `""` and `b`.
//!
//! # Usage
//!
//! ```rust
//! use arrayy::{Key, path::Path};
//!
//! let path = Path::new("user.profile.name", '.');
//! let segments: Vec<Key> = path.segments().collect();
//! assert_eq!(segments, vec![Key::from("user"), Key::from("profile"), Key::from("name")]);
//!
//! let path = Path::new("items/0", '/');
//! assert_eq!(path.last(), Some(Key::Int(0)));
//! ```

use std::fmt;

use crate::Key;

/// Separator used by containers that were not configured otherwise.
pub const DEFAULT_SEPARATOR: char = '.';

/// A borrowed path together with the separator it is split on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Path<'a> {
    raw: &'a str,
    separator: char,
}

impl<'a> Path<'a> {
    /// Creates a path over `raw`, split on `separator`.
    pub fn new(raw: &'a str, separator: char) -> Self {
        Self { raw, separator }
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Returns the separator this path is split on.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Returns `true` if the path has more than one segment.
    pub fn is_compound(&self) -> bool {
        self.raw.contains(self.separator)
    }

    /// Returns an iterator over the path segments as keys.
    pub fn segments(&self) -> impl Iterator<Item = Key> + use<'a> {
        self.raw.split(self.separator).map(Key::from)
    }

    /// Returns the number of segments. Never zero: `""` is one empty segment.
    pub fn len(&self) -> usize {
        self.raw.split(self.separator).count()
    }

    /// Returns the first segment.
    pub fn first(&self) -> Option<Key> {
        self.raw.split(self.separator).next().map(Key::from)
    }

    /// Returns the last segment.
    pub fn last(&self) -> Option<Key> {
        self.raw.split(self.separator).next_back().map(Key::from)
    }

    /// Splits the path into its leading segments and its final segment.
    pub fn split_last(&self) -> (Vec<Key>, Key) {
        let mut segments: Vec<Key> = self.segments().collect();
        // split() always yields at least one item
        let last = segments.pop().unwrap_or_else(|| Key::from(""));
        (segments, last)
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Joins keys into a path string using `separator`.
///
/// ```rust
/// use arrayy::{Key, path::join};
///
/// assert_eq!(join([Key::from("a"), Key::Int(0), Key::from("b")], '.'), "a.0.b");
/// ```
pub fn join<I>(segments: I, separator: char) -> String
where
    I: IntoIterator,
    I::Item: Into<Key>,
{
    let mut path = String::new();
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            path.push(separator);
        }
        path.push_str(&segment.into().to_string());
    }
    path
}

/// Builds a path string from components using the default separator.
///
/// ```rust
/// # use arrayy::path;
/// let index = 3;
/// assert_eq!(path!("users", index, "name"), "users.3.name");
/// assert_eq!(path!("single"), "single");
/// ```
#[macro_export]
macro_rules! path {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let mut path = $first.to_string();
        $(
            path.push($crate::path::DEFAULT_SEPARATOR);
            path.push_str(&$rest.to_string());
        )*
        path
    }};
}
