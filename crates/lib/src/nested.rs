//! Path addressing over nested entries.
//!
//! These functions are the one implementation of get / set / remove by key or
//! by separator-delimited path. [`Arrayy`] calls them on its own entries, and
//! [`crate::StrictArrayy`] reaches them through the `Arrayy` it wraps.
//!
//! Lookup rules shared by every operation:
//!
//! 1. A key that exists directly in the top-level entries is used as-is, even
//!    if it contains the separator.
//! 2. Integer keys are never split.
//! 3. Otherwise a string containing the separator is split into segments and
//!    walked one nesting level at a time. A missing segment, or a scalar where a
//!    container was expected, ends the walk as a miss.

use crate::{Arrayy, Entries, Key, Value, path::Path};

/// Returns the path to walk when `key` is not a direct entry, or `None` when it
/// has to be treated as a plain key.
fn walk_path<'k>(entries: &Entries, key: &'k Key, separator: char) -> Option<Path<'k>> {
    match key {
        Key::Str(raw) if raw.contains(separator) && !entries.contains_key(key) => {
            Some(Path::new(raw, separator))
        }
        _ => None,
    }
}

/// Looks up `key` directly or by path.
pub(crate) fn get<'m>(entries: &'m Entries, key: &Key, separator: char) -> Option<&'m Value> {
    let Some(path) = walk_path(entries, key, separator) else {
        return entries.get(key);
    };

    let mut segments = path.segments();
    let mut current = entries.get(&segments.next()?)?;
    for segment in segments {
        current = match current {
            Value::Array(child) => child.entries.get(&segment)?,
            other => {
                tracing::trace!(
                    path = %path,
                    segment = %segment,
                    found = other.type_name(),
                    "Path walk reached a scalar"
                );
                return None;
            }
        };
    }
    Some(current)
}

/// Mutable variant of [`get`].
pub(crate) fn get_mut<'m>(
    entries: &'m mut Entries,
    key: &Key,
    separator: char,
) -> Option<&'m mut Value> {
    let Some(path) = walk_path(entries, key, separator) else {
        return entries.get_mut(key);
    };

    let mut segments = path.segments();
    let mut current = entries.get_mut(&segments.next()?)?;
    for segment in segments {
        current = current.as_array_mut()?.entries.get_mut(&segment)?;
    }
    Some(current)
}

/// Stores `value` under `key`, creating intermediate containers for paths.
///
/// Intermediate segments that are missing or hold a scalar are replaced by an
/// empty container using the parent's separator. Returns the value previously
/// stored at the final location.
pub(crate) fn set(array: &mut Arrayy, key: Key, value: Value) -> Option<Value> {
    let separator = array.separator();
    if array.entries.contains_key(&key) {
        return array.insert(key, value);
    }
    let raw = match key {
        Key::Str(raw) if raw.contains(separator) => raw,
        key => return array.insert(key, value),
    };

    let (parents, last) = Path::new(&raw, separator).split_last();
    let mut current = array;
    for segment in parents {
        current.reserve_index(&segment);
        let slot = current
            .entries
            .entry(segment)
            .or_insert_with(|| Value::Array(Arrayy::with_separator(separator)));
        if !slot.is_array() {
            tracing::debug!(
                path = %raw,
                replaced = slot.type_name(),
                "Replacing scalar with container to set nested path"
            );
            *slot = Value::Array(Arrayy::with_separator(separator));
        }
        current = match slot {
            Value::Array(child) => child,
            _ => unreachable!(),
        };
    }
    current.insert(last, value)
}

/// Removes `key` directly or by path.
///
/// The outer `Option` is `None` when the walk failed at an intermediate
/// segment. Otherwise it holds whatever was stored at the final segment, which
/// may be nothing: removing an absent final key is not a failure.
pub(crate) fn take(entries: &mut Entries, key: &Key, separator: char) -> Option<Option<Value>> {
    let Some(path) = walk_path(entries, key, separator) else {
        return Some(entries.shift_remove(key));
    };

    let (parents, last) = path.split_last();
    let mut current = entries;
    for segment in parents {
        match current.get_mut(&segment) {
            Some(Value::Array(child)) => current = &mut child.entries,
            _ => {
                tracing::trace!(path = %path, segment = %segment, "Remove stopped at missing segment");
                return None;
            }
        }
    }
    Some(current.shift_remove(&last))
}
