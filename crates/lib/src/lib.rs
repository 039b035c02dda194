//!
//! Arrayy: ordered containers addressable by key or by dot-notation path.
//! This library provides the container type and the helpers around it.
//!
//! ## Core Concepts
//!
//! * **Keys (`key::Key`)**: Integers or strings, with the coercions of a native associative array (`true` is `1`, `"7"` is `7`).
//! * **Values (`value::Value`)**: Scalars or nested containers.
//! * **Containers (`arrayy::Arrayy`)**: Ordered key to value mappings. Values are read and written by a single key or by a path such as `"user.profile.name"` that descends into nested containers.
//! * **Paths (`path::Path`)**: Separator-delimited sequences of keys. The separator is configured per container and defaults to `.`.
//! * **Strict containers (`strict::StrictArrayy`)**: Containers whose top-level keys are declared in a `strict::Schema` and type-checked on every write.
//!
//! ## Example
//!
//! ```
//! use arrayy::Arrayy;
//!
//! let mut config = Arrayy::from_json(r#"{"db": {"host": "localhost"}}"#)?;
//! config.set("db.port", 5432);
//!
//! assert_eq!(config.get_as::<&str>("db.host"), Some("localhost"));
//! assert_eq!(config.get_as::<i64>("db.port"), Some(5432));
//! assert_eq!(config.to_json()?, r#"{"db":{"host":"localhost","port":5432}}"#);
//! # Ok::<(), arrayy::Error>(())
//! ```

pub mod arrayy;
pub mod errors;
pub mod key;
pub(crate) mod nested;
pub mod path;
pub mod strict;
pub mod value;

pub use arrayy::{Arrayy, Entries, Resolved};
pub use errors::ArrayyError;
pub use key::Key;
pub use strict::{Property, Schema, StrictArrayy, ValueKind};
pub use value::Value;

/// Result type used throughout the Arrayy library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Arrayy library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from container construction and strict mode
    #[error(transparent)]
    Arrayy(ArrayyError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Arrayy(_) => "arrayy",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error refers to an undeclared property.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Arrayy(err) => err.is_not_found_error(),
            _ => false,
        }
    }

    /// Check if this error is a type validation failure.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Arrayy(err) => err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error was caused by input that is not a container.
    pub fn is_input_error(&self) -> bool {
        match self {
            Error::Arrayy(err) => err.is_input_error(),
            _ => false,
        }
    }

    /// Check if this error came from serde_json.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }

    /// Returns the structured container error, if this is one.
    pub fn as_arrayy_error(&self) -> Option<&ArrayyError> {
        match self {
            Error::Arrayy(err) => Some(err),
            _ => None,
        }
    }
}
