//! Error types for container operations.
//!
//! Path lookups never fail: a missing key or path is reported through `Option`
//! or a boolean. The variants here cover the remaining hard failures, namely
//! rejected construction input and strict-mode type violations.

use thiserror::Error;

/// Structured error types for container operations.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArrayyError {
    /// Input that cannot be turned into a container
    #[error("Invalid container input: {reason}")]
    InvalidInput { reason: String },

    /// A type tag that names no known value kind
    #[error("Unknown type tag '{tag}'")]
    InvalidType { tag: String },

    /// A value that does not have the requested type
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A value whose kind is not accepted by the property it is written to
    #[error("Type mismatch for '{key}': expected {expected}, found {actual}")]
    PropertyMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    /// A write to a key that the strict schema does not declare
    #[error("Unknown property '{key}'")]
    UnknownProperty { key: String },
}

impl ArrayyError {
    /// Check if this error was raised while building a container
    pub fn is_input_error(&self) -> bool {
        matches!(self, ArrayyError::InvalidInput { .. })
    }

    /// Check if this error is a type validation failure
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            ArrayyError::TypeMismatch { .. }
                | ArrayyError::PropertyMismatch { .. }
                | ArrayyError::InvalidType { .. }
        )
    }

    /// Check if this error refers to an undeclared property
    pub fn is_not_found_error(&self) -> bool {
        matches!(self, ArrayyError::UnknownProperty { .. })
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            ArrayyError::PropertyMismatch { key, .. } | ArrayyError::UnknownProperty { key } => {
                Some(key)
            }
            _ => None,
        }
    }
}

impl From<ArrayyError> for crate::Error {
    fn from(err: ArrayyError) -> Self {
        crate::Error::Arrayy(err)
    }
}
