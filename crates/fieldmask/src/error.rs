//! Error types for strict path resolution.
//!
//! The mask operations themselves are total and silently lenient:
//! unresolvable paths are dropped, never reported. Only the strict
//! [`require_path`](crate::require_path) accessor produces errors.

use serde_json::Value;
use thiserror::Error;

/// Result type alias for fieldmask operations.
pub type MaskResult<T> = Result<T, MaskError>;

/// Errors produced by strict path resolution.
#[derive(Debug, Error)]
pub enum MaskError {
    /// Path does not exist in the document.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The path that was not found, with delimiters re-escaped.
        path: String,
    },

    /// A path segment walked into a value that is not an object.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The path to the offending value.
        path: String,
        /// The expected type.
        expected: &'static str,
        /// The actual type found.
        found: &'static str,
    },
}

impl MaskError {
    /// Create a path not found error.
    #[inline]
    pub fn path_not_found(path: impl Into<String>) -> Self {
        MaskError::PathNotFound { path: path.into() }
    }

    /// Create a type mismatch error.
    #[inline]
    pub fn type_mismatch(
        path: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        MaskError::TypeMismatch {
            path: path.into(),
            expected,
            found,
        }
    }
}

/// Get the type name of a JSON value.
#[inline]
pub fn value_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
