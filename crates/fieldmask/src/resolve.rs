//! Single-path resolution against a JSON document.
//!
//! A path resolves when every layer along it is an object that owns the
//! segment key. Arrays and primitives are opaque leaves: resolution
//! through them fails even for numeric segments, because the engine never
//! traverses into anything but plain objects.

use crate::error::{value_type_name, MaskError, MaskResult};
use crate::path::{escape_key, split_path};
use serde_json::Value;

/// Resolve a dotted path to a reference into `value`.
///
/// Returns `None` when any segment walks through a non-object layer or an
/// absent key. Total over any input, including a non-object root.
///
/// # Examples
///
/// ```
/// use fieldmask::resolve_path;
/// use serde_json::json;
///
/// let doc = json!({"user": {"name": "Alice", "tags": ["admin"]}});
/// assert_eq!(resolve_path(&doc, "user.name"), Some(&json!("Alice")));
/// assert_eq!(resolve_path(&doc, "user.missing"), None);
/// // Arrays are opaque leaves.
/// assert_eq!(resolve_path(&doc, "user.tags.0"), None);
/// ```
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in split_path(path) {
        current = current.as_object()?.get(&segment)?;
    }
    Some(current)
}

/// Resolve a dotted path to a mutable reference into `value`.
///
/// Same walk as [`resolve_path`].
pub fn resolve_path_mut<'a>(value: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    let mut current = value;
    for segment in split_path(path) {
        current = current.as_object_mut()?.get_mut(&segment)?;
    }
    Some(current)
}

/// Resolve a dotted path, reporting why resolution failed.
///
/// Returns [`MaskError::TypeMismatch`] when a segment walks into a
/// non-object value and [`MaskError::PathNotFound`] when a key is absent.
/// Error paths have their delimiters re-escaped.
///
/// # Examples
///
/// ```
/// use fieldmask::{require_path, MaskError};
/// use serde_json::json;
///
/// let doc = json!({"user": {"name": "Alice"}});
/// assert!(require_path(&doc, "user.name").is_ok());
///
/// let err = require_path(&doc, "user.name.first").unwrap_err();
/// assert!(matches!(err, MaskError::TypeMismatch { .. }));
/// ```
pub fn require_path<'a>(value: &'a Value, path: &str) -> MaskResult<&'a Value> {
    let segments = split_path(path);
    let mut current = value;
    for (index, segment) in segments.iter().enumerate() {
        let layer = current.as_object().ok_or_else(|| {
            MaskError::type_mismatch(
                rejoin(&segments[..index]),
                "object",
                value_type_name(current),
            )
        })?;
        current = layer
            .get(segment)
            .ok_or_else(|| MaskError::path_not_found(rejoin(&segments[..=index])))?;
    }
    Ok(current)
}

/// Re-escape raw segments into a dotted path for error reporting.
fn rejoin(segments: &[String]) -> String {
    segments
        .iter()
        .map(|s| escape_key(s))
        .collect::<Vec<_>>()
        .join(".")
}
