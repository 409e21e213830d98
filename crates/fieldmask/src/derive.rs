//! Mask derivation: linearize a document into dotted leaf paths.
//!
//! Traversal is depth-first and preserves object insertion order, which
//! relies on `serde_json`'s `preserve_order` feature. Anything that is not
//! a plain object (arrays, primitives, null) is an opaque leaf and is
//! emitted as-is rather than traversed into.

use crate::path::join_segment;
use crate::Mask;
use serde_json::Value;

/// A pending traversal step: a subtree, the path that reaches it, and its
/// depth in segments.
struct Frame<'a> {
    value: &'a Value,
    prefix: String,
    depth: usize,
}

/// Derive the full mask of a document: one dotted path per leaf.
///
/// # Examples
///
/// ```
/// use fieldmask::mask_from_value;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1, "c": 2}, "d": 3});
/// assert_eq!(mask_from_value(&doc).paths(), ["a.b", "a.c", "d"]);
/// ```
pub fn mask_from_value(value: &Value) -> Mask {
    collect(value, None)
}

/// Derive a mask truncated at `level` segments deep.
///
/// Subtrees still unfinished at `level` are emitted as a single truncated
/// path. A level of 0 yields a single empty path for the root.
///
/// # Examples
///
/// ```
/// use fieldmask::mask_from_value_with_level;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": {"c": 1}}, "d": 2});
/// assert_eq!(mask_from_value_with_level(&doc, 2).paths(), ["a.b", "d"]);
/// ```
pub fn mask_from_value_with_level(value: &Value, level: usize) -> Mask {
    collect(value, Some(level))
}

fn collect(root: &Value, level: Option<usize>) -> Mask {
    let mut paths = Vec::new();
    let mut stack = vec![Frame {
        value: root,
        prefix: String::new(),
        depth: 0,
    }];
    while let Some(frame) = stack.pop() {
        if Some(frame.depth) == level {
            paths.push(frame.prefix);
            continue;
        }
        match frame.value {
            Value::Object(map) => {
                // Push entries in reverse so the LIFO stack pops them back
                // in insertion order.
                for (key, child) in map.iter().rev() {
                    stack.push(Frame {
                        value: child,
                        prefix: join_segment(&frame.prefix, key),
                        depth: frame.depth + 1,
                    });
                }
            }
            _ => paths.push(frame.prefix),
        }
    }
    Mask::from(paths)
}
