//! Projection of a document down to the fields named by a mask.

use crate::filter::filter_mask_by_value;
use crate::path::split_path;
use serde_json::{Map, Value};

/// Build a new object containing only the fields named by `mask`.
///
/// The mask is filtered against `value` first, so unresolvable paths are
/// silently dropped rather than reported. Intermediate objects are rebuilt
/// along each surviving path and the named leaf is cloned across; sibling
/// fields the mask does not name are absent from the result.
///
/// Returns an empty object when the root is not an object or no mask path
/// resolves. Pure: `value` is never modified and shares no data with the
/// result.
///
/// # Examples
///
/// ```
/// use fieldmask::value_by_mask;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1, "c": 2}, "d": 3});
/// assert_eq!(value_by_mask(&doc, ["a.b"]), json!({"a": {"b": 1}}));
/// ```
pub fn value_by_mask<I>(value: &Value, mask: I) -> Value
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let filtered = filter_mask_by_value(mask, value);
    let mut result = Map::new();
    'paths: for path in &filtered {
        let segments = split_path(path);
        let Some((last, parents)) = segments.split_last() else {
            continue;
        };
        let mut source = value;
        let mut target = &mut result;
        for segment in parents {
            // Guaranteed present after filtering.
            let Some(next) = source.get(segment.as_str()) else {
                continue 'paths;
            };
            source = next;
            target = descend_or_create(target, segment);
        }
        if let Some(leaf) = source.get(last.as_str()) {
            target.insert(last.clone(), leaf.clone());
        }
    }
    Value::Object(result)
}

/// Descend into `map[key]`, creating the slot as an empty object when it is
/// absent and replacing it when an earlier path left a non-object there.
fn descend_or_create<'a>(map: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let slot = map
        .entry(key.to_owned())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(next) => next,
        _ => unreachable!("slot was just made an object"),
    }
}
