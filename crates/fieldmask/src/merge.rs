//! Masked update: copy fields from an update document into a target.

use crate::filter::filter_mask_by_value;
use crate::path::split_path;
use serde_json::Value;

/// Copy the fields named by `mask` from `update` into `target`, returning
/// the number of fields actually changed.
///
/// The mask is filtered against `target` and then against `update`; a path
/// must resolve in both documents to be eligible, so unresolvable entries
/// contribute zero and no intermediate structure is ever created. `target`
/// is mutated in place.
///
/// Write rule at the final segment: container values (objects and arrays)
/// replace the stored value atomically and always count; primitives and
/// null are written and counted only when the stored value differs.
///
/// # Examples
///
/// ```
/// use fieldmask::update_value_by_mask;
/// use serde_json::json;
///
/// let mut target = json!({"a": {"b": 1, "c": 2}, "d": 3});
/// let update = json!({"a": {"b": 4}});
///
/// let changed = update_value_by_mask(&mut target, &update, ["a.b"]);
/// assert_eq!(changed, 1);
/// assert_eq!(target["a"]["b"], 4);
/// ```
pub fn update_value_by_mask<I>(target: &mut Value, update: &Value, mask: I) -> usize
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let eligible = filter_mask_by_value(filter_mask_by_value(mask, target), update);
    let mut changed = 0;
    'paths: for path in &eligible {
        let segments = split_path(path);
        let Some((last, parents)) = segments.split_last() else {
            continue;
        };
        let mut dst = &mut *target;
        let mut src = update;
        for segment in parents {
            // Guaranteed present after double filtering.
            let Some(next) = dst.get_mut(segment.as_str()) else {
                continue 'paths;
            };
            dst = next;
            let Some(next) = src.get(segment.as_str()) else {
                continue 'paths;
            };
            src = next;
        }
        let (Some(layer), Some(new)) = (dst.as_object_mut(), src.get(last.as_str())) else {
            continue;
        };
        let write = matches!(new, Value::Object(_) | Value::Array(_)) || layer.get(last) != Some(new);
        if write {
            layer.insert(last.clone(), new.clone());
            changed += 1;
        }
    }
    changed
}
