//! Mask filtering: against a document's shape and against an allow-list.

use crate::resolve::resolve_path;
use crate::Mask;
use serde_json::Value;

/// Keep only the paths that fully resolve within `value`.
///
/// The result is an order-preserving subsequence of the input. A path
/// survives when every non-final segment reaches an object owning the
/// key and the final segment is an owned key; its value may be anything,
/// including another object. Never errors.
///
/// # Examples
///
/// ```
/// use fieldmask::filter_mask_by_value;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1, "c": 2}, "d": 3});
/// let mask = filter_mask_by_value(["a.b", "a.c", "a.d", "missing"], &doc);
/// assert_eq!(mask.paths(), ["a.b", "a.c"]);
/// ```
pub fn filter_mask_by_value<I>(mask: I, value: &Value) -> Mask
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    mask.into_iter()
        .filter(|path| resolve_path(value, path.as_ref()).is_some())
        .map(|path| path.as_ref().to_owned())
        .collect()
}

/// Intersect a mask against an allow-list of mask prefixes.
///
/// A path survives when it string-prefix-matches at least one allowed
/// entry. The test is a raw prefix match, not segment-aware: an allowed
/// `"f.a"` also admits `"f.ab"`. An empty allow-list yields an empty
/// result; an empty-string allowed entry admits everything.
///
/// # Examples
///
/// ```
/// use fieldmask::filter_mask_by_mask;
///
/// let mask = filter_mask_by_mask(["a.b", "c.d", "x.y.w"], ["a", "c.d"]);
/// assert_eq!(mask.paths(), ["a.b", "c.d"]);
/// ```
pub fn filter_mask_by_mask<I, A>(mask: I, allowed: A) -> Mask
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    A: IntoIterator,
    A::Item: AsRef<str>,
{
    let allowed: Vec<A::Item> = allowed.into_iter().collect();
    mask.into_iter()
        .filter(|path| {
            allowed
                .iter()
                .any(|prefix| path.as_ref().starts_with(prefix.as_ref()))
        })
        .map(|path| path.as_ref().to_owned())
        .collect()
}
