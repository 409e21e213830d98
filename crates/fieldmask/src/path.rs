//! Dotted-path codec: escaping and splitting of path strings.
//!
//! A path addresses one location in a nested JSON document as a sequence of
//! key segments joined with `.`. A literal dot inside a key is written as
//! `\.` (the key `x.y` under `f.a` becomes `f.a.x\.y`).
//!
//! Parsing strips *all* backslashes from a segment, not just escape markers,
//! so a literal backslash in a key does not round-trip. This lossy unescape
//! is part of the wire format and is preserved exactly.

/// Escape every delimiter occurrence in a raw key.
///
/// No other characters are escaped.
///
/// # Examples
///
/// ```
/// use fieldmask::escape_key;
///
/// assert_eq!(escape_key("name"), "name");
/// assert_eq!(escape_key("x.y"), "x\\.y");
/// ```
pub fn escape_key(key: &str) -> String {
    key.replace('.', "\\.")
}

/// Split a path string into raw key segments.
///
/// The path is split on every dot that is not immediately preceded by a
/// backslash, then all backslashes are removed from each segment. Total
/// over any input; an empty path yields a single empty segment.
///
/// # Examples
///
/// ```
/// use fieldmask::split_path;
///
/// assert_eq!(split_path("f.a.b"), ["f", "a", "b"]);
/// assert_eq!(split_path("f.x\\.y.z"), ["f", "x.y", "z"]);
/// ```
pub fn split_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut escaped = false;
    for ch in path.chars() {
        match ch {
            '.' if !escaped => segments.push(std::mem::take(&mut current)),
            // Backslashes are dropped whether or not they escape anything.
            '\\' => escaped = true,
            _ => {
                current.push(ch);
                escaped = false;
            }
        }
    }
    segments.push(current);
    segments
}

/// Join a path prefix with an escaped key segment.
///
/// Returns just the escaped key when the prefix is empty.
pub fn join_segment(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        escape_key(key)
    } else {
        format!("{prefix}.{}", escape_key(key))
    }
}
