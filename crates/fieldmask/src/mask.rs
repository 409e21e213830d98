//! Ordered field masks.
//!
//! A [`Mask`] is an ordered list of dotted path strings naming a set of
//! fields in a document. Order matters for derivation output determinism;
//! filtering treats the mask as a set but preserves the order of survivors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered list of dotted path strings describing a set of fields.
///
/// Masks serialize as plain JSON arrays of strings, matching the wire
/// format expected by API contracts that exchange field masks.
///
/// # Examples
///
/// ```
/// use fieldmask::mask;
///
/// let m = mask!["user.name", "user.address.city"];
/// assert_eq!(m.len(), 2);
/// assert_eq!(m[0], "user.name");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mask(Vec<String>);

impl Mask {
    /// Create an empty mask.
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a mask from an iterator of path strings.
    #[inline]
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(paths.into_iter().map(Into::into).collect())
    }

    /// Get the paths of this mask.
    #[inline]
    pub fn paths(&self) -> &[String] {
        &self.0
    }

    /// Consume the mask and return the inner vector.
    #[inline]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Check if this mask names no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of paths in this mask.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Append a path to the mask.
    #[inline]
    pub fn push(&mut self, path: impl Into<String>) {
        self.0.push(path.into());
    }

    /// Check whether the mask contains the exact path.
    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        self.0.iter().any(|p| p == path)
    }

    /// Iterate over the paths.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

impl std::ops::Deref for Mask {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Mask {
    fn from(paths: Vec<String>) -> Self {
        Self(paths)
    }
}

impl FromIterator<String> for Mask {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<String> for Mask {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Mask {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mask {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Construct a [`Mask`] from a sequence of path strings.
///
/// # Examples
///
/// ```
/// use fieldmask::mask;
///
/// let m = mask!["user.name", "user.email"];
/// assert_eq!(m.paths(), ["user.name", "user.email"]);
///
/// let empty = mask![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! mask {
    () => {
        $crate::Mask::new()
    };
    ($($path:expr),+ $(,)?) => {
        $crate::Mask::from_paths([$($path),+])
    };
}
