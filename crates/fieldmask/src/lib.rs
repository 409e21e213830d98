//! Field-mask algebra over nested JSON values.
//!
//! `fieldmask` derives, filters, and applies *field masks*: ordered lists of
//! dotted path strings (`"user.address.city"`) naming fields inside a
//! `serde_json::Value` document. It is the path logic behind partial-update
//! endpoints and field-level exposure policies, factored out so callers do
//! not re-derive it.
//!
//! # Core Concepts
//!
//! - **Path**: a dot-delimited string addressing one location in a document.
//!   A literal dot inside a key is escaped as `\.`.
//! - **Mask**: an ordered list of paths ([`Mask`]) describing a set of fields.
//! - **Opaque leaf**: anything that is not a plain object — arrays,
//!   primitives, and null are never traversed into.
//! - **Level**: an optional depth bound for mask derivation.
//!
//! All operations are synchronous, total, and silently lenient: paths that
//! do not resolve are dropped, never reported. The one strict entry point is
//! [`require_path`], which explains why a single path failed to resolve.
//!
//! # Quick Start
//!
//! ```
//! use fieldmask::{mask_from_value, update_value_by_mask, value_by_mask};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "user": {"name": "Alice", "email": "alice@example.com"},
//!     "internal": {"token": "s3cret"},
//! });
//!
//! // Flatten a document into the paths that reach its leaves.
//! let mask = mask_from_value(&doc);
//! assert_eq!(
//!     mask.paths(),
//!     ["user.name", "user.email", "internal.token"]
//! );
//!
//! // Project a document down to selected fields.
//! let public = value_by_mask(&doc, ["user.name", "user.email"]);
//! assert_eq!(
//!     public,
//!     json!({"user": {"name": "Alice", "email": "alice@example.com"}})
//! );
//!
//! // Apply a partial update, counting fields that actually changed.
//! let mut target = doc.clone();
//! let update = json!({"user": {"name": "Alice", "email": "a@example.com"}});
//! let changed = update_value_by_mask(&mut target, &update, ["user.name", "user.email"]);
//! assert_eq!(changed, 1);
//! assert_eq!(target["user"]["email"], "a@example.com");
//! ```
//!
//! # Gating a mask before projection
//!
//! [`filter_mask_by_mask`] intersects a requested mask against an allow-list
//! of prefixes, which is the shape of a field-level access check:
//!
//! ```
//! use fieldmask::{filter_mask_by_mask, value_by_mask};
//! use serde_json::json;
//!
//! let doc = json!({"user": {"name": "Alice"}, "audit": {"ip": "10.0.0.1"}});
//! let requested = ["user.name", "audit.ip"];
//!
//! let allowed = filter_mask_by_mask(requested, ["user"]);
//! assert_eq!(allowed.paths(), ["user.name"]);
//!
//! let visible = value_by_mask(&doc, &allowed);
//! assert_eq!(visible, json!({"user": {"name": "Alice"}}));
//! ```

#![warn(missing_docs)]

mod derive;
mod error;
mod filter;
mod mask;
mod merge;
mod path;
mod project;
mod resolve;

pub use derive::{mask_from_value, mask_from_value_with_level};
pub use error::{value_type_name, MaskError, MaskResult};
pub use filter::{filter_mask_by_mask, filter_mask_by_value};
pub use mask::Mask;
pub use merge::update_value_by_mask;
pub use path::{escape_key, join_segment, split_path};
pub use project::value_by_mask;
pub use resolve::{require_path, resolve_path, resolve_path_mut};

// Re-export serde_json::Value for convenience
pub use serde_json::Value;
