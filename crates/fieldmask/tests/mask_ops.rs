//! End-to-end tests for the mask operations.
//!
//! Exercises derivation, filtering, projection, masked update, and
//! allow-list intersection together, the way a patch endpoint or a
//! field-exposure policy would chain them.
#![allow(missing_docs)]

use fieldmask::{
    filter_mask_by_mask, filter_mask_by_value, mask, mask_from_value, mask_from_value_with_level,
    update_value_by_mask, value_by_mask, Mask,
};
use serde_json::{json, Value};

fn document() -> Value {
    json!({
        "f": {
            "a": {
                "b": {
                    "c": null,
                    "d": [],
                },
                "x.y": {
                    "z": 1,
                },
            },
            "b": 123,
            "c": "abc",
        }
    })
}

// ============================================================================
// Derivation
// ============================================================================

#[test]
fn test_derive_reaches_every_leaf() {
    let mask = mask_from_value(&document());
    assert_eq!(
        mask.paths(),
        ["f.a.b.c", "f.a.b.d", "f.a.x\\.y.z", "f.b", "f.c"]
    );
}

#[test]
fn test_derive_every_level() {
    let doc = document();
    assert_eq!(mask_from_value_with_level(&doc, 0).paths(), [""]);
    assert_eq!(mask_from_value_with_level(&doc, 1).paths(), ["f"]);
    assert_eq!(
        mask_from_value_with_level(&doc, 2).paths(),
        ["f.a", "f.b", "f.c"]
    );
    assert_eq!(
        mask_from_value_with_level(&doc, 3).paths(),
        ["f.a.b", "f.a.x\\.y", "f.b", "f.c"]
    );
    assert_eq!(mask_from_value_with_level(&doc, 4), mask_from_value(&doc));
    assert_eq!(mask_from_value_with_level(&doc, 5), mask_from_value(&doc));
}

#[test]
fn test_derive_multiple_first_layer_fields() {
    let doc = json!({
        "a": {"b": 1, "c": 2},
        "b": {"c": 3},
        "c": 4,
    });
    assert_eq!(mask_from_value(&doc).paths(), ["a.b", "a.c", "b.c", "c"]);
}

#[test]
fn test_derived_mask_always_filters_clean() {
    // Derivation output resolves by construction, so filtering it is the
    // identity.
    let doc = document();
    let mask = mask_from_value(&doc);
    assert_eq!(filter_mask_by_value(&mask, &doc), mask);
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_filter_is_a_subsequence() {
    let doc = document();
    let filtered = filter_mask_by_value(
        ["f.a.b.c", "f.a.x\\.y", "f.c", "f.not.exist", "f.a.b.not"],
        &doc,
    );
    assert_eq!(filtered.paths(), ["f.a.b.c", "f.a.x\\.y", "f.c"]);
}

#[test]
fn test_filter_never_traverses_opaque_leaves() {
    let doc = document();
    let filtered = filter_mask_by_value(["f.a.b.d.0", "f.b.x", "f.c.0"], &doc);
    assert!(filtered.is_empty());
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn test_projection_contains_exactly_masked_leaves() {
    let doc = document();
    let result = value_by_mask(
        &doc,
        ["f.a.b.c", "f.a.x\\.y", "f.c", "f.not.exist", "f.a.b.not"],
    );
    assert_eq!(
        result,
        json!({
            "f": {
                "a": {
                    "b": {"c": null},
                    "x.y": {"z": 1},
                },
                "c": "abc",
            }
        })
    );
    // The unmasked sibling is absent, not null.
    assert!(result["f"]["a"]["b"].get("d").is_none());
    assert!(result["f"].get("b").is_none());
}

#[test]
fn test_projection_of_derived_mask_reconstructs_document() {
    let doc = document();
    let full = mask_from_value(&doc);
    assert_eq!(value_by_mask(&doc, &full), doc);
}

#[test]
fn test_projection_is_pure() {
    let doc = document();
    let before = doc.clone();
    let _ = value_by_mask(&doc, ["f.a", "f.a.b.c"]);
    assert_eq!(doc, before);
}

// ============================================================================
// Masked update
// ============================================================================

#[test]
fn test_update_with_empty_update_object() {
    let mut target = document();
    assert_eq!(update_value_by_mask(&mut target, &json!({}), ["f.a.b.d"]), 0);
    assert_eq!(target, document());
}

#[test]
fn test_update_with_identical_scalars_changes_nothing() {
    let mut target = document();
    let update = document();
    let changed = update_value_by_mask(
        &mut target,
        &update,
        ["f.a.b.c", "f.b", "f.c", "f.a.x\\.y.z"],
    );
    assert_eq!(changed, 0);
    assert_eq!(target, document());
}

#[test]
fn test_update_counts_every_real_change() {
    let mut target = document();
    let update = json!({
        "f": {
            "a": {
                "b": {"c": 666, "d": []},
                "x.y": {"w": 2},
            },
            "b": 789,
            "c": null,
        }
    });

    let changed = update_value_by_mask(
        &mut target,
        &update,
        ["f.a.b.c", "f.a.b.d", "f.a.x\\.y", "f.b", "f.c"],
    );
    assert_eq!(changed, 5);
    assert_eq!(target["f"]["a"]["b"]["c"], json!(666));
    assert_eq!(target["f"]["a"]["b"]["d"], json!([]));
    assert_eq!(target["f"]["a"]["x.y"], json!({"w": 2}));
    assert!(target["f"]["a"]["x.y"].get("z").is_none());
    assert_eq!(target["f"]["b"], json!(789));
    assert_eq!(target["f"]["c"], json!(null));
}

#[test]
fn test_update_is_idempotent() {
    let mut target = document();
    let update = json!({
        "f": {"b": 789, "c": "xyz"}
    });
    let mask = mask!["f.b", "f.c"];

    assert_eq!(update_value_by_mask(&mut target, &update, &mask), 2);
    // Replaying the same update changes nothing further.
    assert_eq!(update_value_by_mask(&mut target, &update, &mask), 0);
    assert_eq!(target["f"]["b"], json!(789));
    assert_eq!(target["f"]["c"], json!("xyz"));
}

// ============================================================================
// Allow-list intersection
// ============================================================================

#[test]
fn test_intersect_all_paths_allowed() {
    let mask = ["f.a.b.c", "f.x.y.z", "f.1.2.3.4"];
    let filtered = filter_mask_by_mask(mask, ["f.a", "f.x.y", "f.1.2.3.4"]);
    assert_eq!(filtered.paths(), mask);
}

#[test]
fn test_intersect_partial() {
    let filtered = filter_mask_by_mask(
        ["f.a.b.c", "f.x.y.z", "f.1.2.3.4"],
        ["f.a.b.c.d", "f.x.y", "f.1.2.3.4"],
    );
    assert_eq!(filtered.paths(), ["f.x.y.z", "f.1.2.3.4"]);
}

#[test]
fn test_intersect_nothing_allowed() {
    let filtered = filter_mask_by_mask(
        ["f.a.b.c", "f.x.y.z", "f.1.2.3.4"],
        ["f.a.b.c.d", "f.x.y.w", "f.1.2.3.5"],
    );
    assert!(filtered.is_empty());
}

#[test]
fn test_intersect_empty_allow_list() {
    let allowed: [&str; 0] = [];
    assert!(filter_mask_by_mask(["f.a.b.c", "f.x.y.z"], allowed).is_empty());
}

#[test]
fn test_intersect_mask_with_itself() {
    let mask = mask!["f.a.b.c", "f.x.y.z"];
    assert_eq!(filter_mask_by_mask(&mask, &mask), mask);
}

// ============================================================================
// Chained: authorization gate in front of projection and update
// ============================================================================

#[test]
fn test_masked_patch_pipeline() {
    let mut stored = json!({
        "user": {"name": "Alice", "email": "alice@example.com", "role": "admin"},
        "audit": {"last_ip": "10.0.0.1"},
    });
    let patch = json!({
        "user": {"name": "Alicia", "role": "owner"},
        "audit": {"last_ip": "10.9.9.9"},
    });

    // The caller asks for more than it may touch; the allow-list gates it.
    let requested: Mask = mask!["user.name", "user.role", "audit.last_ip"];
    let writable = filter_mask_by_mask(&requested, ["user.name", "user.email"]);
    assert_eq!(writable.paths(), ["user.name"]);

    let changed = update_value_by_mask(&mut stored, &patch, &writable);
    assert_eq!(changed, 1);
    assert_eq!(stored["user"]["name"], "Alicia");
    // Gated fields are untouched.
    assert_eq!(stored["user"]["role"], "admin");
    assert_eq!(stored["audit"]["last_ip"], "10.0.0.1");

    // Exposure control on the way out.
    let visible = value_by_mask(&stored, filter_mask_by_mask(mask_from_value(&stored), ["user"]));
    assert_eq!(
        visible,
        json!({"user": {"name": "Alicia", "email": "alice@example.com", "role": "admin"}})
    );
}
