//! Exact-match categorical replacements.

use std::collections::BTreeMap;

use insurance_model::Cell;

/// Replace a text value found as a key in `mapping`.
///
/// Matching is exact and case-sensitive. Values that are not text, or that
/// are not keys, are returned unchanged; a mapped value is never mapped a
/// second time.
pub fn replace_exact(value: &Cell, mapping: &BTreeMap<String, String>) -> Cell {
    value
        .as_str()
        .and_then(|text| mapping.get(text))
        .map_or_else(|| value.clone(), |standard| Cell::from(standard.as_str()))
}

/// Fold any of `classes` into `label`.
pub fn combine_vehicle_class(value: &Cell, classes: &[String], label: &str) -> Cell {
    match value.as_str() {
        Some(text) if classes.iter().any(|class| class == text) => Cell::from(label),
        _ => value.clone(),
    }
}
