//! Read path over a stack of layers.
//!
//! The entry for a key in the layer closest to the top is the only one that
//! counts, whether it is a value or a tombstone. Older entries for the same
//! key are shadowed.

use std::collections::{BTreeSet, HashSet};

use crate::layer::{Layer, Lookup};

/// Resolves the effective value of `key`.
///
/// Layers are scanned from the top down and the scan stops at the first layer
/// that mentions the key. A tombstone there means the key is absent, even if
/// an older layer still holds a value.
pub fn resolve<'a>(layers: &'a [Layer], key: &str) -> Option<&'a str> {
    layers
        .iter()
        .rev()
        .map(|layer| layer.get(key))
        .find(Lookup::is_decisive)
        .and_then(Lookup::into_value)
}

/// Returns the keys whose effective value equals `value`, in ascending order.
///
/// Works on a read-only view and builds a fresh result set.
pub fn find<'a>(layers: &'a [Layer], value: &str) -> BTreeSet<&'a str> {
    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut matches = BTreeSet::new();

    for layer in layers.iter().rev() {
        for (key, entry) in layer.iter() {
            // first sighting from the top is the effective entry
            if !seen.insert(key) {
                continue;
            }
            if entry.value() == Some(value) {
                matches.insert(key);
            }
        }
    }

    matches
}

/// Returns the number of keys whose effective value equals `value`.
pub fn count(layers: &[Layer], value: &str) -> usize {
    find(layers, value).len()
}
