//! # Layer - One Level of the Transaction Stack
//!
//! A layer is a plain mapping from key to [`Entry`]. The bottom of the stack
//! is the base layer, which holds durable state; every open transaction adds
//! one layer on top holding that transaction's deltas.
//!
//! ## Design
//!
//! - Keys are kept in a `BTreeMap`, so iteration and query results come out
//!   in ascending key order
//! - Deletes inside a transaction are tombstones, so rollback can undo them
//!   and older layers stay shadowed
//! - The base layer is hard-deleted from instead and never holds tombstones
//!   once a commit has finished

mod entry;

pub use entry::{Entry, Lookup};

use std::collections::BTreeMap;

use serde::Serialize;

/// A single mapping of keys to values or tombstones.
///
/// # Example
///
/// ```rust
/// use stackdb::layer::{Layer, Lookup};
///
/// let mut layer = Layer::new();
/// layer.set("a", "10");
/// assert_eq!(layer.get("a"), Lookup::Present("10"));
///
/// layer.mark_deleted("a");
/// assert_eq!(layer.get("a"), Lookup::Tombstoned);
/// assert_eq!(layer.get("b"), Lookup::Absent);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Layer {
    entries: BTreeMap<String, Entry>,
}

impl Layer {
    /// Creates a new empty layer.
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Stores a value, replacing any value or tombstone already held for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), Entry::Value(value.into()));
    }

    /// Records a tombstone for the key in this layer.
    ///
    /// Only transaction layers take tombstones.
    pub fn mark_deleted(&mut self, key: impl Into<String>) {
        self.entries.insert(key.into(), Entry::Tombstone);
    }

    /// Removes the key from this layer entirely.
    ///
    /// Returns `true` if the layer held an entry for the key.
    pub fn hard_delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Looks the key up in this layer only.
    pub fn get(&self, key: &str) -> Lookup<'_> {
        self.entries.get(key).map_or(Lookup::Absent, Entry::as_lookup)
    }

    /// Returns the keys whose live value in this layer equals `value`.
    ///
    /// Tombstones never match.
    pub fn find_by_value<'a>(&'a self, value: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(_, entry)| entry.value() == Some(value))
            .map(|(key, _)| key.as_str())
    }

    /// Copies every entry of this layer over the same key in `parent`.
    ///
    /// Tombstones are copied too; the closer layer wins.
    pub fn merge_into(self, parent: &mut Layer) {
        parent.entries.extend(self.entries);
    }

    /// Drops every tombstone from this layer and returns how many were removed.
    pub fn purge_tombstones(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_tombstone());
        before - self.entries.len()
    }

    /// Returns the number of entries, tombstones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the layer holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of tombstones held.
    pub fn tombstone_count(&self) -> usize {
        self.entries.values().filter(|entry| entry.is_tombstone()).count()
    }

    /// Iterates over `(key, entry)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> + '_ {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}
