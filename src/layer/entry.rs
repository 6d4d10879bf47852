//! # Layer Entries
//!
//! A layer maps each key it mentions to an [`Entry`]: either a live value or
//! a tombstone. Reads against a single layer return a [`Lookup`], which keeps
//! "never touched here" apart from "deleted here".

use serde::Serialize;

/// The entry a layer holds for a key.
///
/// Tombstones serialize as `null` so the diagnostic dump shows deletions
/// next to live values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    /// A live value.
    Value(String),

    /// The key was deleted within this layer.
    Tombstone,
}

impl Entry {
    /// Returns `true` if this entry is a tombstone.
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Entry::Tombstone)
    }

    /// Returns the value if this entry is live.
    pub fn value(&self) -> Option<&str> {
        match self {
            Entry::Value(value) => Some(value),
            Entry::Tombstone => None,
        }
    }

    /// Borrows this entry as a lookup result.
    pub fn as_lookup(&self) -> Lookup<'_> {
        match self {
            Entry::Value(value) => Lookup::Present(value),
            Entry::Tombstone => Lookup::Tombstoned,
        }
    }
}

/// Result of looking a key up in one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The layer has no entry for the key.
    Absent,

    /// The layer holds a tombstone for the key.
    Tombstoned,

    /// The layer holds a live value for the key.
    Present(&'a str),
}

impl<'a> Lookup<'a> {
    /// Returns `true` if the layer mentions the key at all.
    ///
    /// A tombstone counts: it shadows anything older.
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Lookup::Absent)
    }

    /// Collapses the lookup to the visible value.
    pub fn into_value(self) -> Option<&'a str> {
        match self {
            Lookup::Present(value) => Some(value),
            Lookup::Absent | Lookup::Tombstoned => None,
        }
    }
}
