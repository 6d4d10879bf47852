//! Commit and rollback: the two operations that change the stack's shape.

use crate::error::{Error, Result};
use crate::layer::Layer;

/// Statistics about a finished commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitStats {
    /// Number of transaction layers folded into the base.
    pub merged_layers: usize,

    /// Number of tombstones removed from the base afterwards.
    pub purged_tombstones: usize,
}

/// Folds every transaction layer down into the base layer.
///
/// The top layer is popped and merged into the one below it until only the
/// base is left, then the base is purged of tombstones. With no open
/// transaction this changes nothing.
pub fn commit(layers: &mut Vec<Layer>) -> CommitStats {
    let mut stats = CommitStats::default();

    while layers.len() > 1 {
        let Some(top) = layers.pop() else { break };
        let Some(parent) = layers.last_mut() else { break };
        top.merge_into(parent);
        stats.merged_layers += 1;
    }

    if let Some(base) = layers.first_mut() {
        stats.purged_tombstones = base.purge_tombstones();
    }

    stats
}

/// Discards the top transaction layer and returns it.
///
/// Fails with [`Error::NoActiveTransaction`] when only the base is left; the
/// stack is not touched in that case.
pub fn rollback(layers: &mut Vec<Layer>) -> Result<Layer> {
    let top = layers.len().saturating_sub(1);
    if top == 0 {
        return Err(Error::NoActiveTransaction);
    }
    Ok(layers.remove(top))
}
