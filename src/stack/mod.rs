//! # TransactionStack - Nested Transactions over Layers
//!
//! The stack owns a base layer plus one layer per open transaction, oldest
//! first. Writes always land in the top layer; reads resolve across the whole
//! stack.
//!
//! ## Lifecycle
//!
//! - `begin` pushes an empty layer
//! - `rollback` discards the top layer
//! - `commit` folds all transaction layers into the base at once and then
//!   purges tombstones from it

pub mod merge;
pub mod resolver;

pub use merge::CommitStats;

use crate::error::Result;
use crate::layer::Layer;

/// An ordered stack of layers: index 0 is the base, the rest are open
/// transactions in creation order.
///
/// # Example
///
/// ```rust
/// use stackdb::TransactionStack;
///
/// let mut stack = TransactionStack::new();
/// stack.set("a", "10");
///
/// stack.begin();
/// stack.set("a", "20");
/// assert_eq!(stack.get("a"), Some("20"));
///
/// stack.rollback().unwrap();
/// assert_eq!(stack.get("a"), Some("10"));
/// ```
#[derive(Debug, Clone)]
pub struct TransactionStack {
    /// Never empty; `layers[0]` is the base.
    layers: Vec<Layer>,
}

impl Default for TransactionStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStack {
    /// Creates a stack holding only an empty base layer.
    pub fn new() -> Self {
        Self { layers: vec![Layer::new()] }
    }

    /// Returns the number of open transactions.
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// Returns `true` if at least one transaction is open.
    pub fn in_transaction(&self) -> bool {
        self.depth() > 0
    }

    /// Returns every layer, base first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the base layer.
    pub fn base(&self) -> &Layer {
        &self.layers[0]
    }

    fn top_mut(&mut self) -> &mut Layer {
        let top = self.layers.len() - 1;
        &mut self.layers[top]
    }

    /// Opens a new nested transaction.
    pub fn begin(&mut self) {
        self.layers.push(Layer::new());
        log::debug!("Transaction started, depth {}", self.depth());
    }

    /// Writes a value into the top layer.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.top_mut().set(key, value);
    }

    /// Deletes a key.
    ///
    /// Inside a transaction this records a tombstone in the top layer, which
    /// rollback can undo. Outside any transaction the key is removed from the
    /// base for good.
    pub fn unset(&mut self, key: &str) {
        if self.in_transaction() {
            self.top_mut().mark_deleted(key);
        } else {
            self.layers[0].hard_delete(key);
        }
    }

    /// Returns the effective value of `key`, or `None` if it is absent or
    /// deleted by a closer layer.
    pub fn get(&self, key: &str) -> Option<&str> {
        resolver::resolve(&self.layers, key)
    }

    /// Returns the keys whose effective value equals `value`, in ascending
    /// order. Empty when nothing matches.
    pub fn find(&self, value: &str) -> Vec<String> {
        resolver::find(&self.layers, value).into_iter().map(str::to_owned).collect()
    }

    /// Returns how many keys have `value` as their effective value.
    pub fn counts(&self, value: &str) -> usize {
        resolver::count(&self.layers, value)
    }

    /// Commits every open transaction into the base as one batch.
    ///
    /// With no open transaction this is a no-op.
    pub fn commit(&mut self) -> CommitStats {
        let stats = merge::commit(&mut self.layers);
        log::debug!(
            "Committed {} transaction layers, purged {} tombstones",
            stats.merged_layers,
            stats.purged_tombstones
        );
        stats
    }

    /// Discards the innermost transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveTransaction`](crate::Error::NoActiveTransaction)
    /// when no transaction is open. The stack is left unchanged.
    pub fn rollback(&mut self) -> Result<()> {
        let discarded = merge::rollback(&mut self.layers)?;
        log::debug!(
            "Rolled back transaction with {} entries, depth {}",
            discarded.len(),
            self.depth()
        );
        Ok(())
    }
}
