//! # StackDb - An In-Memory Key-Value Store with Nested Transactions
//!
//! StackDb maps string keys to string values entirely in memory. Writes can
//! be grouped into transactions, transactions can be nested to any depth, and
//! each level can be rolled back on its own or all of them committed at once.
//!
//! ## Architecture
//!
//! - **Layer**: one mapping of keys to values or tombstones
//! - **TransactionStack**: the base layer plus one layer per open transaction
//! - **Resolver**: finds the effective value of a key, or the keys holding a
//!   value, with closer layers shadowing older ones
//! - **Commit / Rollback**: fold all transaction layers into the base, or drop
//!   the innermost one
//! - **Session / Shell**: the text front end that parses command lines and
//!   prints results
//!
//! ## Example Usage
//!
//! ```rust
//! use stackdb::TransactionStack;
//!
//! let mut stack = TransactionStack::new();
//! stack.set("a", "10");
//! stack.set("b", "10");
//! assert_eq!(stack.counts("10"), 2);
//!
//! stack.begin();
//! stack.unset("a");
//! assert_eq!(stack.get("a"), None);
//! assert_eq!(stack.counts("10"), 1);
//!
//! stack.rollback().unwrap();
//! assert_eq!(stack.get("a"), Some("10"));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Module declarations
pub mod command;
pub mod config;
pub mod error;
pub mod layer;
pub mod session;
pub mod shell;
pub mod stack;

// Re-exports
pub use command::Command;
pub use config::Options;
pub use error::{Error, Result};
pub use layer::{Entry, Layer, Lookup};
pub use session::{Reply, Session};
pub use stack::{CommitStats, TransactionStack};
