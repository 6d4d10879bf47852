// Transaction Semantics Tests for StackDb
// These tests verify reads, deletes, commit and rollback across nested transactions

use stackdb::{Error, TransactionStack};

/// Test set then get at every depth
#[test]
fn test_set_get_at_any_depth() {
    let mut stack = TransactionStack::new();

    for depth in 0..5 {
        let key = format!("key{}", depth);
        stack.set(key.clone(), depth.to_string());
        assert_eq!(stack.get(&key), Some(depth.to_string().as_str()));
        assert_eq!(stack.depth(), depth);
        stack.begin();
    }
}

/// Test rollback restores the state from before BEGIN
#[test]
fn test_rollback_restores_prior_state() {
    let mut stack = TransactionStack::new();
    stack.set("a", "10");

    let before_a = stack.get("a").map(str::to_owned);
    let before_b = stack.get("b").map(str::to_owned);

    stack.begin();
    stack.set("a", "20");
    stack.set("b", "30");
    stack.rollback().unwrap();

    assert_eq!(stack.get("a").map(str::to_owned), before_a);
    assert_eq!(stack.get("b").map(str::to_owned), before_b);
    assert_eq!(stack.depth(), 0);
}

/// Test nested commit keeps the innermost value
#[test]
fn test_nested_commit_innermost_wins() {
    let mut stack = TransactionStack::new();
    stack.begin();
    stack.set("k", "v1");
    stack.begin();
    stack.set("k", "v2");
    stack.commit();

    assert_eq!(stack.get("k"), Some("v2"));
    assert_eq!(stack.depth(), 0);
}

/// Test unset outside a transaction cannot be undone
#[test]
fn test_unset_without_transaction_is_irreversible() {
    let mut stack = TransactionStack::new();
    stack.set("k", "v");
    stack.unset("k");
    assert_eq!(stack.get("k"), None);

    assert!(matches!(stack.rollback(), Err(Error::NoActiveTransaction)));
    assert_eq!(stack.get("k"), None);

    stack.begin();
    stack.rollback().unwrap();
    assert_eq!(stack.get("k"), None);
}

/// Test unset inside a transaction is undone by rollback
#[test]
fn test_unset_in_transaction_is_reversible() {
    let mut stack = TransactionStack::new();
    stack.set("k", "v");

    stack.begin();
    stack.unset("k");
    assert_eq!(stack.get("k"), None);

    stack.rollback().unwrap();
    assert_eq!(stack.get("k"), Some("v"));
}

/// Test a tombstone hides older values even from deeper transactions
#[test]
fn test_tombstone_shadows_older_layers() {
    let mut stack = TransactionStack::new();
    stack.set("k", "v");

    stack.begin();
    stack.set("k", "w");
    stack.begin();
    stack.unset("k");
    stack.begin();

    // Nothing below the tombstone may leak through
    assert_eq!(stack.get("k"), None);
    assert_eq!(stack.counts("v"), 0);
    assert_eq!(stack.counts("w"), 0);
    assert!(stack.find("w").is_empty());

    stack.rollback().unwrap();
    stack.rollback().unwrap();
    assert_eq!(stack.get("k"), Some("w"));
}

/// Test counts only see effective values
#[test]
fn test_counts_reflect_effective_values() {
    let mut stack = TransactionStack::new();
    stack.set("a", "10");
    stack.set("b", "10");
    assert_eq!(stack.counts("10"), 2);

    stack.unset("a");
    assert_eq!(stack.counts("10"), 1);
}

/// Test counts and find after overwriting inside a transaction
#[test]
fn test_find_after_overwrite_in_transaction() {
    let mut stack = TransactionStack::new();
    stack.set("a", "10");
    stack.set("b", "10");

    stack.begin();
    stack.set("a", "20");

    assert_eq!(stack.find("10"), vec!["b".to_string()]);
    assert_eq!(stack.find("20"), vec!["a".to_string()]);

    stack.commit();
    assert_eq!(stack.find("10"), vec!["b".to_string()]);
    assert_eq!(stack.counts("20"), 1);
}

/// Test the reference scenario against the stack API
#[test]
fn test_reference_scenario() {
    let mut stack = TransactionStack::new();
    stack.set("a", "10");
    stack.set("b", "10");
    assert_eq!(stack.get("a"), Some("10"));
    assert_eq!(stack.counts("10"), 2);

    stack.begin();
    stack.set("a", "20");
    assert_eq!(stack.get("a"), Some("20"));

    stack.begin();
    stack.set("b", "30");
    assert_eq!(stack.counts("10"), 0);

    stack.rollback().unwrap();
    assert_eq!(stack.get("b"), Some("10"));

    stack.commit();
    assert_eq!(stack.get("a"), Some("20"));
    assert_eq!(stack.depth(), 0);
}

/// Test failed rollback leaves every read unchanged
#[test]
fn test_rollback_at_depth_zero_changes_nothing() {
    let mut stack = TransactionStack::new();
    stack.set("a", "10");
    stack.set("b", "10");

    let before = (stack.get("a").map(str::to_owned), stack.counts("10"), stack.find("10"));

    assert!(matches!(stack.rollback(), Err(Error::NoActiveTransaction)));

    let after = (stack.get("a").map(str::to_owned), stack.counts("10"), stack.find("10"));
    assert_eq!(before, after);
    assert_eq!(stack.depth(), 0);
}

/// Test commit with nothing open
#[test]
fn test_commit_without_transaction_is_noop() {
    let mut stack = TransactionStack::new();
    stack.set("a", "10");
    stack.commit();
    stack.commit();

    assert_eq!(stack.get("a"), Some("10"));
    assert_eq!(stack.depth(), 0);
}

/// Test commit leaves no tombstones in the base
#[test]
fn test_commit_purges_tombstones_from_base() {
    let mut stack = TransactionStack::new();
    stack.set("a", "10");
    stack.set("b", "20");

    stack.begin();
    stack.unset("a");
    stack.begin();
    stack.unset("ghost");
    stack.commit();

    assert_eq!(stack.base().tombstone_count(), 0);
    assert_eq!(stack.base().len(), 1);
    assert_eq!(stack.get("a"), None);
    assert_eq!(stack.get("b"), Some("20"));
}

/// Test re-setting a key deleted by an outer transaction
#[test]
fn test_inner_set_after_outer_unset() {
    let mut stack = TransactionStack::new();
    stack.set("a", "10");

    stack.begin();
    stack.unset("a");
    stack.begin();
    stack.set("a", "30");
    assert_eq!(stack.get("a"), Some("30"));

    stack.rollback().unwrap();
    assert_eq!(stack.get("a"), None);

    stack.begin();
    stack.set("a", "40");
    stack.commit();
    assert_eq!(stack.get("a"), Some("40"));
}

/// Test deep nesting
#[test]
fn test_deep_nesting() {
    let mut stack = TransactionStack::new();
    let depth = 1_000;

    for i in 0..depth {
        stack.begin();
        stack.set("k", i.to_string());
    }
    assert_eq!(stack.depth(), depth);
    assert_eq!(stack.get("k"), Some((depth - 1).to_string().as_str()));

    let stats = stack.commit();
    assert_eq!(stats.merged_layers, depth);
    assert_eq!(stack.get("k"), Some((depth - 1).to_string().as_str()));
}
