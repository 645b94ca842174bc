//! Shared helpers for the integration tests.

#![allow(dead_code)]

use array_bst::Tree;

/// Installs a `log` backend for the tests. Set `RUST_LOG=array_bst=trace` to see slot
/// allocation and growth. Safe to call from every test.
pub fn init_logging() {
    let _ = pretty_env_logger::try_init();
}

/// A tree with a small backing array so growth happens early.
pub fn tree_of<T>(xs: &[T]) -> Tree<T>
where
    T: PartialOrd + Clone,
{
    let mut tree = Tree::with_capacity(2).expect("2 is a valid capacity");
    for x in xs {
        tree.insert(x.clone()).expect("test elements are ordered");
    }
    tree
}

/// Every element of `tree`, smallest first.
pub fn elements<T>(tree: &Tree<T>) -> Vec<T>
where
    T: Clone,
{
    tree.iter().cloned().collect()
}
