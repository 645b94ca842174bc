//! This crate exposes an ordered set built as a Binary Search Tree (BST)
//! whose nodes live in a single array instead of individual heap allocations.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). This tree does not
//! rebalance itself, so the height is `O(lg N)` for random insertion order and
//! `O(N)` for sorted input. BSTs also naturally support sorted iteration by visiting
//! the left subtree, then the subtree root, then the right subtree.
//!
//! ## Slots instead of pointers
//!
//! Every `Node` of a [`Tree`] occupies one slot of a growable array and names its
//! parent and children by slot index. Deleting a node frees a slot which the next
//! insertion reuses (see [`FreeSlotPolicy`]), and the array doubles when it runs out
//! of slots without ever moving a node.
//!
//! ```
//! use array_bst::Tree;
//!
//! let mut tree = Tree::with_capacity(4).unwrap();
//! for animal in ["dog", "turtle", "cat", "bird", "ferret", "deer", "zebra", "frog"] {
//!     tree.insert(animal).unwrap();
//! }
//! assert_eq!(tree.len(), 8);
//! assert_eq!(tree.capacity(), 8);
//! assert_eq!(tree.contains(&"ferret"), Ok(true));
//!
//! assert_eq!(tree.remove(&"cat"), Ok(true));
//! assert_eq!(tree.remove(&"dog"), Ok(true));
//! assert_eq!(tree.remove(&"turtle"), Ok(true));
//!
//! // Freed slots are reused before the array grows again.
//! for animal in ["cat", "dog", "turtle"] {
//!     tree.insert(animal).unwrap();
//! }
//! assert_eq!(tree.capacity(), 8);
//! assert_eq!(tree.first(), Some(&"bird"));
//! assert_eq!(tree.last(), Some(&"zebra"));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod config;
mod dump;
mod error;
mod iter;
mod slot;
mod tree;
mod util;


pub use config::{FreeSlotPolicy, TreeConfig, DEFAULT_CAPACITY};
pub use dump::TreeDump;
pub use error::{Error, Result};
pub use iter::{Cursor, Iter};
pub use tree::Tree;
