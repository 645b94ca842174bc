//! Construction-time settings for a [`Tree`][crate::Tree].

use crate::error::{Error, Result};

/// Number of slots a [`Tree`][crate::Tree] starts with when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 16;

/// How insertion picks a slot once deletions have left gaps in the backing array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeSlotPolicy {
    /// Reclaimed indices are queued and handed out (oldest first) before any fresh index.
    Reuse,
    /// Always take a fresh index at the end of the used region. Vacated cells stay empty until
    /// the tree is cleared.
    Append,
}

impl Default for FreeSlotPolicy {
    fn default() -> Self {
        Self::Reuse
    }
}

/// Settings used by [`Tree::with_config`][crate::Tree::with_config].
///
/// # Examples
///
/// ```
/// use array_bst::{FreeSlotPolicy, Tree, TreeConfig};
///
/// let config = TreeConfig::default()
///     .with_initial_capacity(4)
///     .with_free_slot_policy(FreeSlotPolicy::Append);
///
/// let tree: Tree<i32> = Tree::with_config(config).unwrap();
/// assert_eq!(tree.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Number of slots allocated up front. Must be at least 1.
    pub initial_capacity: usize,
    /// Slot selection strategy for insertions.
    pub free_slots: FreeSlotPolicy,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            free_slots: FreeSlotPolicy::default(),
        }
    }
}

impl TreeConfig {
    /// Returns this config with the given initial capacity.
    pub fn with_initial_capacity(self, initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..self
        }
    }

    /// Returns this config with the given free slot policy.
    pub fn with_free_slot_policy(self, free_slots: FreeSlotPolicy) -> Self {
        Self { free_slots, ..self }
    }

    /// Checks that a tree can be built from this config.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::InvalidCapacity(self.initial_capacity));
        }
        Ok(())
    }
}
