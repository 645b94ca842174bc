//! Errors reported by [`Tree`][crate::Tree] and its [`Cursor`][crate::Cursor].

use thiserror::Error;

/// Shorthand for results whose error is this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Every recoverable failure the tree can report. Each of these is raised before any slot is
/// touched, so a failed call leaves the tree exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The element could not be ordered against itself or against an element already stored
    /// (e.g. a floating point `NaN`).
    #[error("element cannot be ordered against the elements of the tree")]
    OrderingViolation,

    /// A tree was requested with room for no slots at all.
    #[error("non-positive capacity: {0}")]
    InvalidCapacity(usize),

    /// The tree was mutated by something other than the cursor since the cursor last
    /// synchronised with it.
    #[error("tree was modified during iteration (expected modification {expected}, found {found})")]
    StructuralConflict {
        /// The modification count the cursor captured.
        expected: usize,
        /// The tree's modification count when the conflict was detected.
        found: usize,
    },

    /// `remove_current` was called without a preceding `advance`, twice in a row, or on a
    /// cursor whose position is stale.
    #[error("no element to remove: advance the cursor first")]
    InvalidIteratorState,

    /// `advance` was called after the last element had been returned.
    #[error("no more elements")]
    Exhausted,
}
