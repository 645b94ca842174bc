//! In-order traversal. Both traversals advance with the tree's successor walk, so a step costs
//! `O(height)` in the worst case and constant time on average.

use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::slot::Link;
use crate::Tree;

/// A borrowing, ascending iterator over a [`Tree`]. Created by [`Tree::iter`].
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    next: Link,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Self {
            tree,
            next: tree.first_slot(),
            remaining: tree.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.successor(self.next);
        self.remaining -= 1;
        Some(self.tree.element(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An ascending cursor over a [`Tree`] that can remove the element it just returned. Created by
/// [`Tree::cursor`].
///
/// A cursor holds slot indices rather than a borrow, so the tree stays usable while the cursor
/// is alive. It remembers the tree's modification count instead: once anything other than
/// [`Cursor::remove_current`] inserts or deletes, [`Cursor::advance`] fails with
/// [`Error::StructuralConflict`].
///
/// A cursor must only be used with the tree that created it.
#[derive(Debug, Clone)]
pub struct Cursor {
    next: Link,
    last_returned: Link,
    expected_modifications: usize,
}

impl Cursor {
    pub(crate) fn new<T>(tree: &Tree<T>) -> Self {
        Self {
            next: tree.first_slot(),
            last_returned: None,
            expected_modifications: tree.modifications(),
        }
    }

    /// Whether another call to [`Cursor::advance`] would yield an element.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns the element the cursor is positioned at and moves past it.
    ///
    /// # Errors
    ///
    /// - [`Error::StructuralConflict`] if `tree` was modified by anything but this cursor
    ///   since the cursor was created.
    /// - [`Error::Exhausted`] if every element has already been returned.
    ///
    /// # Panics
    ///
    /// If `tree` is not the tree that created this cursor and the cursor's position names a
    /// slot that tree doesn't have or doesn't occupy.
    pub fn advance<'a, T>(&mut self, tree: &'a Tree<T>) -> Result<&'a T> {
        if tree.modifications() != self.expected_modifications {
            log::debug!(
                "cursor expected modification {} but tree is at {}",
                self.expected_modifications,
                tree.modifications()
            );
            return Err(Error::StructuralConflict {
                expected: self.expected_modifications,
                found: tree.modifications(),
            });
        }
        let current = self.next.ok_or(Error::Exhausted)?;

        self.last_returned = Some(current);
        self.next = tree.successor(self.next);
        Ok(tree.element(current))
    }

    /// Removes the element returned by the latest [`Cursor::advance`] and returns it. The
    /// cursor stays valid: the following `advance` yields the next larger element.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIteratorState`] if `advance` hasn't returned an element since the cursor
    /// was created or since the previous removal, or if `tree` was modified by anything but
    /// this cursor in the meantime (the remembered slot may no longer hold that element).
    ///
    /// # Panics
    ///
    /// If `tree` is not the tree that created this cursor and the remembered slot is one that
    /// tree doesn't have or doesn't occupy.
    pub fn remove_current<T>(&mut self, tree: &mut Tree<T>) -> Result<T> {
        let last = self.last_returned.ok_or(Error::InvalidIteratorState)?;
        if tree.modifications() != self.expected_modifications {
            return Err(Error::InvalidIteratorState);
        }

        let removal = tree.delete_entry(last);
        // The slot we just returned from now holds either its successor's element (two
        // children) or its only child's node. Either way, if that is where `next` was, the
        // cursor has to step back into the slot it just returned from.
        if removal.relocated || self.next == Some(removal.freed) {
            self.next = Some(last);
        }
        self.last_returned = None;
        self.expected_modifications = tree.modifications();

        Ok(removal.element)
    }
}
