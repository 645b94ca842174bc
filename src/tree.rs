//! An ordered set stored as a binary search tree inside one growable array. Nodes never move
//! to the heap on their own: parent and child links are slot indices into the array, and
//! deleted slots are queued for reuse by later insertions.
//!
//! # Examples
//!
//! ```
//! use array_bst::Tree;
//!
//! let mut tree = Tree::with_capacity(4).unwrap();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.contains(&"dog"), Ok(false));
//!
//! assert_eq!(tree.insert("dog"), Ok(true));
//! assert_eq!(tree.contains(&"dog"), Ok(true));
//!
//! // Inserting an element that is already present changes nothing.
//! assert_eq!(tree.insert("dog"), Ok(false));
//! assert_eq!(tree.len(), 1);
//!
//! // Taking an element hands it back.
//! assert_eq!(tree.take(&"dog"), Ok(Some("dog")));
//! assert_eq!(tree.remove(&"dog"), Ok(false));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::config::TreeConfig;
use crate::dump::TreeDump;
use crate::error::{Error, Result};
use crate::iter::{Cursor, Iter};
use crate::slot::{Link, Node, SlotStore};
use crate::util::Removal;

/// A Binary Search Tree backed by a single array of slots. It stores each element at most once
/// and does no rebalancing, so inserting sorted input degrades it into a chain.
///
/// Elements only need [`PartialOrd`]. An element that cannot be ordered (a `NaN`, say) is
/// rejected with [`Error::OrderingViolation`] before the tree is touched.
#[derive(Clone)]
pub struct Tree<T> {
    slots: SlotStore<T>,
    root: Link,
    size: usize,
    /// Bumped by every insertion and deletion. Cursors compare against it to notice mutation.
    modifications: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two trees are equal when they hold the same elements, however their slots are laid out.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` with [`DEFAULT_CAPACITY`][crate::DEFAULT_CAPACITY] slots.
    pub fn new() -> Self {
        Self::from_config(TreeConfig::default())
    }

    /// Generates a new, empty `Tree` with room for `capacity` elements before it has to grow.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(TreeConfig::default().with_initial_capacity(capacity))
    }

    /// Generates a new, empty `Tree` from `config`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCapacity`] if `config.initial_capacity` is zero.
    pub fn with_config(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: TreeConfig) -> Self {
        Self {
            slots: SlotStore::new(config.initial_capacity, config.free_slots),
            root: None,
            size: 0,
            modifications: 0,
        }
    }

    /// The number of elements in the tree.
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The number of slots in the backing array.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// The smallest element, if any.
    pub fn first(&self) -> Option<&T> {
        self.first_slot().map(|index| self.element(index))
    }

    /// The largest element, if any.
    pub fn last(&self) -> Option<&T> {
        self.root.map(|root| self.element(self.rightmost(root)))
    }

    /// Iterates over the elements in ascending order. The borrow keeps the tree from changing
    /// underneath the iterator; use [`Tree::cursor`] to remove elements while iterating.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 1, 4, 2, 3] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a cursor positioned before the smallest element. The cursor doesn't borrow the
    /// tree; instead every call is handed the tree, and mutation the cursor didn't perform
    /// itself is reported as [`Error::StructuralConflict`] on the next
    /// [`advance`][Cursor::advance].
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for x in 1..=4 {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// // Remove the even elements while walking the tree.
    /// let mut cursor = tree.cursor();
    /// while cursor.has_next() {
    ///     if cursor.advance(&tree).unwrap() % 2 == 0 {
    ///         cursor.remove_current(&mut tree).unwrap();
    ///     }
    /// }
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    ///
    /// // Mutating the tree behind a cursor's back is detected.
    /// let mut cursor = tree.cursor();
    /// tree.insert(2).unwrap();
    /// assert!(matches!(cursor.advance(&tree), Err(Error::StructuralConflict { .. })));
    /// ```
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self)
    }

    /// Removes every element. Capacity is kept and every slot becomes free.
    pub fn clear(&mut self) {
        if self.size > 0 {
            self.modifications = self.modifications.wrapping_add(1);
        }
        self.slots.clear();
        self.root = None;
        self.size = 0;
    }

    /// A diagnostic view of the backing array. Its `Display` output lists the capacity, size,
    /// free slot queue and the raw content of every slot.
    pub fn dump(&self) -> TreeDump<'_, T> {
        TreeDump::new(self)
    }

    /// Whether `element` is in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::OrderingViolation`] if `element` can't be ordered against itself or a stored
    /// element.
    pub fn contains(&self, element: &T) -> Result<bool>
    where
        T: PartialOrd,
    {
        self.locate(element).map(|found| found.is_some())
    }

    /// Inserts `element`, returning whether the tree changed. An element already present is
    /// left alone and `false` is returned.
    ///
    /// # Errors
    ///
    /// [`Error::OrderingViolation`] if `element` can't be ordered against itself or a stored
    /// element. Nothing is inserted in that case.
    #[doc(alias = "add")]
    pub fn insert(&mut self, element: T) -> Result<bool>
    where
        T: PartialOrd,
    {
        check_comparable(&element)?;

        let mut parent = None;
        let mut current = self.root;
        while let Some(index) = current {
            let node = self.slots.node(index);
            match compare(&element, &node.element)? {
                Ordering::Less => {
                    parent = Some((index, Side::Left));
                    current = node.left;
                }
                Ordering::Equal => return Ok(false),
                Ordering::Greater => {
                    parent = Some((index, Side::Right));
                    current = node.right;
                }
            }
        }

        let index = self
            .slots
            .allocate(Node::new(element, parent.map(|(index, _)| index)));
        match parent {
            None => self.root = Some(index),
            Some((parent, Side::Left)) => self.slots.node_mut(parent).left = Some(index),
            Some((parent, Side::Right)) => self.slots.node_mut(parent).right = Some(index),
        }
        self.size += 1;
        self.modifications = self.modifications.wrapping_add(1);

        #[cfg(test)]
        self.assert_invariants();

        Ok(true)
    }

    /// Removes `element`, returning whether the tree changed.
    ///
    /// # Errors
    ///
    /// [`Error::OrderingViolation`] if `element` can't be ordered against itself or a stored
    /// element. Nothing is removed in that case.
    pub fn remove(&mut self, element: &T) -> Result<bool>
    where
        T: PartialOrd,
    {
        self.take(element).map(|taken| taken.is_some())
    }

    /// Removes `element` and returns the stored copy of it, or `None` if it wasn't present.
    ///
    /// # Errors
    ///
    /// [`Error::OrderingViolation`] if `element` can't be ordered against itself or a stored
    /// element. Nothing is removed in that case.
    pub fn take(&mut self, element: &T) -> Result<Option<T>>
    where
        T: PartialOrd,
    {
        Ok(self
            .locate(element)?
            .map(|index| self.delete_entry(index).element))
    }

    /// Finds the slot holding `element`.
    fn locate(&self, element: &T) -> Result<Link>
    where
        T: PartialOrd,
    {
        check_comparable(element)?;

        let mut current = self.root;
        while let Some(index) = current {
            let node = self.slots.node(index);
            current = match compare(element, &node.element)? {
                Ordering::Less => node.left,
                Ordering::Equal => return Ok(Some(index)),
                Ordering::Greater => node.right,
            };
        }
        Ok(None)
    }

    /// Deletes the element stored at `target`.
    ///
    /// A node with two children swaps elements with its successor (the leftmost node of its
    /// right subtree) and the successor's slot is unlinked instead. The unlinked slot then has
    /// at most one child. If it has one, that child's node is moved into the unlinked slot's
    /// index so every other index stays put, and the child's old slot is the one freed.
    ///
    /// ```text
    ///   delete 50 (slot 0)          swap with successor 60        splice out slot 4
    ///
    ///        [0]50                        [0]60                        [0]60
    ///       /     \                      /     \                      /     \
    ///   [1]30     [2]70              [1]30     [2]70              [1]30     [2]70
    ///            /                            /                            /
    ///        [4]60                        [4]50                        [4]65
    ///            \                            \
    ///            [5]65                        [5]65           slot 5 freed
    /// ```
    pub(crate) fn delete_entry(&mut self, target: usize) -> Removal<T> {
        let node = self.slots.node(target);
        let relocated = node.left.is_some() && node.right.is_some();

        let mut doomed = target;
        if relocated {
            doomed = self
                .successor(Some(target))
                .expect("a node with a right child has a successor");
            self.slots.swap_elements(target, doomed);
        }

        let node = self.slots.take(doomed);
        let freed = match node.left.or(node.right) {
            Some(child) => {
                let mut replacement = self.slots.take(child);
                replacement.parent = node.parent;
                let grandchildren = [replacement.left, replacement.right];
                self.slots.put(doomed, replacement);
                for grandchild in grandchildren.iter().flatten() {
                    self.slots.node_mut(*grandchild).parent = Some(doomed);
                }
                child
            }
            None => {
                match node.parent {
                    None => self.root = None,
                    Some(parent) => {
                        let parent = self.slots.node_mut(parent);
                        if parent.left == Some(doomed) {
                            parent.left = None;
                        } else {
                            parent.right = None;
                        }
                    }
                }
                doomed
            }
        };

        self.slots.release(freed);
        self.size -= 1;
        self.modifications = self.modifications.wrapping_add(1);

        Removal {
            element: node.element,
            freed,
            relocated,
        }
    }

    /// The slot holding the next larger element after `link`, if any.
    pub(crate) fn successor(&self, link: Link) -> Link {
        let index = link?;
        if let Some(right) = self.slots.node(index).right {
            return Some(self.leftmost(right));
        }

        // Climb while we're a right child. The first ancestor reached from its left is next.
        let mut child = index;
        let mut parent = self.slots.node(index).parent;
        while let Some(p) = parent {
            let node = self.slots.node(p);
            if node.right != Some(child) {
                break;
            }
            child = p;
            parent = node.parent;
        }
        parent
    }

    /// The slot holding the smallest element.
    pub(crate) fn first_slot(&self) -> Link {
        self.root.map(|root| self.leftmost(root))
    }

    pub(crate) fn element(&self, index: usize) -> &T {
        &self.slots.node(index).element
    }

    pub(crate) fn modifications(&self) -> usize {
        self.modifications
    }

    pub(crate) fn root(&self) -> Link {
        self.root
    }

    pub(crate) fn slots(&self) -> &SlotStore<T> {
        &self.slots
    }

    fn leftmost(&self, mut index: usize) -> usize {
        while let Some(left) = self.slots.node(index).left {
            index = left;
        }
        index
    }

    fn rightmost(&self, mut index: usize) -> usize {
        while let Some(right) = self.slots.node(index).right {
            index = right;
        }
        index
    }
}

#[cfg(test)]
impl<T> Tree<T>
where
    T: PartialOrd,
{
    /// Walks the whole tree checking ordering, link symmetry and slot bookkeeping.
    pub(crate) fn assert_invariants(&self) {
        let mut reachable = vec![false; self.capacity()];
        let mut visited = 0;

        if let Some(root) = self.root {
            assert_eq!(self.slots.node(root).parent, None, "root has a parent");
        }

        // (slot, exclusive lower bound, exclusive upper bound)
        let mut stack: Vec<(usize, Option<&T>, Option<&T>)> =
            self.root.into_iter().map(|root| (root, None, None)).collect();
        while let Some((index, lower, upper)) = stack.pop() {
            assert!(!reachable[index], "slot {} reachable twice", index);
            reachable[index] = true;
            visited += 1;

            let node = self.slots.node(index);
            if let Some(lower) = lower {
                assert!(node.element > *lower, "slot {} is out of order", index);
            }
            if let Some(upper) = upper {
                assert!(node.element < *upper, "slot {} is out of order", index);
            }
            for child in [node.left, node.right].iter().flatten() {
                assert_eq!(
                    self.slots.node(*child).parent,
                    Some(index),
                    "slot {} has a stale parent link",
                    child
                );
            }
            if let Some(left) = node.left {
                stack.push((left, lower, Some(&node.element)));
            }
            if let Some(right) = node.right {
                stack.push((right, Some(&node.element), upper));
            }
        }

        assert_eq!(visited, self.size, "size disagrees with reachable slots");
        let occupied = self.slots.slots().filter(|slot| slot.is_some()).count();
        assert_eq!(occupied, self.size, "size disagrees with occupied slots");

        let mut queued = vec![false; self.capacity()];
        for index in self.slots.free_slots() {
            assert!(!queued[index], "slot {} queued twice", index);
            queued[index] = true;
            assert!(self.slots.get(index).is_none(), "free slot {} is occupied", index);
            assert!(!reachable[index], "free slot {} is reachable", index);
        }
    }
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

fn compare<T>(a: &T, b: &T) -> Result<Ordering>
where
    T: PartialOrd,
{
    a.partial_cmp(b).ok_or(Error::OrderingViolation)
}

/// Rejects elements that aren't equal to themselves, which no stored element could be ordered
/// against consistently.
fn check_comparable<T>(element: &T) -> Result<()>
where
    T: PartialOrd,
{
    match element.partial_cmp(element) {
        Some(Ordering::Equal) => Ok(()),
        _ => Err(Error::OrderingViolation),
    }
}
