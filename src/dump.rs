//! A raw, slot-by-slot rendering of a [`Tree`]'s backing array for debugging and tests.

use std::fmt;

use crate::slot::Link;
use crate::Tree;

/// Displays the internals of a [`Tree`]. Created by [`Tree::dump`].
///
/// # Examples
///
/// ```
/// use array_bst::Tree;
///
/// let mut tree = Tree::with_capacity(2).unwrap();
/// tree.insert("dog").unwrap();
/// tree.insert("cat").unwrap();
///
/// assert_eq!(
///     tree.dump().to_string(),
///     "capacity = 2, size = 2, root = 0, free slots = 0\n\
///      free = []\n\
///      [0] element=\"dog\" parent=nil left=1 right=nil\n\
///      [1] element=\"cat\" parent=0 left=nil right=nil\n"
/// );
/// ```
pub struct TreeDump<'a, T> {
    tree: &'a Tree<T>,
}

impl<'a, T> TreeDump<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Self { tree }
    }
}

struct Index(Link);

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(f, "{}", index),
            None => f.write_str("nil"),
        }
    }
}

impl<T> fmt::Display for TreeDump<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.tree.slots();
        writeln!(
            f,
            "capacity = {}, size = {}, root = {}, free slots = {}",
            self.tree.capacity(),
            self.tree.len(),
            Index(self.tree.root()),
            slots.free_len()
        )?;
        writeln!(f, "free = {:?}", slots.free_slots().collect::<Vec<_>>())?;
        for (index, slot) in slots.slots().enumerate() {
            match slot {
                Some(node) => writeln!(
                    f,
                    "[{}] element={:?} parent={} left={} right={}",
                    index,
                    node.element,
                    Index(node.parent),
                    Index(node.left),
                    Index(node.right)
                )?,
                None => writeln!(f, "[{}] empty", index)?,
            }
        }
        Ok(())
    }
}
