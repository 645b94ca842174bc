//! The backing array of a [`Tree`][crate::Tree]. Every node lives in a slot of one `Vec` and
//! refers to its parent and children by slot index, so "pointer" surgery is index surgery.
//!
//! ```text
//!   index:    0          1          2          3
//!          ┌────────┐ ┌────────┐ ┌────────┐ ┌────────┐
//!          │ "dog"  │ │"turtle"│ │ vacant │ │ "cat"  │
//!          │ p: nil │ │ p: 0   │ │        │ │ p: 0   │
//!          │ l: 3   │ │ l: nil │ │        │ │ l: nil │
//!          │ r: 1   │ │ r: nil │ │        │ │ r: nil │
//!          └────────┘ └────────┘ └────────┘ └────────┘
//!
//!   free: [2]    used: 4    capacity: 4
//! ```
//!
//! Indices `[0, used)` have been handed out at least once. Each of them is either occupied or
//! vacant; with [`FreeSlotPolicy::Reuse`] every vacant one is also queued in `free`. Growing
//! the array never moves a node so no index needs rewriting.

use std::collections::VecDeque;

use crate::config::FreeSlotPolicy;

/// A slot index, or `None` for the absence of a parent, child or root.
pub(crate) type Link = Option<usize>;

/// An occupied slot.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link,
    pub(crate) right: Link,
    pub(crate) parent: Link,
}

impl<T> Node<T> {
    /// A childless node hanging off `parent`.
    pub(crate) fn new(element: T, parent: Link) -> Self {
        Self {
            element,
            left: None,
            right: None,
            parent,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct SlotStore<T> {
    /// Always exactly `capacity` long.
    slots: Vec<Option<Node<T>>>,
    /// Reclaimed indices, oldest first.
    free: VecDeque<usize>,
    used: usize,
    policy: FreeSlotPolicy,
}

impl<T> SlotStore<T> {
    pub(crate) fn new(capacity: usize, policy: FreeSlotPolicy) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            free: VecDeque::new(),
            used: 0,
            policy,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Reads a slot without requiring it to be occupied.
    ///
    /// # Panics
    ///
    /// If `index` is outside `[0, capacity)`.
    pub(crate) fn get(&self, index: usize) -> Option<&Node<T>> {
        self.slots[index].as_ref()
    }

    /// # Panics
    ///
    /// If `index` is outside `[0, capacity)` or names a vacant slot.
    pub(crate) fn node(&self, index: usize) -> &Node<T> {
        match self.get(index) {
            Some(node) => node,
            None => panic!("slot {} is vacant", index),
        }
    }

    /// # Panics
    ///
    /// If `index` is outside `[0, capacity)` or names a vacant slot.
    pub(crate) fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match self.slots[index].as_mut() {
            Some(node) => node,
            None => panic!("slot {} is vacant", index),
        }
    }

    /// Stores `node` in a slot chosen by the free slot policy, growing the array first if every
    /// slot is taken, and returns the chosen index.
    pub(crate) fn allocate(&mut self, node: Node<T>) -> usize {
        let reused = match self.policy {
            FreeSlotPolicy::Reuse => self.free.pop_front(),
            FreeSlotPolicy::Append => None,
        };
        let index = match reused {
            Some(index) => {
                log::trace!("reusing slot {}", index);
                index
            }
            None => {
                if self.used == self.capacity() {
                    self.grow();
                }
                self.used += 1;
                log::trace!("allocating fresh slot {}", self.used - 1);
                self.used - 1
            }
        };

        debug_assert!(self.slots[index].is_none(), "slot {} handed out twice", index);
        self.slots[index] = Some(node);
        index
    }

    /// Moves the node out of `index`, leaving the slot vacant but not yet reclaimed.
    ///
    /// # Panics
    ///
    /// If the slot is already vacant.
    pub(crate) fn take(&mut self, index: usize) -> Node<T> {
        match self.slots[index].take() {
            Some(node) => node,
            None => panic!("slot {} is vacant", index),
        }
    }

    /// Places `node` into a slot emptied by [`SlotStore::take`].
    pub(crate) fn put(&mut self, index: usize, node: Node<T>) {
        debug_assert!(self.slots[index].is_none(), "slot {} is occupied", index);
        self.slots[index] = Some(node);
    }

    /// Hands a vacant slot back for reuse.
    pub(crate) fn release(&mut self, index: usize) {
        debug_assert!(self.slots[index].is_none(), "releasing occupied slot {}", index);
        match self.policy {
            FreeSlotPolicy::Reuse => {
                log::trace!("queueing slot {} for reuse", index);
                self.free.push_back(index);
            }
            FreeSlotPolicy::Append => log::trace!("abandoning slot {}", index),
        }
    }

    /// Exchanges the elements of two occupied slots, leaving their links untouched.
    pub(crate) fn swap_elements(&mut self, a: usize, b: usize) {
        assert_ne!(a, b, "cannot swap a slot with itself");
        let mut b_node = self.take(b);
        std::mem::swap(&mut self.node_mut(a).element, &mut b_node.element);
        self.put(b, b_node);
    }

    /// Vacates every slot and forgets every reclaimed index. Capacity is kept.
    pub(crate) fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.free.clear();
        self.used = 0;
    }

    /// The queued indices in the order they will be reused.
    pub(crate) fn free_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.free.iter().copied()
    }

    pub(crate) fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Every slot of the backing array, occupied or not.
    pub(crate) fn slots(&self) -> impl Iterator<Item = Option<&Node<T>>> + '_ {
        self.slots.iter().map(Option::as_ref)
    }

    /// Doubles the backing array. Existing slots keep their indices.
    fn grow(&mut self) {
        let new_capacity = self.capacity() * 2;
        log::debug!("growing slot store from {} to {}", self.capacity(), new_capacity);
        self.slots.resize_with(new_capacity, || None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(capacity: usize, policy: FreeSlotPolicy) -> SlotStore<i32> {
        SlotStore::new(capacity, policy)
    }

    #[test]
    fn allocates_in_index_order() {
        let mut slots = store(4, FreeSlotPolicy::Reuse);

        assert_eq!(slots.allocate(Node::new(10, None)), 0);
        assert_eq!(slots.allocate(Node::new(20, Some(0))), 1);
        assert_eq!(slots.node(1).element, 20);
        assert_eq!(slots.node(1).parent, Some(0));
        assert!(slots.get(2).is_none());
    }

    #[test]
    fn grows_by_doubling_when_full() {
        let mut slots = store(2, FreeSlotPolicy::Reuse);
        slots.allocate(Node::new(1, None));
        slots.allocate(Node::new(2, Some(0)));
        assert_eq!(slots.capacity(), 2);

        assert_eq!(slots.allocate(Node::new(3, Some(1))), 2);
        assert_eq!(slots.capacity(), 4);

        // Growth kept everything where it was.
        assert_eq!(slots.node(0).element, 1);
        assert_eq!(slots.node(1).element, 2);
        assert_eq!(slots.node(2).parent, Some(1));
    }

    #[test]
    fn reuse_policy_prefers_reclaimed_slots_oldest_first() {
        let mut slots = store(4, FreeSlotPolicy::Reuse);
        for x in 0..4 {
            slots.allocate(Node::new(x, None));
        }
        slots.take(2);
        slots.release(2);
        slots.take(0);
        slots.release(0);

        assert_eq!(slots.free_slots().collect::<Vec<_>>(), vec![2, 0]);
        assert_eq!(slots.allocate(Node::new(7, None)), 2);
        assert_eq!(slots.allocate(Node::new(8, None)), 0);
        assert_eq!(slots.free_len(), 0);
        assert_eq!(slots.capacity(), 4);
    }

    #[test]
    fn append_policy_ignores_gaps() {
        let mut slots = store(2, FreeSlotPolicy::Append);
        slots.allocate(Node::new(1, None));
        slots.allocate(Node::new(2, None));
        slots.take(0);
        slots.release(0);

        assert_eq!(slots.free_len(), 0);
        assert_eq!(slots.allocate(Node::new(3, None)), 2);
        assert!(slots.get(0).is_none());
        assert_eq!(slots.capacity(), 4);
    }

    #[test]
    fn swap_elements_keeps_links() {
        let mut slots = store(2, FreeSlotPolicy::Reuse);
        slots.allocate(Node::new(1, None));
        slots.allocate(Node::new(2, Some(0)));
        slots.node_mut(0).right = Some(1);

        slots.swap_elements(0, 1);

        assert_eq!(slots.node(0).element, 2);
        assert_eq!(slots.node(0).right, Some(1));
        assert_eq!(slots.node(1).element, 1);
        assert_eq!(slots.node(1).parent, Some(0));
    }

    #[test]
    fn clear_resets_everything_but_capacity() {
        let mut slots = store(1, FreeSlotPolicy::Reuse);
        slots.allocate(Node::new(1, None));
        slots.allocate(Node::new(2, None));
        slots.take(1);
        slots.release(1);

        slots.clear();

        assert_eq!(slots.capacity(), 2);
        assert_eq!(slots.free_len(), 0);
        assert!(slots.slots().all(|slot| slot.is_none()));
        assert_eq!(slots.allocate(Node::new(3, None)), 0);
    }

    #[test]
    #[should_panic(expected = "slot 1 is vacant")]
    fn reading_a_vacant_slot_panics() {
        let slots = store(2, FreeSlotPolicy::Reuse);
        slots.node(1);
    }
}
