//! Index-addressed node storage for the linked structures.
//!
//! The singly and doubly linked lists keep their nodes in a `NodeArena`
//! instead of chaining `Box`es. Nodes are addressed by stable `NodeId`s, so a
//! doubly linked node can hold a non-owning back-reference to its
//! predecessor without creating an ownership cycle. Freed slots go on a free
//! list and are reused by later allocations.

use std::convert::TryFrom;

/// Identifier of a node slot inside a [`NodeArena`].
pub type NodeId = u32;

/// Sentinel id meaning "no node" (null link).
pub const NULL_NODE: NodeId = u32::MAX;

/// Arena allocator with free-list slot reuse.
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    /// Slot storage; `None` marks a freed slot.
    storage: Vec<Option<T>>,
    /// Indices of freed slots available for reuse.
    free_list: Vec<usize>,
}

impl<T> NodeArena<T> {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Allocate a node in the arena and return its id.
    #[inline]
    pub fn allocate(&mut self, node: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            self.storage[free_index] = Some(node);
            free_index
        } else {
            let index = self.storage.len();
            self.storage.push(Some(node));
            index
        };

        NodeId::try_from(index).expect("arena index fits in NodeId")
    }

    /// Deallocate a node, returning its contents.
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = self.checked_index(id)?;
        let node = self.storage[index].take()?;
        self.free_list.push(index);
        Some(node)
    }

    /// Get a reference to a live node.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        let index = self.checked_index(id)?;
        self.storage[index].as_ref()
    }

    /// Get a mutable reference to a live node.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = self.checked_index(id)?;
        self.storage[index].as_mut()
    }

    /// Check whether an id refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.storage.len() - self.free_list.len()
    }

    /// Returns true if the arena holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of freed slots waiting for reuse.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Drop every node and reset the free list.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.free_list.clear();
    }

    /// Resolve an id to a storage index within bounds.
    fn checked_index(&self, id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }
        let index = usize::try_from(id).ok()?;
        if index < self.storage.len() {
            Some(index)
        } else {
            None
        }
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_and_get() {
        let mut arena = NodeArena::new();
        let a = arena.allocate(42);
        let b = arena.allocate(84);

        assert_eq!(arena.get(a), Some(&42));
        assert_eq!(arena.get(b), Some(&84));
        assert!(arena.contains(a));
        assert!(!arena.contains(NULL_NODE));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn deallocate_frees_and_reuses_slots() {
        let mut arena: NodeArena<i32> = NodeArena::new();
        let a = arena.allocate(1);
        let _b = arena.allocate(2);

        assert_eq!(arena.deallocate(a), Some(1));
        assert!(!arena.contains(a));
        assert_eq!(arena.free_count(), 1);

        // The freed slot is handed back out.
        let c = arena.allocate(3);
        assert_eq!(c, a);
        assert_eq!(arena.get(c), Some(&3));
        assert_eq!(arena.free_count(), 0);
    }

    #[test]
    fn deallocate_twice_is_a_noop() {
        let mut arena: NodeArena<i32> = NodeArena::new();
        let a = arena.allocate(1);
        assert_eq!(arena.deallocate(a), Some(1));
        assert_eq!(arena.deallocate(a), None);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut arena = NodeArena::new();
        let a = arena.allocate(10);
        *arena.get_mut(a).unwrap() = 20;
        assert_eq!(arena.get(a), Some(&20));
    }
}
