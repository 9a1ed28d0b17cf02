//! Doubly linked list with bidirectional traversal.
//!
//! Nodes live in a [`NodeArena`]; `next` is the owning direction of the
//! chain and `prev` is a plain back-reference id, so no ownership cycle
//! exists. Indexed access walks from whichever end is closer to the target,
//! which halves the constant of the O(n) walk.

use crate::arena::{NodeArena, NodeId, NULL_NODE};
use crate::error::{DsaError, DsaResult};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: NodeId,
    next: NodeId,
}

/// Doubly linked sequential container.
///
/// # Examples
///
/// ```
/// use dsakit::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.push_back("b");
/// list.push_back("c");
/// list.push_front("a");
///
/// assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
/// assert_eq!(list.pop_back(), Some("c"));
/// ```
#[derive(Debug, Clone)]
pub struct DoublyLinkedList<T> {
    arena: NodeArena<Node<T>>,
    head: NodeId,
    tail: NodeId,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: NULL_NODE,
            tail: NULL_NODE,
            len: 0,
        }
    }

    // ========================================================================
    // PUSH / POP
    // ========================================================================

    /// Append a value at the tail. Returns the new length.
    pub fn push_back(&mut self, value: T) -> usize {
        let id = self.arena.allocate(Node {
            value,
            prev: self.tail,
            next: NULL_NODE,
        });
        if self.head == NULL_NODE {
            self.head = id;
        } else if let Some(tail) = self.arena.get_mut(self.tail) {
            tail.next = id;
        }
        self.tail = id;
        self.len += 1;
        self.len
    }

    /// Prepend a value at the head. Returns the new length.
    pub fn push_front(&mut self, value: T) -> usize {
        let id = self.arena.allocate(Node {
            value,
            prev: NULL_NODE,
            next: self.head,
        });
        if self.tail == NULL_NODE {
            self.tail = id;
        } else if let Some(head) = self.arena.get_mut(self.head) {
            head.prev = id;
        }
        self.head = id;
        self.len += 1;
        self.len
    }

    /// Remove and return the tail value, or `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let node = self.arena.deallocate(self.tail)?;
        self.tail = node.prev;
        if self.tail == NULL_NODE {
            self.head = NULL_NODE;
        } else if let Some(tail) = self.arena.get_mut(self.tail) {
            tail.next = NULL_NODE;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Remove and return the head value, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.arena.deallocate(self.head)?;
        self.head = node.next;
        if self.head == NULL_NODE {
            self.tail = NULL_NODE;
        } else if let Some(head) = self.arena.get_mut(self.head) {
            head.prev = NULL_NODE;
        }
        self.len -= 1;
        Some(node.value)
    }

    // ========================================================================
    // INDEXED ACCESS
    // ========================================================================

    /// Get a reference to the value at `index`, or `None` if out of range.
    ///
    /// Walks from the head when `index` falls in the first half of the list
    /// and from the tail otherwise.
    pub fn get(&self, index: usize) -> Option<&T> {
        let id = self.node_at(index)?;
        self.arena.get(id).map(|n| &n.value)
    }

    /// Get a mutable reference to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let id = self.node_at(index)?;
        self.arena.get_mut(id).map(|n| &mut n.value)
    }

    /// Overwrite the value at `index`.
    pub fn set(&mut self, index: usize, value: T) -> DsaResult<()> {
        match self.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(DsaError::index_out_of_range(index, self.len)),
        }
    }

    /// Insert a value before `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> DsaResult<()> {
        if index > self.len {
            return Err(DsaError::index_out_of_range(index, self.len));
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }

        let after = self
            .node_at(index)
            .ok_or(DsaError::index_out_of_range(index, self.len))?;
        let before = self.arena.get(after).map(|n| n.prev).unwrap_or(NULL_NODE);
        let id = self.arena.allocate(Node {
            value,
            prev: before,
            next: after,
        });
        if let Some(node) = self.arena.get_mut(before) {
            node.next = id;
        }
        if let Some(node) = self.arena.get_mut(after) {
            node.prev = id;
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the value at `index`.
    pub fn remove(&mut self, index: usize) -> DsaResult<T> {
        if index >= self.len {
            return Err(DsaError::index_out_of_range(index, self.len));
        }
        if index == 0 {
            return self.pop_front().ok_or(DsaError::EmptyCollection);
        }
        if index == self.len - 1 {
            return self.pop_back().ok_or(DsaError::EmptyCollection);
        }

        let target = self
            .node_at(index)
            .ok_or(DsaError::index_out_of_range(index, self.len))?;
        let node = self
            .arena
            .deallocate(target)
            .ok_or(DsaError::index_out_of_range(index, self.len))?;
        if let Some(before) = self.arena.get_mut(node.prev) {
            before.next = node.next;
        }
        if let Some(after) = self.arena.get_mut(node.next) {
            after.prev = node.prev;
        }
        self.len -= 1;
        Ok(node.value)
    }

    // ========================================================================
    // WHOLE-LIST OPERATIONS
    // ========================================================================

    /// Reverse the list in place.
    ///
    /// Every node's `prev`/`next` pair is swapped, then head and tail trade
    /// places.
    pub fn reverse(&mut self) {
        let mut current = self.head;
        while current != NULL_NODE {
            let next = match self.arena.get_mut(current) {
                Some(node) => {
                    std::mem::swap(&mut node.prev, &mut node.next);
                    // After the swap the old `next` sits in `prev`.
                    node.prev
                }
                None => break,
            };
            current = next;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Iterate over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NULL_NODE;
        self.tail = NULL_NODE;
        self.len = 0;
    }

    /// Verify that every adjacent pair of nodes agrees on its links.
    ///
    /// Used by the randomized tests to check structural consistency after
    /// each mutation.
    pub fn check_link_symmetry(&self) -> bool {
        let mut count = 0;
        let mut prev = NULL_NODE;
        let mut current = self.head;
        while current != NULL_NODE {
            let node = match self.arena.get(current) {
                Some(node) => node,
                None => return false,
            };
            if node.prev != prev {
                return false;
            }
            if node.next != NULL_NODE {
                match self.arena.get(node.next) {
                    Some(successor) if successor.prev == current => {}
                    _ => return false,
                }
            }
            count += 1;
            prev = current;
            current = node.next;
        }
        count == self.len && prev == self.tail
    }

    /// Walk to the node at `index` from the nearer end.
    fn node_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }
        if index <= self.len / 2 {
            let mut current = self.head;
            for _ in 0..index {
                current = self.arena.get(current)?.next;
            }
            Some(current)
        } else {
            let mut current = self.tail;
            for _ in 0..(self.len - 1 - index) {
                current = self.arena.get(current)?.prev;
            }
            Some(current)
        }
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    /// Collect the values into a `Vec`, head first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward iterator over list values.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    current: NodeId,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.list.arena.get(self.current)?;
        self.current = node.next;
        Some(&node.value)
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}
