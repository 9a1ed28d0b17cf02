//! Singly linked list with head and tail handles.
//!
//! Nodes live in a [`NodeArena`] and chain forward through `next` ids.
//! Pushes at either end are O(1); popping the back is O(n) because there is
//! no back-reference to walk from, and indexed access always walks from the
//! head.

use crate::arena::{NodeArena, NodeId, NULL_NODE};
use crate::error::{DsaError, DsaResult};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: NodeId,
}

/// Singly linked sequential container.
///
/// # Examples
///
/// ```
/// use dsakit::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_front(0);
///
/// assert_eq!(list.to_vec(), vec![0, 1, 2]);
/// assert_eq!(list.pop_front(), Some(0));
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SinglyLinkedList<T> {
    arena: NodeArena<Node<T>>,
    head: NodeId,
    tail: NodeId,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
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
            next: NULL_NODE,
        });
        if self.head == NULL_NODE {
            self.head = id;
            self.tail = id;
        } else {
            if let Some(tail) = self.arena.get_mut(self.tail) {
                tail.next = id;
            }
            self.tail = id;
        }
        self.len += 1;
        self.len
    }

    /// Prepend a value at the head. Returns the new length.
    pub fn push_front(&mut self, value: T) -> usize {
        let id = self.arena.allocate(Node {
            value,
            next: self.head,
        });
        if self.head == NULL_NODE {
            self.tail = id;
        }
        self.head = id;
        self.len += 1;
        self.len
    }

    /// Remove and return the tail value, or `None` if the list is empty.
    ///
    /// O(n): walks from the head to find the second-to-last node.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.head == NULL_NODE {
            return None;
        }
        if self.len == 1 {
            let node = self.arena.deallocate(self.head)?;
            self.head = NULL_NODE;
            self.tail = NULL_NODE;
            self.len = 0;
            return Some(node.value);
        }

        // Walk to the node just before the tail.
        let mut current = self.head;
        while self.arena.get(current).map(|n| n.next) != Some(self.tail) {
            current = self.arena.get(current)?.next;
        }
        let node = self.arena.deallocate(self.tail)?;
        if let Some(second_last) = self.arena.get_mut(current) {
            second_last.next = NULL_NODE;
        }
        self.tail = current;
        self.len -= 1;
        Some(node.value)
    }

    /// Remove and return the head value, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head == NULL_NODE {
            return None;
        }
        let node = self.arena.deallocate(self.head)?;
        self.head = node.next;
        self.len -= 1;
        if self.len == 0 {
            self.tail = NULL_NODE;
        }
        Some(node.value)
    }

    // ========================================================================
    // INDEXED ACCESS
    // ========================================================================

    /// Get a reference to the value at `index`, or `None` if out of range.
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

        let before = self
            .node_at(index - 1)
            .ok_or(DsaError::index_out_of_range(index, self.len))?;
        let displaced = self.arena.get(before).map(|n| n.next).unwrap_or(NULL_NODE);
        let id = self.arena.allocate(Node {
            value,
            next: displaced,
        });
        if let Some(node) = self.arena.get_mut(before) {
            node.next = id;
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

        let before = self
            .node_at(index - 1)
            .ok_or(DsaError::index_out_of_range(index, self.len))?;
        let target = self.arena.get(before).map(|n| n.next).unwrap_or(NULL_NODE);
        let node = self
            .arena
            .deallocate(target)
            .ok_or(DsaError::index_out_of_range(index, self.len))?;
        if let Some(prev) = self.arena.get_mut(before) {
            prev.next = node.next;
        }
        self.len -= 1;
        Ok(node.value)
    }

    // ========================================================================
    // WHOLE-LIST OPERATIONS
    // ========================================================================

    /// Reverse the list in place by flipping every `next` link.
    pub fn reverse(&mut self) {
        let mut prev = NULL_NODE;
        let mut current = self.head;
        while current != NULL_NODE {
            let next = match self.arena.get_mut(current) {
                Some(node) => std::mem::replace(&mut node.next, prev),
                None => break,
            };
            prev = current;
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

    /// Walk from the head to the node at `index`.
    fn node_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head;
        for _ in 0..index {
            current = self.arena.get(current)?.next;
        }
        Some(current)
    }
}

impl<T: Clone> SinglyLinkedList<T> {
    /// Collect the values into a `Vec`, head first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward iterator over list values.
pub struct Iter<'a, T> {
    list: &'a SinglyLinkedList<T>,
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

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}
