//! LIFO stack over a singly linked list.
//!
//! Push and pop both happen at the list head, so each operation is O(1).

use crate::singly_linked_list::SinglyLinkedList;

/// Last-in, first-out container.
///
/// # Examples
///
/// ```
/// use dsakit::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    items: SinglyLinkedList<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            items: SinglyLinkedList::new(),
        }
    }

    /// Push a value on top of the stack. Returns the new size.
    pub fn push(&mut self, value: T) -> usize {
        self.items.push_front(value)
    }

    /// Remove and return the top value, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Peek at the top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.get(0)
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> Stack<T> {
    /// Collect the values into a `Vec`, top of the stack first.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_is_lifo() {
        let mut stack = Stack::new();
        assert_eq!(stack.push('a'), 1);
        assert_eq!(stack.push('b'), 2);
        assert_eq!(stack.push('c'), 3);
        assert_eq!(stack.to_vec(), vec!['c', 'b', 'a']);

        assert_eq!(stack.pop(), Some('c'));
        assert_eq!(stack.pop(), Some('b'));
        assert_eq!(stack.pop(), Some('a'));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut stack = Stack::new();
        stack.push(10);
        assert_eq!(stack.peek(), Some(&10));
        assert_eq!(stack.len(), 1);
    }
}
