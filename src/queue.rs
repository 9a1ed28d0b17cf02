//! FIFO queue over a singly linked list.
//!
//! Enqueue happens at the list tail and dequeue at the head, so both ends
//! are O(1). Dequeuing from the back is deliberately not offered.

use crate::singly_linked_list::SinglyLinkedList;

/// First-in, first-out container.
///
/// # Examples
///
/// ```
/// use dsakit::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Queue<T> {
    items: SinglyLinkedList<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: SinglyLinkedList::new(),
        }
    }

    /// Add a value at the back of the queue. Returns the new size.
    pub fn enqueue(&mut self, value: T) -> usize {
        self.items.push_back(value)
    }

    /// Remove and return the front value, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Peek at the front value without removing it.
    pub fn front(&self) -> Option<&T> {
        self.items.get(0)
    }

    /// Number of values in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> Queue<T> {
    /// Collect the values into a `Vec`, front of the queue first.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enqueue_dequeue_is_fifo() {
        let mut queue = Queue::new();
        assert_eq!(queue.enqueue(1), 1);
        assert_eq!(queue.enqueue(2), 2);
        assert_eq!(queue.enqueue(3), 3);
        assert_eq!(queue.to_vec(), vec![1, 2, 3]);

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn drained_queue_accepts_new_values() {
        let mut queue = Queue::new();
        queue.enqueue("x");
        assert_eq!(queue.dequeue(), Some("x"));
        // The tail handle must be reset when the queue empties.
        queue.enqueue("y");
        assert_eq!(queue.front(), Some(&"y"));
        assert_eq!(queue.len(), 1);
    }
}
