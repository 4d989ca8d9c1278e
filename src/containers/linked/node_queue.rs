//! FIFO queue on a singly linked chain: enqueue at the tail, dequeue at the head

use super::singly_linked_list::{Iter, SinglyLinkedList};
use crate::containers::write_items;
use crate::error::{CollectionError, Result};
use std::fmt;

/// Node-backed queue with O(1) enqueue, dequeue and peek
#[derive(Clone, PartialEq, Eq)]
pub struct NodeQueue<T> {
    chain: SinglyLinkedList<T>,
}

impl<T> NodeQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            chain: SinglyLinkedList::new(),
        }
    }

    /// Number of queued elements
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Check if the queue has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Add an element at the back
    pub fn enqueue(&mut self, value: T) {
        self.chain.add(value);
    }

    /// Remove and return the front element
    pub fn dequeue(&mut self) -> Result<T> {
        self.chain
            .pop_front()
            .ok_or_else(|| CollectionError::empty_container("NodeQueue", "dequeue"))
    }

    /// Get a reference to the front element
    pub fn peek(&self) -> Result<&T> {
        self.chain
            .front()
            .ok_or_else(|| CollectionError::empty_container("NodeQueue", "peek"))
    }

    /// Drop every element
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Iterate from front to back
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T> Default for NodeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for NodeQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.chain.extend(iter);
    }
}

impl<T> FromIterator<T> for NodeQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            chain: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for NodeQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeQueue(")?;
        write_items(f, self.iter())?;
        write!(f, ", len: {})", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo() {
        let mut queue = NodeQueue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");
        assert_eq!(*queue.peek().unwrap(), "a");
        assert_eq!(queue.dequeue().unwrap(), "a");
        assert_eq!(queue.dequeue().unwrap(), "b");

        queue.enqueue("d");
        assert_eq!(queue.dequeue().unwrap(), "c");
        assert_eq!(queue.dequeue().unwrap(), "d");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty_errors() {
        let mut queue: NodeQueue<i32> = NodeQueue::new();
        assert_eq!(queue.dequeue().unwrap_err().category(), "empty");
        assert!(queue.peek().is_err());

        // Draining to empty and refilling keeps the tail consistent
        queue.enqueue(1);
        queue.dequeue().unwrap();
        queue.enqueue(2);
        assert_eq!(*queue.peek().unwrap(), 2);
    }

    #[test]
    fn test_display() {
        let queue: NodeQueue<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(queue.to_string(), "NodeQueue([1, 2, 3], len: 3)");
    }
}
