//! LIFO stack on a singly linked chain whose head is the top

use super::singly_linked_list::{Iter, SinglyLinkedList};
use crate::containers::write_items;
use crate::error::{CollectionError, Result};
use std::fmt;

/// Node-backed stack with O(1) push, pop and peek
///
/// # Examples
///
/// ```rust
/// use linear_collections::NodeStack;
///
/// let mut stack = NodeStack::new();
/// stack.push('a');
/// stack.push('b');
/// assert_eq!(stack.pop()?, 'b');
/// assert_eq!(*stack.peek()?, 'a');
/// # Ok::<(), linear_collections::CollectionError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct NodeStack<T> {
    chain: SinglyLinkedList<T>,
}

impl<T> NodeStack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            chain: SinglyLinkedList::new(),
        }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Check if the stack has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Push an element onto the top
    pub fn push(&mut self, value: T) {
        self.chain.push_front(value);
    }

    /// Remove and return the top element
    pub fn pop(&mut self) -> Result<T> {
        self.chain
            .pop_front()
            .ok_or_else(|| CollectionError::empty_container("NodeStack", "pop"))
    }

    /// Get a reference to the top element
    pub fn peek(&self) -> Result<&T> {
        self.chain
            .front()
            .ok_or_else(|| CollectionError::empty_container("NodeStack", "peek"))
    }

    /// Drop every element
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Iterate from top to bottom
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T> Default for NodeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for NodeStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for NodeStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for NodeStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeStack(")?;
        write_items(f, self.iter())?;
        write!(f, ", count: {})", self.len())
    }
}
