//! Singly linked list over a node arena
//!
//! Each node stores its value and the index of its successor. The list keeps
//! `head` and `tail` indices so that appends and front operations are O(1);
//! positional access walks from the head.

use super::arena::{NodeArena, INVALID_NODE};
use crate::containers::write_items;
use crate::error::{check_bounds, check_insert_bounds, Result};
use std::fmt;
use std::iter::FusedIterator;

#[derive(Clone)]
struct Node<T> {
    value: T,
    next: u32,
}

/// Singly linked list implementing the positional-container operations
///
/// # Examples
///
/// ```rust
/// use linear_collections::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.add(2);
/// list.add(3);
/// list.insert_at(0, 1)?;
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(list.remove_at(1)?, 2);
/// # Ok::<(), linear_collections::CollectionError>(())
/// ```
#[derive(Clone)]
pub struct SinglyLinkedList<T> {
    nodes: NodeArena<Node<T>>,
    head: u32,
    tail: u32,
}

impl<T> SinglyLinkedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: INVALID_NODE,
            tail: INVALID_NODE,
        }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the list has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == INVALID_NODE
    }

    /// First element, if any
    pub fn front(&self) -> Option<&T> {
        self.value_at_node(self.head)
    }

    /// Last element, if any
    pub fn back(&self) -> Option<&T> {
        self.value_at_node(self.tail)
    }

    fn value_at_node(&self, node: u32) -> Option<&T> {
        if node == INVALID_NODE {
            None
        } else {
            Some(&self.nodes.node(node).value)
        }
    }

    /// Index of the node at `position`; callers check `position < len`
    fn node_at(&self, position: usize) -> u32 {
        let mut current = self.head;
        for _ in 0..position {
            current = self.nodes.node(current).next;
        }
        current
    }

    /// Get a reference to the element at `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        check_bounds(index, self.len())?;
        Ok(&self.nodes.node(self.node_at(index)).value)
    }

    /// Get a mutable reference to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_bounds(index, self.len())?;
        let node = self.node_at(index);
        Ok(&mut self.nodes.node_mut(node).value)
    }

    /// Replace the element at `index`
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Append an element at the tail in O(1)
    pub fn add(&mut self, value: T) {
        let node = self.nodes.insert(Node {
            value,
            next: INVALID_NODE,
        });

        if self.tail == INVALID_NODE {
            self.head = node;
        } else {
            self.nodes.node_mut(self.tail).next = node;
        }
        self.tail = node;
    }

    /// Prepend an element at the head in O(1)
    pub fn push_front(&mut self, value: T) {
        let node = self.nodes.insert(Node {
            value,
            next: self.head,
        });

        if self.tail == INVALID_NODE {
            self.tail = node;
        }
        self.head = node;
    }

    /// Remove and return the first element
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.unlink_after(INVALID_NODE))
        }
    }

    /// Insert an element so that it ends up at `index`
    ///
    /// Valid positions are `0..=len`; inserting at `len` appends.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        check_insert_bounds(index, self.len())?;

        if index == 0 {
            self.push_front(value);
        } else if index == self.len() {
            self.add(value);
        } else {
            let prev = self.node_at(index - 1);
            let next = self.nodes.node(prev).next;
            let node = self.nodes.insert(Node { value, next });
            self.nodes.node_mut(prev).next = node;
        }

        log::trace!("SinglyLinkedList insert at {}, count {}", index, self.len());
        Ok(())
    }

    /// Remove and return the element at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.len())?;
        let prev = if index == 0 {
            INVALID_NODE
        } else {
            self.node_at(index - 1)
        };

        let value = self.unlink_after(prev);
        log::trace!("SinglyLinkedList remove at {}, count {}", index, self.len());
        Ok(value)
    }

    /// Unlink and free the successor of `prev`, or the head when `prev` is
    /// `INVALID_NODE`. The successor must exist.
    fn unlink_after(&mut self, prev: u32) -> T {
        let target = if prev == INVALID_NODE {
            self.head
        } else {
            self.nodes.node(prev).next
        };

        let Node { value, next } = self.nodes.remove(target);

        if prev == INVALID_NODE {
            self.head = next;
        } else {
            self.nodes.node_mut(prev).next = next;
        }
        if target == self.tail {
            self.tail = prev;
        }

        value
    }

    /// Drop every element
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = INVALID_NODE;
        self.tail = INVALID_NODE;
    }

    /// Iterate from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.len(),
        }
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Position of the first element equal to `value`
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Check if any element equals `value`
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Remove the first element equal to `value`
    pub fn remove(&mut self, value: &T) -> bool {
        let mut prev = INVALID_NODE;
        let mut current = self.head;

        while current != INVALID_NODE {
            let node = self.nodes.node(current);
            if node.value == *value {
                drop(self.unlink_after(prev));
                return true;
            }
            prev = current;
            current = node.next;
        }

        false
    }

    /// Remove every element equal to `value` in one pass
    ///
    /// Returns the number of elements removed.
    pub fn remove_all(&mut self, value: &T) -> usize {
        let mut removed = 0;
        let mut prev = INVALID_NODE;
        let mut current = self.head;

        while current != INVALID_NODE {
            let node = self.nodes.node(current);
            let next = node.next;
            if node.value == *value {
                drop(self.unlink_after(prev));
                removed += 1;
            } else {
                prev = current;
            }
            current = next;
        }

        if removed > 0 {
            log::trace!(
                "SinglyLinkedList removed {} matches, count {}",
                removed,
                self.len()
            );
        }
        removed
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SinglyLinkedList(")?;
        write_items(f, self.iter())?;
        write!(f, ", count: {})", self.len())
    }
}

/// Head-to-tail iterator over a [`SinglyLinkedList`]
pub struct Iter<'a, T> {
    nodes: &'a NodeArena<Node<T>>,
    current: u32,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == INVALID_NODE {
            return None;
        }
        let node = self.nodes.node(self.current);
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
