//! Doubly linked list over a node arena
//!
//! Nodes carry both `prev` and `next` indices. The back-link is a plain arena
//! index and owns nothing. Positional lookups walk from whichever end of the
//! list is nearer, so the cost of `get(i)` is `min(i, len - 1 - i)` hops.

use super::arena::{NodeArena, INVALID_NODE};
use crate::containers::write_items;
use crate::error::{check_bounds, check_insert_bounds, Result};
use std::fmt;
use std::iter::FusedIterator;

#[derive(Clone)]
struct Node<T> {
    value: T,
    prev: u32,
    next: u32,
}

/// Doubly linked list implementing the positional-container operations
///
/// # Examples
///
/// ```rust
/// use linear_collections::DoublyLinkedList;
///
/// let mut list: DoublyLinkedList<i32> = (1..=5).collect();
/// assert_eq!(*list.get(3)?, 4);
/// assert_eq!(list.pop_back(), Some(5));
/// assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
/// # Ok::<(), linear_collections::CollectionError>(())
/// ```
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    nodes: NodeArena<Node<T>>,
    head: u32,
    tail: u32,
}

impl<T> DoublyLinkedList<T> {
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
        if self.head == INVALID_NODE {
            None
        } else {
            Some(&self.nodes.node(self.head).value)
        }
    }

    /// Last element, if any
    pub fn back(&self) -> Option<&T> {
        if self.tail == INVALID_NODE {
            None
        } else {
            Some(&self.nodes.node(self.tail).value)
        }
    }

    /// Index of the node at `position`, walking from the nearer end.
    /// Callers check `position < len`.
    fn node_at(&self, position: usize) -> u32 {
        let len = self.len();
        if position < len / 2 {
            let mut current = self.head;
            for _ in 0..position {
                current = self.nodes.node(current).next;
            }
            current
        } else {
            let mut current = self.tail;
            for _ in 0..(len - 1 - position) {
                current = self.nodes.node(current).prev;
            }
            current
        }
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
        self.link_before(INVALID_NODE, value);
    }

    /// Prepend an element at the head in O(1)
    pub fn push_front(&mut self, value: T) {
        self.link_before(self.head, value);
    }

    /// Remove and return the first element
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head == INVALID_NODE {
            None
        } else {
            Some(self.unlink(self.head))
        }
    }

    /// Remove and return the last element
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail == INVALID_NODE {
            None
        } else {
            Some(self.unlink(self.tail))
        }
    }

    /// Insert an element so that it ends up at `index`
    ///
    /// Valid positions are `0..=len`; inserting at `len` appends.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        check_insert_bounds(index, self.len())?;

        let before = if index == self.len() {
            INVALID_NODE
        } else {
            self.node_at(index)
        };
        self.link_before(before, value);

        log::trace!("DoublyLinkedList insert at {}, count {}", index, self.len());
        Ok(())
    }

    /// Remove and return the element at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.len())?;
        let node = self.node_at(index);
        let value = self.unlink(node);
        log::trace!("DoublyLinkedList remove at {}, count {}", index, self.len());
        Ok(value)
    }

    /// Link a new node in front of `before`; `INVALID_NODE` appends
    fn link_before(&mut self, before: u32, value: T) {
        let prev = if before == INVALID_NODE {
            self.tail
        } else {
            self.nodes.node(before).prev
        };

        let node = self.nodes.insert(Node {
            value,
            prev,
            next: before,
        });

        if prev == INVALID_NODE {
            self.head = node;
        } else {
            self.nodes.node_mut(prev).next = node;
        }

        if before == INVALID_NODE {
            self.tail = node;
        } else {
            self.nodes.node_mut(before).prev = node;
        }
    }

    /// Unlink and free a node that belongs to this list
    fn unlink(&mut self, node: u32) -> T {
        let Node { value, prev, next } = self.nodes.remove(node);

        if prev == INVALID_NODE {
            self.head = next;
        } else {
            self.nodes.node_mut(prev).next = next;
        }

        if next == INVALID_NODE {
            self.tail = prev;
        } else {
            self.nodes.node_mut(next).prev = prev;
        }

        value
    }

    /// Drop every element
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = INVALID_NODE;
        self.tail = INVALID_NODE;
    }

    /// Iterate from head to tail; `.rev()` walks tail to head
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Position of the first element equal to `value`
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Check if any element equals `value`
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    fn find_node(&self, value: &T) -> Option<u32> {
        let mut current = self.head;
        while current != INVALID_NODE {
            let node = self.nodes.node(current);
            if node.value == *value {
                return Some(current);
            }
            current = node.next;
        }
        None
    }

    /// Remove the first element equal to `value`
    pub fn remove(&mut self, value: &T) -> bool {
        match self.find_node(value) {
            Some(node) => {
                drop(self.unlink(node));
                true
            }
            None => false,
        }
    }

    /// Remove every element equal to `value` in one pass
    ///
    /// Returns the number of elements removed.
    pub fn remove_all(&mut self, value: &T) -> usize {
        let mut removed = 0;
        let mut current = self.head;

        while current != INVALID_NODE {
            let node = self.nodes.node(current);
            let next = node.next;
            if node.value == *value {
                drop(self.unlink(current));
                removed += 1;
            }
            current = next;
        }

        if removed > 0 {
            log::trace!(
                "DoublyLinkedList removed {} matches, count {}",
                removed,
                self.len()
            );
        }
        removed
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DoublyLinkedList(")?;
        write_items(f, self.iter())?;
        write!(f, ", count: {})", self.len())
    }
}

/// Double-ended iterator over a [`DoublyLinkedList`]
pub struct Iter<'a, T> {
    nodes: &'a NodeArena<Node<T>>,
    front: u32,
    back: u32,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.node(self.front);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.node(self.back);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
