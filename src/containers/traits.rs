//! Shared contracts for positional containers, stacks and queues
//!
//! Every concrete type also exposes these operations as inherent methods, so
//! the traits are only needed for code that is generic over the container.

use super::linked::{DoublyLinkedList, NodeQueue, NodeStack, SinglyLinkedList};
use super::specialized::{ArrayStack, CircularQueue};
use super::GrowableArray;
use crate::error::Result;

/// Index-addressed sequence of equality-comparable elements
///
/// Indices run from 0 to `len() - 1`. Insertion accepts `0..=len()`.
///
/// ```rust
/// use linear_collections::{DoublyLinkedList, GrowableArray, PositionalContainer};
///
/// fn fill<C: PositionalContainer<i32>>(container: &mut C) {
///     container.add(1);
///     container.add(2);
///     container.add(1);
///     container.remove_all(&1);
/// }
///
/// let mut array = GrowableArray::new();
/// let mut list = DoublyLinkedList::new();
/// fill(&mut array);
/// fill(&mut list);
/// assert_eq!(array.len(), 1);
/// assert_eq!(list.len(), 1);
/// ```
pub trait PositionalContainer<T: PartialEq> {
    /// Number of elements
    fn len(&self) -> usize;

    /// Check if there are no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or `OutOfRange`
    fn get(&self, index: usize) -> Result<&T>;

    /// Replace the element at `index`, or `OutOfRange`
    fn set(&mut self, index: usize, value: T) -> Result<()>;

    /// Append at the end
    fn add(&mut self, value: T);

    /// Insert so the value ends up at `index`
    fn insert_at(&mut self, index: usize, value: T) -> Result<()>;

    /// Remove the first match; `false` when absent
    fn remove(&mut self, value: &T) -> bool;

    /// Remove every match and return how many were removed
    fn remove_all(&mut self, value: &T) -> usize;

    /// Remove and return the element at `index`
    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// Position of the first match
    fn index_of(&self, value: &T) -> Option<usize>;

    /// Check if any element matches
    fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Drop every element
    fn clear(&mut self);
}

/// Last-in, first-out contract
pub trait Stack<T> {
    /// Push onto the top
    fn push(&mut self, value: T);

    /// Pop the top, or `EmptyContainer`
    fn pop(&mut self) -> Result<T>;

    /// Borrow the top, or `EmptyContainer`
    fn peek(&self) -> Result<&T>;

    /// Number of elements
    fn len(&self) -> usize;

    /// Check if there are no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in, first-out contract
pub trait Queue<T> {
    /// Add at the back
    fn enqueue(&mut self, value: T);

    /// Remove the front, or `EmptyContainer`
    fn dequeue(&mut self) -> Result<T>;

    /// Borrow the front, or `EmptyContainer`
    fn peek(&self) -> Result<&T>;

    /// Number of elements
    fn len(&self) -> usize;

    /// Check if there are no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_positional_container {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<T: PartialEq> PositionalContainer<T> for $ty<T> {
                #[inline]
                fn len(&self) -> usize {
                    $ty::len(self)
                }

                fn get(&self, index: usize) -> Result<&T> {
                    $ty::get(self, index)
                }

                fn set(&mut self, index: usize, value: T) -> Result<()> {
                    $ty::set(self, index, value)
                }

                fn add(&mut self, value: T) {
                    $ty::add(self, value)
                }

                fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
                    $ty::insert_at(self, index, value)
                }

                fn remove(&mut self, value: &T) -> bool {
                    $ty::remove(self, value)
                }

                fn remove_all(&mut self, value: &T) -> usize {
                    $ty::remove_all(self, value)
                }

                fn remove_at(&mut self, index: usize) -> Result<T> {
                    $ty::remove_at(self, index)
                }

                fn index_of(&self, value: &T) -> Option<usize> {
                    $ty::index_of(self, value)
                }

                fn clear(&mut self) {
                    $ty::clear(self)
                }
            }
        )+
    };
}

impl_positional_container!(GrowableArray, SinglyLinkedList, DoublyLinkedList);

macro_rules! impl_stack {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<T> Stack<T> for $ty<T> {
                fn push(&mut self, value: T) {
                    $ty::push(self, value)
                }

                fn pop(&mut self) -> Result<T> {
                    $ty::pop(self)
                }

                fn peek(&self) -> Result<&T> {
                    $ty::peek(self)
                }

                #[inline]
                fn len(&self) -> usize {
                    $ty::len(self)
                }
            }
        )+
    };
}

impl_stack!(ArrayStack, NodeStack);

macro_rules! impl_queue {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<T> Queue<T> for $ty<T> {
                fn enqueue(&mut self, value: T) {
                    $ty::enqueue(self, value)
                }

                fn dequeue(&mut self) -> Result<T> {
                    $ty::dequeue(self)
                }

                fn peek(&self) -> Result<&T> {
                    $ty::peek(self)
                }

                #[inline]
                fn len(&self) -> usize {
                    $ty::len(self)
                }
            }
        )+
    };
}

impl_queue!(CircularQueue, NodeQueue);
