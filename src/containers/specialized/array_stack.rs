//! LIFO stack on a [`GrowableArray`]; the top is the last element

use crate::config::{CollectionConfig, Config};
use crate::containers::growable_array::GrowableArray;
use crate::containers::write_items;
use crate::error::{CollectionError, Result};
use std::fmt;
use std::iter::Rev;
use std::slice;

/// Array-backed stack with amortized O(1) push and O(1) pop
///
/// # Examples
///
/// ```rust
/// use linear_collections::ArrayStack;
///
/// let mut stack = ArrayStack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(*stack.peek()?, 2);
/// assert_eq!(stack.pop()?, 2);
/// assert_eq!(stack.len(), 1);
/// # Ok::<(), linear_collections::CollectionError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ArrayStack<T> {
    items: GrowableArray<T>,
}

impl<T> ArrayStack<T> {
    /// Create an empty stack with the default initial capacity
    pub fn new() -> Self {
        Self {
            items: GrowableArray::new(),
        }
    }

    /// Create an empty stack with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            items: GrowableArray::with_capacity(capacity)?,
        })
    }

    /// Create an empty stack sized by `config.stack_initial_capacity`
    pub fn with_config(config: &CollectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            items: GrowableArray::configured(
                config.stack_initial_capacity,
                config.log_reallocations,
            ),
        })
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stack has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Capacity of the backing array
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Push an element onto the top
    pub fn push(&mut self, value: T) {
        self.items.add(value);
    }

    /// Remove and return the top element
    pub fn pop(&mut self) -> Result<T> {
        self.items
            .pop()
            .ok_or_else(|| CollectionError::empty_container("ArrayStack", "pop"))
    }

    /// Get a reference to the top element
    pub fn peek(&self) -> Result<&T> {
        self.items
            .last()
            .ok_or_else(|| CollectionError::empty_container("ArrayStack", "peek"))
    }

    /// Drop every element and reset the backing array
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate from top to bottom
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.items.iter().rev()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayStack(")?;
        write_items(f, self.iter())?;
        write!(f, ", count: {}, capacity: {})", self.len(), self.capacity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut stack = ArrayStack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.pop().unwrap(), 3);
        assert_eq!(stack.pop().unwrap(), 2);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_growth() {
        let mut stack = ArrayStack::with_capacity(2).unwrap();
        stack.extend(0..5);
        assert_eq!(stack.capacity(), 8);
        assert_eq!(*stack.peek().unwrap(), 4);
        assert!(ArrayStack::<i32>::with_capacity(0).is_err());
    }

    #[test]
    fn test_empty_errors() {
        let mut stack: ArrayStack<i32> = ArrayStack::new();
        let err = stack.pop().unwrap_err();
        assert_eq!(err.to_string(), "Empty container: cannot pop an empty ArrayStack");
        let err = stack.peek().unwrap_err();
        assert_eq!(err.to_string(), "Empty container: cannot peek an empty ArrayStack");
    }

    #[test]
    fn test_config_capacity_survives_clear() {
        let config = CollectionConfig::builder()
            .stack_initial_capacity(32)
            .build()
            .unwrap();
        let mut stack = ArrayStack::with_config(&config).unwrap();
        stack.extend(0..100);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), 32);
    }

    #[test]
    fn test_display_top_first() {
        let stack: ArrayStack<i32> = (1..=3).collect();
        assert_eq!(stack.to_string(), "ArrayStack([3, 2, 1], count: 3, capacity: 4)");
        assert_eq!(format!("{:?}", stack), "[3, 2, 1]");
    }
}
