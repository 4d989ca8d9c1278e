//! GrowableArray: contiguous storage with explicit capacity doubling
//!
//! Elements occupy `[0, len)` of a `RawBuffer`; slots `[len, capacity)` are
//! uninitialized. When an append or insert finds the buffer full, a buffer of
//! twice the capacity is allocated, the live elements are moved across, and
//! the old block is released. Capacity never shrinks except on [`clear`],
//! which starts over with a fresh buffer of the default capacity.
//!
//! [`clear`]: GrowableArray::clear

use crate::config::collection::DEFAULT_INITIAL_CAPACITY;
use crate::config::{CollectionConfig, Config};
use crate::containers::raw_buffer::RawBuffer;
use crate::containers::write_items;
use crate::error::{check_bounds, check_capacity, check_insert_bounds, Result};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

/// Growable array with fallible positional access
///
/// # Examples
///
/// ```rust
/// use linear_collections::GrowableArray;
///
/// let mut array = GrowableArray::new();
/// array.add(10);
/// array.add(30);
/// array.insert_at(1, 20)?;
/// assert_eq!(array.as_slice(), &[10, 20, 30]);
/// assert!(array.get(3).is_err());
/// # Ok::<(), linear_collections::CollectionError>(())
/// ```
pub struct GrowableArray<T> {
    buf: RawBuffer<T>,
    len: usize,
    default_capacity: usize,
    log_reallocations: bool,
}

impl<T> GrowableArray<T> {
    /// Create an empty array with the default initial capacity
    pub fn new() -> Self {
        Self::configured(DEFAULT_INITIAL_CAPACITY, true)
    }

    /// Create an empty array with room for `capacity` elements
    ///
    /// A later [`clear`](Self::clear) still resets to the default capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        check_capacity(capacity)?;
        let mut array = Self::configured(capacity, true);
        array.default_capacity = DEFAULT_INITIAL_CAPACITY;
        Ok(array)
    }

    /// Create an empty array sized by `config.array_initial_capacity`
    pub fn with_config(config: &CollectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::configured(
            config.array_initial_capacity,
            config.log_reallocations,
        ))
    }

    /// Capacity must already be validated
    pub(crate) fn configured(capacity: usize, log_reallocations: bool) -> Self {
        debug_assert!(capacity > 0);
        Self {
            buf: RawBuffer::allocate(capacity),
            len: 0,
            default_capacity: capacity,
            log_reallocations,
        }
    }

    /// Bulk construction: capacity is twice the source length
    fn for_bulk(len: usize) -> Self {
        let mut array = if len == 0 {
            Self::new()
        } else {
            Self::configured(len * 2, true)
        };
        array.default_capacity = DEFAULT_INITIAL_CAPACITY;
        array
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the array has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the current buffer can hold
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// View the live elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is initialized and the pointer is non-null and aligned
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// View the live elements as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: [0, len) is initialized and uniquely borrowed
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Iterate over the elements from index 0 upward
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Get a reference to the element at `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        check_bounds(index, self.len)?;
        // SAFETY: index < len
        Ok(unsafe { &*self.buf.slot(index) })
    }

    /// Get a mutable reference to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_bounds(index, self.len)?;
        // SAFETY: index < len
        Ok(unsafe { &mut *self.buf.slot(index) })
    }

    /// Replace the element at `index`, dropping the old value
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Get the last element, if any
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Append an element, doubling the capacity first if the buffer is full
    pub fn add(&mut self, value: T) {
        if self.len >= self.capacity() {
            self.grow_to(self.capacity() * 2);
        }

        // SAFETY: len < capacity after growth, slot is uninitialized
        unsafe {
            self.buf.slot(self.len).write(value);
        }
        self.len += 1;
    }

    /// Insert an element at `index`, shifting later elements up by one
    ///
    /// Valid positions are `0..=len`; inserting at `len` appends.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        check_insert_bounds(index, self.len)?;

        if self.len >= self.capacity() {
            let old_capacity = self.capacity();
            let mut new_buf = RawBuffer::allocate(old_capacity * 2);

            // SAFETY: both ranges lie inside their buffers and the buffers are
            // distinct. The old buffer's slots are treated as moved-out.
            unsafe {
                ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), index);
                ptr::copy_nonoverlapping(
                    self.buf.slot(index),
                    new_buf.slot(index + 1),
                    self.len - index,
                );
                new_buf.slot(index).write(value);
            }

            self.buf = new_buf;
            self.len += 1;
            self.log_growth(old_capacity);
            return Ok(());
        }

        // SAFETY: len < capacity, so [index + 1, len + 1) is in bounds
        unsafe {
            let at = self.buf.slot(index);
            ptr::copy(at, at.add(1), self.len - index);
            at.write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements down
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.len)?;
        Ok(self.take_at(index))
    }

    /// Remove and return the last element, if any
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old last index is initialized and now outside len
        Some(unsafe { self.buf.slot(self.len).read() })
    }

    /// Callers guarantee `index < len`
    fn take_at(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);
        // SAFETY: index < len; the tail shift stays inside [0, len)
        unsafe {
            let at = self.buf.slot(index);
            let value = at.read();
            ptr::copy(at.add(1), at, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Drop every element and start over with a fresh default-capacity buffer
    pub fn clear(&mut self) {
        self.drop_elements();
        let old_capacity = self.capacity();
        self.buf = RawBuffer::allocate(self.default_capacity);
        if self.log_reallocations {
            log::debug!(
                "GrowableArray cleared: capacity {} -> {}",
                old_capacity,
                self.default_capacity
            );
        }
    }

    fn drop_elements(&mut self) {
        let len = self.len;
        // Zero first so a panicking destructor leaks instead of double-dropping
        self.len = 0;
        // SAFETY: [0, len) was initialized
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), len));
        }
    }

    /// Move the live elements into a buffer of `new_capacity` slots
    fn grow_to(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > self.capacity());
        let old_capacity = self.capacity();
        let mut new_buf = RawBuffer::allocate(new_capacity);

        // SAFETY: distinct allocations, len <= both capacities
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }

        self.buf = new_buf;
        self.log_growth(old_capacity);
    }

    fn log_growth(&self, old_capacity: usize) {
        if self.log_reallocations {
            log::debug!(
                "GrowableArray grew: capacity {} -> {}, len {}",
                old_capacity,
                self.capacity(),
                self.len
            );
        }
    }
}

impl<T: PartialEq> GrowableArray<T> {
    /// Position of the first element equal to `value`
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Check if any element equals `value`
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Remove the first element equal to `value`
    ///
    /// Returns `false` and leaves the array untouched when nothing matches.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => {
                drop(self.take_at(index));
                true
            }
            None => false,
        }
    }

    /// Remove every element equal to `value` in one stable compaction pass
    ///
    /// Returns the number of elements removed.
    pub fn remove_all(&mut self, value: &T) -> usize {
        let original_len = self.len;
        // A panic in `eq` or a destructor leaks the remainder
        self.len = 0;

        let base = self.buf.as_mut_ptr();
        let mut kept = 0;
        for read in 0..original_len {
            // SAFETY: read < original_len and every slot in [read, original_len)
            // is still initialized; kept <= read
            unsafe {
                let current = base.add(read);
                if *current == *value {
                    ptr::drop_in_place(current);
                } else {
                    if kept != read {
                        ptr::copy_nonoverlapping(current, base.add(kept), 1);
                    }
                    kept += 1;
                }
            }
        }

        self.len = kept;
        original_len - kept
    }
}

impl<T: Clone> GrowableArray<T> {
    /// Copy a slice into a new array with twice its length as capacity
    pub fn from_slice(items: &[T]) -> Self {
        let mut array = Self::for_bulk(items.len());
        for item in items {
            array.add(item.clone());
        }
        array
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        self.drop_elements();
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(items: Vec<T>) -> Self {
        let mut array = Self::for_bulk(items.len());
        for item in items {
            array.add(item);
        }
        array
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GrowableArray(")?;
        write_items(f, self.iter())?;
        write!(f, ", len: {}, cap: {})", self.len, self.capacity())
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        let mut new_array = Self::configured(self.capacity(), self.log_reallocations);
        new_array.default_capacity = self.default_capacity;
        for item in self.as_slice() {
            new_array.add(item.clone());
        }
        new_array
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_new() {
        let array: GrowableArray<i32> = GrowableArray::new();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), DEFAULT_INITIAL_CAPACITY);
        assert!(array.is_empty());
    }

    #[test]
    fn test_with_capacity() {
        let array: GrowableArray<i32> = GrowableArray::with_capacity(10).unwrap();
        assert_eq!(array.capacity(), 10);
        assert!(GrowableArray::<i32>::with_capacity(0).is_err());
    }

    #[test]
    fn test_with_config() {
        let config = CollectionConfig::builder()
            .array_initial_capacity(16)
            .build()
            .unwrap();
        let mut array: GrowableArray<i32> = GrowableArray::with_config(&config).unwrap();
        assert_eq!(array.capacity(), 16);

        array.add(1);
        array.clear();
        assert_eq!(array.capacity(), 16);

        let invalid = CollectionConfig {
            array_initial_capacity: 0,
            ..Default::default()
        };
        assert!(GrowableArray::<i32>::with_config(&invalid).is_err());
    }

    #[test]
    fn test_add_doubles_capacity() {
        let mut array = GrowableArray::with_capacity(2).unwrap();
        array.add(1);
        array.add(2);
        assert_eq!(array.capacity(), 2);

        array.add(3);
        assert_eq!(array.capacity(), 4);
        array.add(4);
        array.add(5);
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_get_set() {
        let mut array = GrowableArray::new();
        array.add("a".to_string());
        array.add("b".to_string());

        assert_eq!(array.get(1).unwrap(), "b");
        array.set(1, "z".to_string()).unwrap();
        assert_eq!(array[1], "z");

        let err = array.get(2).unwrap_err();
        assert_eq!(err.category(), "bounds");
        assert!(array.set(5, "x".to_string()).is_err());
        assert_eq!(array.len(), 2);
    }

    #[test]
    fn test_insert_at() {
        let mut array = GrowableArray::new();
        array.insert_at(0, 2).unwrap();
        array.insert_at(0, 1).unwrap();
        array.insert_at(2, 4).unwrap();
        array.insert_at(2, 3).unwrap();
        assert_eq!(array.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(array.capacity(), 4);

        // Full buffer: the insert itself performs the growth
        array.insert_at(1, 10).unwrap();
        assert_eq!(array.as_slice(), &[1, 10, 2, 3, 4]);
        assert_eq!(array.capacity(), 8);

        assert!(array.insert_at(7, 0).is_err());
        assert_eq!(array.len(), 5);
    }

    #[test]
    fn test_insert_at_end_while_full() {
        let mut array = GrowableArray::from_slice(&[1, 2]);
        assert_eq!(array.capacity(), 4);
        array.add(3);
        array.add(4);
        array.insert_at(4, 5).unwrap();
        assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(array.capacity(), 8);
    }

    #[test]
    fn test_remove_at() {
        let mut array = GrowableArray::from_slice(&[1, 2, 3, 4]);
        assert_eq!(array.remove_at(1).unwrap(), 2);
        assert_eq!(array.remove_at(2).unwrap(), 4);
        assert_eq!(array.as_slice(), &[1, 3]);
        assert!(array.remove_at(2).is_err());
    }

    #[test]
    fn test_remove_first_match() {
        let mut array = GrowableArray::from_slice(&[7, 1, 7, 2]);
        assert!(array.remove(&7));
        assert_eq!(array.as_slice(), &[1, 7, 2]);
        assert!(!array.remove(&99));
        assert_eq!(array.as_slice(), &[1, 7, 2]);
    }

    #[test]
    fn test_remove_at_position_zero() {
        let mut array = GrowableArray::from_slice(&[5]);
        assert!(array.remove(&5));
        assert!(array.is_empty());
    }

    #[test]
    fn test_remove_all() {
        let mut array = GrowableArray::from_slice(&[1, 2, 1, 3, 1]);
        assert_eq!(array.remove_all(&1), 3);
        assert_eq!(array.as_slice(), &[2, 3]);
        assert_eq!(array.remove_all(&42), 0);

        let mut same = GrowableArray::from_slice(&[9, 9, 9]);
        assert_eq!(same.remove_all(&9), 3);
        assert!(same.is_empty());
    }

    #[test]
    fn test_index_of_and_contains() {
        let array = GrowableArray::from_slice(&["x", "y", "x"]);
        assert_eq!(array.index_of(&"x"), Some(0));
        assert_eq!(array.index_of(&"y"), Some(1));
        assert_eq!(array.index_of(&"q"), None);
        assert!(array.contains(&"x"));
        assert!(!array.contains(&"q"));
    }

    #[test]
    fn test_clear_resets_capacity() {
        let mut array = GrowableArray::new();
        for i in 0..100 {
            array.add(i);
        }
        assert!(array.capacity() >= 100);

        array.clear();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), DEFAULT_INITIAL_CAPACITY);

        array.add(1);
        assert_eq!(array.as_slice(), &[1]);
    }

    #[test]
    fn test_bulk_construction() {
        let array = GrowableArray::from(vec![1, 2, 3]);
        assert_eq!(array.capacity(), 6);

        let array: GrowableArray<i32> = (0..5).collect();
        assert_eq!(array.capacity(), 10);
        assert_eq!(array.len(), 5);

        let empty = GrowableArray::<i32>::from_slice(&[]);
        assert_eq!(empty.capacity(), DEFAULT_INITIAL_CAPACITY);
    }

    #[test]
    fn test_display() {
        let array = GrowableArray::from_slice(&[1, 2, 3]);
        assert_eq!(array.to_string(), "GrowableArray([1, 2, 3], len: 3, cap: 6)");

        let empty: GrowableArray<i32> = GrowableArray::new();
        assert_eq!(empty.to_string(), "GrowableArray([], len: 0, cap: 4)");
    }

    #[test]
    fn test_debug_clone_eq() {
        let array = GrowableArray::from_slice(&[1, 2]);
        assert_eq!(format!("{:?}", array), "[1, 2]");

        let cloned = array.clone();
        assert_eq!(cloned, array);
        assert_eq!(cloned.capacity(), array.capacity());
    }

    #[test]
    fn test_extend_and_iter() {
        let mut array = GrowableArray::new();
        array.extend(vec![3, 1, 2]);
        let collected: Vec<_> = array.iter().copied().collect();
        assert_eq!(collected, vec![3, 1, 2]);

        let mut total = 0;
        for item in &array {
            total += *item;
        }
        assert_eq!(total, 6);
    }

    #[test]
    fn test_drop_runs_once_per_element() {
        let counter = Rc::new(Cell::new(0));

        struct Tracked(Rc<Cell<usize>>);
        impl Drop for Tracked {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        {
            let mut array = GrowableArray::new();
            for _ in 0..10 {
                array.add(Tracked(counter.clone()));
            }
            drop(array.remove_at(0).unwrap());
            assert_eq!(counter.get(), 1);

            array.clear();
            assert_eq!(counter.get(), 10);

            for _ in 0..3 {
                array.add(Tracked(counter.clone()));
            }
        }
        assert_eq!(counter.get(), 13);
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut array = GrowableArray::new();
        for _ in 0..10 {
            array.add(());
        }
        assert_eq!(array.len(), 10);
        assert_eq!(array.remove_all(&()), 10);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let array = GrowableArray::from_slice(&[1]);
        let _ = array[1];
    }
}
