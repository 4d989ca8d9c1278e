//! Circular-buffer FIFO queue with automatic doubling
//!
//! Elements live in a raw buffer between `head` (oldest) and `tail` (one
//! past the newest), wrapping modulo the capacity. The length is derived from
//! the two indices and never stored. The buffer never becomes completely
//! full: an enqueue that would make `len == capacity` grows the buffer first,
//! so `head == tail` always means empty.

use crate::config::collection::DEFAULT_INITIAL_CAPACITY;
use crate::config::{CollectionConfig, Config};
use crate::containers::raw_buffer::RawBuffer;
use crate::containers::write_items;
use crate::error::{check_capacity, CollectionError, Result};
use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

/// Array-backed FIFO queue using modular index arithmetic
///
/// # Examples
///
/// ```rust
/// use linear_collections::CircularQueue;
///
/// let mut queue = CircularQueue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(*queue.peek()?, 1);
/// assert_eq!(queue.dequeue()?, 1);
/// assert_eq!(queue.len(), 1);
/// # Ok::<(), linear_collections::CollectionError>(())
/// ```
pub struct CircularQueue<T> {
    buf: RawBuffer<T>,
    head: usize,
    tail: usize,
    default_capacity: usize,
    log_reallocations: bool,
}

impl<T> CircularQueue<T> {
    /// Create an empty queue with the default initial capacity
    pub fn new() -> Self {
        Self::configured(DEFAULT_INITIAL_CAPACITY, true)
    }

    /// Create an empty queue backed by `capacity` slots
    ///
    /// One slot always stays free, so `capacity - 1` elements fit before the
    /// first growth.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        check_capacity(capacity)?;
        let mut queue = Self::configured(capacity, true);
        queue.default_capacity = DEFAULT_INITIAL_CAPACITY;
        Ok(queue)
    }

    /// Create an empty queue sized by `config.queue_initial_capacity`
    pub fn with_config(config: &CollectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::configured(
            config.queue_initial_capacity,
            config.log_reallocations,
        ))
    }

    fn configured(capacity: usize, log_reallocations: bool) -> Self {
        debug_assert!(capacity > 0);
        Self {
            buf: RawBuffer::allocate(capacity),
            head: 0,
            tail: 0,
            default_capacity: capacity,
            log_reallocations,
        }
    }

    /// Number of slots in the current buffer
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Number of queued elements
    #[inline]
    pub fn len(&self) -> usize {
        if self.tail >= self.head {
            self.tail - self.head
        } else {
            self.capacity() - self.head + self.tail
        }
    }

    /// Check if the queue has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Add an element at the back of the queue
    pub fn enqueue(&mut self, value: T) {
        if self.len() + 1 >= self.capacity() {
            self.grow_to(self.capacity() * 2);
        }

        // SAFETY: tail < capacity and the slot is outside the live range
        unsafe {
            self.buf.slot(self.tail).write(value);
        }
        self.tail = (self.tail + 1) % self.capacity();
    }

    /// Remove and return the oldest element
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(CollectionError::empty_container("CircularQueue", "dequeue"));
        }

        // SAFETY: the queue is non-empty, so head addresses a live element
        let value = unsafe { self.buf.slot(self.head).read() };
        self.head = (self.head + 1) % self.capacity();
        Ok(value)
    }

    /// Get a reference to the oldest element without removing it
    pub fn peek(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(CollectionError::empty_container("CircularQueue", "peek"));
        }
        // SAFETY: non-empty, head is live
        Ok(unsafe { &*self.buf.slot(self.head) })
    }

    /// Get a mutable reference to the oldest element
    pub fn peek_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(CollectionError::empty_container("CircularQueue", "peek"));
        }
        // SAFETY: non-empty, head is live
        Ok(unsafe { &mut *self.buf.slot(self.head) })
    }

    /// Drop every element and reset to a fresh default-capacity buffer
    pub fn clear(&mut self) {
        self.drop_elements();
        let old_capacity = self.capacity();
        self.buf = RawBuffer::allocate(self.default_capacity);
        if self.log_reallocations {
            log::debug!(
                "CircularQueue cleared: capacity {} -> {}",
                old_capacity,
                self.default_capacity
            );
        }
    }

    /// Iterate from the oldest element to the newest
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            current: self.head,
            remaining: self.len(),
        }
    }

    /// Live elements as the wrapped segment pair `[head, ..)` and `[0, tail)`
    fn segments(&self) -> ((usize, usize), (usize, usize)) {
        if self.head <= self.tail {
            ((self.head, self.tail - self.head), (0, 0))
        } else {
            (
                (self.head, self.capacity() - self.head),
                (0, self.tail),
            )
        }
    }

    fn drop_elements(&mut self) {
        let ((first_start, first_len), (second_start, second_len)) = self.segments();
        // Empty first so a panicking destructor leaks instead of double-dropping
        self.head = 0;
        self.tail = 0;

        let base = self.buf.as_mut_ptr();
        // SAFETY: both segments were initialized and are disjoint
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(first_start), first_len));
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                base.add(second_start),
                second_len,
            ));
        }
    }

    /// Copy the live elements in FIFO order to the start of a larger buffer
    fn grow_to(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > self.capacity());
        let old_capacity = self.capacity();
        let len = self.len();
        let ((first_start, first_len), (second_start, second_len)) = self.segments();
        let mut new_buf = RawBuffer::allocate(new_capacity);

        // SAFETY: source segments are live, destinations fit since len < new_capacity,
        // and the buffers are distinct allocations
        unsafe {
            ptr::copy_nonoverlapping(self.buf.slot(first_start), new_buf.as_mut_ptr(), first_len);
            ptr::copy_nonoverlapping(
                self.buf.slot(second_start),
                new_buf.slot(first_len),
                second_len,
            );
        }

        self.buf = new_buf;
        self.head = 0;
        self.tail = len;

        if self.log_reallocations {
            log::debug!(
                "CircularQueue grew: capacity {} -> {}, len {}",
                old_capacity,
                new_capacity,
                len
            );
        }
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for CircularQueue<T> {
    fn drop(&mut self) {
        self.drop_elements();
    }
}

impl<T> Extend<T> for CircularQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for CircularQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CircularQueue(")?;
        write_items(f, self.iter())?;
        write!(f, ", len: {}, cap: {})", self.len(), self.capacity())
    }
}

impl<T: Clone> Clone for CircularQueue<T> {
    fn clone(&self) -> Self {
        let mut new_queue = Self::configured(self.capacity(), self.log_reallocations);
        new_queue.default_capacity = self.default_capacity;
        // Same capacity and the same length never triggers growth
        for item in self.iter() {
            new_queue.enqueue(item.clone());
        }
        new_queue
    }
}

impl<T: PartialEq> PartialEq for CircularQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularQueue<T> {}

/// FIFO-order iterator over a [`CircularQueue`]
pub struct Iter<'a, T> {
    queue: &'a CircularQueue<T>,
    current: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // SAFETY: current walks the live range, which has `remaining` more slots
        let value = unsafe { &*self.queue.buf.slot(self.current) };
        self.current = (self.current + 1) % self.queue.capacity();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
