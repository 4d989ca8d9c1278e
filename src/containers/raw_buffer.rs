//! RawBuffer: owned, uninitialized, fixed-capacity storage
//!
//! Every array-backed container keeps its elements in a `RawBuffer`. The
//! buffer only owns the allocation: it never knows which slots hold live
//! values, so it never drops elements. The owning container tracks its live
//! range and is responsible for dropping it.

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A heap block with room for exactly `capacity` values of `T`
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Allocate uninitialized storage for `capacity` elements
    ///
    /// Zero-sized layouts (a zero capacity or a zero-sized `T`) never touch
    /// the allocator. Allocation failure aborts through
    /// [`std::alloc::handle_alloc_error`], as the std collections do.
    ///
    /// # Panics
    ///
    /// Panics if `capacity * size_of::<T>()` overflows `isize::MAX`.
    pub fn allocate(capacity: usize) -> Self {
        let layout = Self::layout_for(capacity);

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: layout has a non-zero size
            let raw = unsafe { alloc::alloc(layout) as *mut T };
            match NonNull::new(raw) {
                Some(ptr) => ptr,
                None => alloc::handle_alloc_error(layout),
            }
        };

        Self {
            ptr,
            cap: capacity,
            _marker: PhantomData,
        }
    }

    #[inline]
    fn layout_for(capacity: usize) -> Layout {
        match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        }
    }

    /// Number of element slots in the allocation
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Pointer to slot 0, valid for reads of initialized slots
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot 0, valid for writes anywhere in `[0, capacity)`
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot `index`
    ///
    /// # Safety
    ///
    /// `index` must be at most `capacity`.
    #[inline]
    pub unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.cap);
        // SAFETY: the caller keeps index within the allocation
        unsafe { self.ptr.as_ptr().add(index) }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        let layout = Self::layout_for(self.cap);
        if layout.size() != 0 {
            // SAFETY: the block was allocated in `allocate` with this exact layout
            unsafe {
                alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout);
            }
        }
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

// SAFETY: RawBuffer uniquely owns its allocation
unsafe impl<T: Send> Send for RawBuffer<T> {}

// SAFETY: shared access only hands out raw pointers; the owning container
// decides what may be read through them
unsafe impl<T: Sync> Sync for RawBuffer<T> {}
