//! Linear container types
//!
//! ## Array-backed
//!
//! - **`GrowableArray<T>`** - Contiguous storage, capacity doubles on overflow
//! - **`CircularQueue<T>`** - Wrap-around FIFO buffer, capacity doubles on overflow
//! - **`ArrayStack<T>`** - LIFO stack over a `GrowableArray`
//!
//! ## Node-backed
//!
//! - **`SinglyLinkedList<T>`** - Forward-linked chain with head and tail
//! - **`DoublyLinkedList<T>`** - Bidirectional chain, indexed walks start at the nearer end
//! - **`NodeStack<T>`** - LIFO over a forward chain
//! - **`NodeQueue<T>`** - FIFO over a forward chain
//!
//! The list types implement [`PositionalContainer`], the stacks [`Stack`] and
//! the queues [`Queue`].
//!
//! The uninitialized storage behind the array-backed types stays inside the
//! crate:
//!
//! ```compile_fail
//! use linear_collections::containers::raw_buffer::RawBuffer;
//! ```

use std::fmt;

mod growable_array;
pub mod linked;
mod raw_buffer;
pub mod specialized;
pub mod traits;

pub use growable_array::GrowableArray;
pub use linked::{DoublyLinkedList, NodeArena, NodeQueue, NodeStack, SinglyLinkedList, INVALID_NODE};
pub use specialized::{ArrayStack, CircularQueue, CircularQueueIter};
pub use traits::{PositionalContainer, Queue, Stack};

/// Write `[a, b, c]` using each item's `Display`
pub(crate) fn write_items<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}
