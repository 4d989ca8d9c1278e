//! Array-backed stack and queue types
//!
//! - **`CircularQueue<T>`** - FIFO over a wrap-around buffer that doubles on overflow
//! - **`ArrayStack<T>`** - LIFO over a [`GrowableArray`](crate::GrowableArray)

mod array_stack;
mod circular_queue;

pub use array_stack::ArrayStack;
pub use circular_queue::{CircularQueue, Iter as CircularQueueIter};
