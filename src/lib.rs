//! # linear-collections: Growable Arrays, Circular Queues, Linked Lists and Stacks
//!
//! Fundamental linear collections with explicit capacity management and
//! fallible positional access.
//!
//! ## Key Features
//!
//! - **Growable Array**: contiguous storage whose capacity doubles on overflow
//! - **Circular Queue**: wrap-around FIFO buffer with derived length and doubling growth
//! - **Linked Lists**: singly and doubly linked chains over an index arena
//! - **Stacks and Queues**: array-backed and node-backed variants behind common traits
//! - **Typed Errors**: out-of-range indices and empty pops are `Result` values, never panics
//! - **Configuration**: initial capacities from presets, environment variables or JSON files
//!
//! ## Quick Start
//!
//! ```rust
//! use linear_collections::{
//!     ArrayStack, CircularQueue, DoublyLinkedList, GrowableArray, PositionalContainer,
//! };
//!
//! // Indexed access reports out-of-range positions as errors
//! let mut array = GrowableArray::new();
//! array.add(1);
//! array.add(3);
//! array.insert_at(1, 2).unwrap();
//! assert!(array.get(5).is_err());
//!
//! // FIFO queue over a circular buffer
//! let mut queue = CircularQueue::new();
//! queue.enqueue("job-1");
//! assert_eq!(queue.dequeue().unwrap(), "job-1");
//! assert!(queue.dequeue().is_err());
//!
//! // LIFO stack
//! let mut stack = ArrayStack::new();
//! stack.push(10);
//! assert_eq!(*stack.peek().unwrap(), 10);
//!
//! // Generic code over the positional contract
//! fn count_matches<C: PositionalContainer<i32>>(c: &C, value: i32) -> bool {
//!     c.contains(&value)
//! }
//! let list: DoublyLinkedList<i32> = (1..=3).collect();
//! assert!(count_matches(&list, 1));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod containers;
pub mod error;

// Re-export core types
pub use config::{CollectionConfig, Config};
pub use containers::{
    ArrayStack, CircularQueue, DoublyLinkedList, GrowableArray, NodeQueue, NodeStack,
    PositionalContainer, Queue, SinglyLinkedList, Stack,
};
pub use error::{CollectionError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (logs the version; installs no logger)
pub fn init() {
    log::debug!("Initializing linear-collections v{}", VERSION);
}
