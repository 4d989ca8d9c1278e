//! Node-chain containers
//!
//! All of these keep their nodes in a [`NodeArena`] and link them by `u32`
//! index.

pub mod arena;
pub mod doubly_linked_list;
pub mod node_queue;
pub mod node_stack;
pub mod singly_linked_list;

pub use arena::{NodeArena, INVALID_NODE};
pub use doubly_linked_list::DoublyLinkedList;
pub use node_queue::NodeQueue;
pub use node_stack::NodeStack;
pub use singly_linked_list::SinglyLinkedList;
