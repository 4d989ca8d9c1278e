//! Slot arena for linked nodes
//!
//! Nodes are addressed by `u32` index and linked to each other by index, so
//! a chain never owns its neighbours and back-links cannot form ownership
//! cycles. Freed slots go on a free list and are reused by later inserts.

/// Null link
pub const INVALID_NODE: u32 = u32::MAX;

/// Index-addressed node storage with slot reuse
#[derive(Clone)]
pub struct NodeArena<N> {
    slots: Vec<Option<N>>,
    free_nodes: Vec<u32>,
    len: usize,
}

impl<N> NodeArena<N> {
    /// Create an empty arena
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_nodes: Vec::new(),
            len: 0,
        }
    }

    /// Number of occupied slots
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no slot is occupied
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Store a node and return its index
    ///
    /// # Panics
    ///
    /// Panics if the arena would need more than `u32::MAX - 1` slots.
    pub fn insert(&mut self, node: N) -> u32 {
        if let Some(index) = self.free_nodes.pop() {
            self.slots[index as usize] = Some(node);
            self.len += 1;
            return index;
        }

        let index = self.slots.len();
        if index >= INVALID_NODE as usize {
            panic!("node arena exhausted: {} slots in use", index);
        }
        self.slots.push(Some(node));
        self.len += 1;
        index as u32
    }

    /// Take the node out of slot `index` and free the slot
    pub fn remove(&mut self, index: u32) -> N {
        match self.slots.get_mut(index as usize).and_then(Option::take) {
            Some(node) => {
                self.free_nodes.push(index);
                self.len -= 1;
                node
            }
            None => vacant_slot(index),
        }
    }

    /// Borrow the node in slot `index`
    #[inline]
    pub fn node(&self, index: u32) -> &N {
        match self.slots.get(index as usize) {
            Some(Some(node)) => node,
            _ => vacant_slot(index),
        }
    }

    /// Mutably borrow the node in slot `index`
    #[inline]
    pub fn node_mut(&mut self, index: u32) -> &mut N {
        match self.slots.get_mut(index as usize) {
            Some(Some(node)) => node,
            _ => vacant_slot(index),
        }
    }

    /// Drop every node and release the slot storage
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.free_nodes = Vec::new();
        self.len = 0;
    }
}

impl<N> Default for NodeArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// A link pointed at a slot that holds no node: the chain is corrupt
#[cold]
#[inline(never)]
fn vacant_slot(index: u32) -> ! {
    panic!("linked node {} is not allocated", index);
}
