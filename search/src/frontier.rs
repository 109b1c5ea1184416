//! Best-first frontier with lazy duplicate handling.
//!
//! The frontier does not deduplicate on push: several entries may refer to
//! structurally equal states. The search loop filters them against the
//! closed set when they are popped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, NodeId};

/// A frontier entry: the ordering key plus the arena handle.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first). `NodeId` follows
/// `creation_order`, so deriving `Ord` on the tuple is consistent.
type FrontierEntry = (Reverse<FrontierKey>, NodeId);

/// Best-first frontier.
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a node handle with its ordering key.
    pub fn push(&mut self, key: FrontierKey, id: NodeId) {
        self.heap.push((Reverse(key), id));
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best (lowest key) node handle.
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|(_, id)| id)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
