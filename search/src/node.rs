//! Search nodes and the per-call node arena.
//!
//! Nodes refer to their parent by [`NodeId`], an index into the
//! [`NodeArena`] that owns them. There are no owning or shared parent
//! pointers: the whole arena is dropped in one piece when the search call
//! returns.

/// Handle to a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in creation order (root = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A search node.
///
/// Ordering for frontier extraction uses `(f_cost, depth, creation_order)`
/// where `f_cost = g_cost + h_cost`. Lower is better; ties broken by
/// shallower depth, then older creation order.
#[derive(Debug, Clone)]
pub struct SearchNodeV1<S, A> {
    /// Full state at this node (owned copy).
    pub state: S,
    /// Parent handle (`None` for root).
    pub parent: Option<NodeId>,
    /// The action that produced this node from its parent (`None` for root).
    pub action: Option<A>,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Cumulative path cost.
    pub g_cost: u64,
    /// Heuristic estimate.
    pub h_cost: u64,
}

impl<S, A> SearchNodeV1<S, A> {
    /// Compute `f_cost = g_cost + h_cost` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// The frontier ordering key: `(f_cost, depth, creation_order)`.
///
/// Lower `f_cost` first, then shallower depth, then older `creation_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub depth: u32,
    pub creation_order: u64,
}

/// Owns every node created during one search call.
#[derive(Debug)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNodeV1<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Store a node and return its handle.
    pub fn push(&mut self, node: SearchNodeV1<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Look up a node. Handles are only minted by [`NodeArena::push`], so a
    /// handle from this arena is always valid.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNodeV1<S, A> {
        &self.nodes[id.0]
    }

    /// The frontier key for a node; `creation_order` is the arena index.
    #[must_use]
    pub fn key(&self, id: NodeId) -> FrontierKey {
        let node = self.get(id);
        FrontierKey {
            f_cost: node.f_cost(),
            depth: node.depth,
            creation_order: id.0 as u64,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
