//! Search graph contract trait.

use std::hash::Hash;

/// One outgoing edge: the action taken, the resulting state, and its cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeV1<S, A> {
    pub action: A,
    pub state: S,
    pub cost: u64,
}

/// Trait for state spaces that support search.
///
/// # Contract
///
/// - `successors` must not mutate `state`; each edge carries its own copy of
///   the successor state.
/// - Enumeration must be deterministic: same `(state, incoming)` → same edges
///   in the same order.
/// - `incoming` is the action that produced `state` (`None` at the root). A
///   graph may use it to skip an edge that exactly reverses it; skipping such
///   edges must never make a reachable goal unreachable.
pub trait SearchGraphV1 {
    /// State type. Equality and hashing must be structural: the closed set
    /// treats equal states as the same vertex.
    type State: Clone + Eq + Hash;
    /// Action label carried on edges and reported in the path.
    type Action: Clone;

    /// Enumerate every legal outgoing edge from `state`.
    fn successors(
        &self,
        state: &Self::State,
        incoming: Option<&Self::Action>,
    ) -> Vec<EdgeV1<Self::State, Self::Action>>;
}
