//! Heuristic estimator trait.

/// Trait for frontier-ranking cost estimates.
///
/// Estimates are non-negative integers used only to order the frontier.
/// They need not be admissible or consistent; the engine does not re-open
/// closed states, so an inconsistent heuristic can yield a longer-than-optimal
/// path but never an incorrect one.
pub trait HeuristicV1<S> {
    /// Estimated remaining cost from `state` to a goal.
    fn estimate(&self, state: &S) -> u64;
}

/// Closures are heuristics.
impl<S, F> HeuristicV1<S> for F
where
    F: Fn(&S) -> u64,
{
    fn estimate(&self, state: &S) -> u64 {
        self(state)
    }
}

/// Always estimates 0, turning best-first search into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S> HeuristicV1<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> u64 {
        0
    }
}
