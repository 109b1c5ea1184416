//! Search entry point and expansion loop.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, trace};

use crate::contract::SearchGraphV1;
use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::heuristic::HeuristicV1;
use crate::node::{NodeArena, NodeId, SearchNodeV1};
use crate::policy::SearchPolicyV1;
use crate::stats::SearchStatsV1;

/// One step of a solution path.
///
/// The first step is the root: it has no action and `g_cost == 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStepV1<S, A> {
    pub state: S,
    pub action: Option<A>,
    pub g_cost: u64,
    pub h_cost: u64,
}

/// A successful search.
#[derive(Debug, Clone)]
pub struct SearchOutcomeV1<S, A> {
    /// Root-to-goal path, root first.
    pub path: Vec<PathStepV1<S, A>>,
    /// Total path cost (`g` of the goal node).
    pub cost: u64,
    pub stats: SearchStatsV1,
}

impl<S, A: Clone> SearchOutcomeV1<S, A> {
    /// The actions along the path, root excluded.
    #[must_use]
    pub fn actions(&self) -> Vec<A> {
        self.path.iter().filter_map(|step| step.action.clone()).collect()
    }

    /// The goal state (last path step).
    #[must_use]
    pub fn goal_state(&self) -> Option<&S> {
        self.path.last().map(|step| &step.state)
    }
}

/// Run best-first search from `start`.
///
/// Pops the lowest `(f, depth, creation_order)` node each iteration. A popped
/// node whose state is already closed is discarded; otherwise it is tested
/// against `is_goal`, closed, and expanded. Closed states are never re-opened,
/// so an inconsistent heuristic may produce a longer path than optimal.
///
/// # Errors
///
/// - [`SearchError::Exhausted`] if the frontier empties without a goal.
/// - [`SearchError::Timeout`] if `policy.time_budget` has elapsed at a pop.
///   The budget is checked before every pop, so a zero budget always times out.
pub fn search<G, P, H>(
    graph: &G,
    start: G::State,
    is_goal: P,
    heuristic: &H,
    policy: &SearchPolicyV1,
) -> Result<SearchOutcomeV1<G::State, G::Action>, SearchError>
where
    G: SearchGraphV1,
    P: Fn(&G::State) -> bool,
    H: HeuristicV1<G::State> + ?Sized,
{
    let clock = Instant::now();
    let mut stats = SearchStatsV1::default();
    let mut arena: NodeArena<G::State, G::Action> = NodeArena::new();
    let mut frontier = BestFirstFrontier::new();
    let mut closed: HashSet<G::State> = HashSet::new();

    let root_h = heuristic.estimate(&start);
    let root = arena.push(SearchNodeV1 {
        state: start,
        parent: None,
        action: None,
        depth: 0,
        g_cost: 0,
        h_cost: root_h,
    });
    stats.nodes_generated += 1;
    frontier.push(arena.key(root), root);
    debug!(h = root_h, budget = ?policy.time_budget, "search started");

    loop {
        if frontier.is_empty() {
            stats.frontier_high_water = frontier.high_water();
            stats.elapsed = clock.elapsed();
            debug!(expansions = stats.expansions, "frontier exhausted");
            return Err(SearchError::Exhausted { stats });
        }

        let elapsed = clock.elapsed();
        if elapsed >= policy.time_budget {
            stats.frontier_high_water = frontier.high_water();
            stats.elapsed = elapsed;
            debug!(
                expansions = stats.expansions,
                frontier = frontier.len(),
                "time budget exhausted"
            );
            return Err(SearchError::Timeout {
                budget: policy.time_budget,
                stats,
            });
        }

        let Some(current) = frontier.pop() else {
            continue;
        };
        let node = arena.get(current);

        if closed.contains(&node.state) {
            stats.duplicates_discarded += 1;
            continue;
        }

        if is_goal(&node.state) {
            let cost = node.g_cost;
            stats.frontier_high_water = frontier.high_water();
            stats.elapsed = clock.elapsed();
            debug!(
                cost,
                expansions = stats.expansions,
                nodes = stats.nodes_generated,
                "goal reached"
            );
            let path = reconstruct_path(&arena, current)
                .into_iter()
                .map(|id| {
                    let n = arena.get(id);
                    PathStepV1 {
                        state: n.state.clone(),
                        action: n.action.clone(),
                        g_cost: n.g_cost,
                        h_cost: n.h_cost,
                    }
                })
                .collect();
            return Ok(SearchOutcomeV1 { path, cost, stats });
        }

        let (g_cost, depth) = (node.g_cost, node.depth);
        trace!(node = current.index(), g = g_cost, h = node.h_cost, "expanding");
        let edges = graph.successors(&node.state, node.action.as_ref());
        closed.insert(node.state.clone());
        stats.expansions += 1;

        for edge in edges {
            if closed.contains(&edge.state) {
                stats.closed_skips += 1;
                continue;
            }
            let h_cost = heuristic.estimate(&edge.state);
            let child = arena.push(SearchNodeV1 {
                state: edge.state,
                parent: Some(current),
                action: Some(edge.action),
                depth: depth + 1,
                g_cost: g_cost.saturating_add(edge.cost),
                h_cost,
            });
            stats.nodes_generated += 1;
            frontier.push(arena.key(child), child);
        }
    }
}

/// Reconstruct the handle path from the root to `goal`, root first.
#[must_use]
pub fn reconstruct_path<S, A>(arena: &NodeArena<S, A>, goal: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);

    while let Some(id) = current {
        path.push(id);
        current = arena.get(id).parent;
    }

    path.reverse();
    path
}
