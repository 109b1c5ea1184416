//! Plan assembly: search path → ordered action labels.

use serde::{Deserialize, Serialize};

use gripper_search::search::SearchOutcomeV1;
use gripper_search::stats::SearchStatsV1;
use gripper_world::action::Action;
use gripper_world::state::WorldState;

/// Serializable summary of the search that produced a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStatsV1 {
    pub expansions: u64,
    pub nodes_generated: u64,
    pub duplicates_discarded: u64,
    pub frontier_high_water: u64,
    pub elapsed_ms: u64,
}

impl From<&SearchStatsV1> for PlanStatsV1 {
    fn from(stats: &SearchStatsV1) -> Self {
        Self {
            expansions: stats.expansions,
            nodes_generated: stats.nodes_generated,
            duplicates_discarded: stats.duplicates_discarded,
            frontier_high_water: stats.frontier_high_water,
            elapsed_ms: u64::try_from(stats.elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// A plan: the actions to perform, in order, and their total cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanV1 {
    pub actions: Vec<Action>,
    /// Equals `actions.len()`: every action costs 1.
    pub cost: u64,
    /// The state the plan ends in.
    pub final_state: WorldState,
    pub stats: PlanStatsV1,
    /// Digest of the problem this plan answers (see [`crate::digest`]).
    pub problem_digest: String,
}

impl PlanV1 {
    /// Whether the goal already held in the initial state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Action labels (`"left"`, `"right"`, `"pick"`, `"drop"`).
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.actions.iter().map(|a| a.label()).collect()
    }
}

/// Turn a search outcome into a plan. The root path entry carries no action
/// and is skipped.
#[must_use]
pub fn assemble_plan(
    outcome: SearchOutcomeV1<WorldState, Action>,
    problem_digest: String,
) -> PlanV1 {
    let stats = PlanStatsV1::from(&outcome.stats);
    let cost = outcome.cost;
    let mut path = outcome.path;
    let actions = path.iter().filter_map(|step| step.action).collect();
    let final_state = path.pop().map(|step| step.state).unwrap_or_default();
    PlanV1 {
        actions,
        cost,
        final_state,
        stats,
        problem_digest,
    }
}
