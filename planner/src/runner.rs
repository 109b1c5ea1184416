//! Planner runner: wires a problem into the search engine and assembles a plan.
//!
//! # Pipeline
//!
//! ```text
//! problem_digest() → BlocksWorldGraph::new() → GoalHeuristic::new()
//!   → search() → assemble_plan()
//! ```
//!
//! The runner does not validate; callers load problems through
//! [`PlanningProblemV1::from_json_str`] or call
//! [`PlanningProblemV1::validate`] themselves.

use tracing::{info, info_span, warn};

use gripper_search::search::search;
use gripper_world::goal::is_goal;

use crate::adapter::BlocksWorldGraph;
use crate::config::PlannerConfig;
use crate::digest::problem_digest;
use crate::error::PlanError;
use crate::heuristic::GoalHeuristic;
use crate::plan::{assemble_plan, PlanV1};
use crate::problem::PlanningProblemV1;

/// Plan a sequence of actions that reaches a state satisfying `problem.goal`.
///
/// # Errors
///
/// - [`PlanError::Search`] wrapping `Timeout` when the time budget runs out,
///   or `Exhausted` when no reachable state satisfies the goal.
/// - [`PlanError::Json`] if the problem cannot be digested.
pub fn plan(problem: &PlanningProblemV1, config: &PlannerConfig) -> Result<PlanV1, PlanError> {
    let digest = problem_digest(problem)?;
    let span = info_span!("plan", problem = %digest);
    let _guard = span.enter();

    if problem.goal.has_negative_literals() {
        warn!("goal contains negative literals; they are ignored");
    }

    let graph = BlocksWorldGraph::new(&problem.world.objects, config.prune_reversals);
    let heuristic = GoalHeuristic::new(&problem.goal, config.conjunction_cost);
    let outcome = search(
        &graph,
        problem.world.state.clone(),
        |state| is_goal(&problem.goal, state),
        &heuristic,
        &config.search,
    )?;

    let plan = assemble_plan(outcome, digest);
    info!(
        cost = plan.cost,
        expansions = plan.stats.expansions,
        elapsed_ms = plan.stats.elapsed_ms,
        "plan found"
    );
    Ok(plan)
}
