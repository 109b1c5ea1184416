//! Worlds and goals reused across lock tests.

use std::path::{Path, PathBuf};

use gripper_planner::PlanningProblemV1;
use gripper_world::goal::{GoalFormula, Literal, Relation};
use gripper_world::object::Catalog;
use gripper_world::state::WorldState;

/// Absolute path to a file under `tests/fixtures/`.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("fixtures")
        .join(name)
}

/// The thirteen-entity, ten-column world from `tests/fixtures/small_world.json`,
/// with the goal stored in that file.
///
/// # Panics
///
/// If the fixture is missing or invalid.
#[must_use]
pub fn small_world() -> PlanningProblemV1 {
    let path = fixture_path("small_world.json");
    PlanningProblemV1::load(&path)
        .unwrap_or_else(|e| panic!("fixture {} failed to load: {e}", path.display()))
}

#[must_use]
pub fn small_world_catalog() -> Catalog {
    small_world().world.objects
}

#[must_use]
pub fn small_world_state() -> WorldState {
    small_world().world.state
}

/// The small world with a caller-supplied goal.
#[must_use]
pub fn small_world_problem(goal: GoalFormula) -> PlanningProblemV1 {
    PlanningProblemV1 {
        goal,
        ..small_world()
    }
}

/// A positive literal over string arguments (`"floor"` included).
#[must_use]
pub fn lit(relation: Relation, args: &[&str]) -> Literal {
    Literal::new(relation, args.iter().copied())
}

/// A goal with a single conjunction.
#[must_use]
pub fn goal(literals: Vec<Literal>) -> GoalFormula {
    GoalFormula::all_of(literals)
}
