//! Shared helpers for gripper benchmark suites.

#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use gripper_planner::{PlanError, PlanningProblemV1};
use gripper_world::goal::{GoalFormula, Literal, Relation};
use gripper_world::object::Catalog;
use gripper_world::state::WorldState;

/// A planning regime: a named goal over the benchmark world.
pub struct Regime {
    pub name: &'static str,
    pub goal: GoalFormula,
}

/// Path to the shared small-world fixture (`tests/fixtures/small_world.json`).
#[must_use]
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("tests")
        .join("fixtures")
        .join("small_world.json")
}

/// Ten columns, thirteen entities, arm at the left edge.
///
/// # Errors
///
/// Returns a [`PlanError`] if the fixture cannot be read or is invalid.
pub fn bench_world() -> Result<(WorldState, Catalog), PlanError> {
    let problem = PlanningProblemV1::load(&fixture_path())?;
    Ok((problem.world.state, problem.world.objects))
}

fn lit(relation: Relation, args: &[&str]) -> Literal {
    Literal::new(relation, args.iter().copied())
}

/// Goals of increasing difficulty, cheapest first.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "ball_in_box",
            goal: GoalFormula::all_of(vec![lit(Relation::Inside, &["e", "l"])]),
        },
        Regime {
            name: "far_fetch",
            goal: GoalFormula::all_of(vec![lit(Relation::Holding, &["f"])]),
        },
        Regime {
            name: "unstack_to_floor",
            goal: GoalFormula::all_of(vec![lit(Relation::OnTop, &["b", "floor"])]),
        },
        Regime {
            name: "two_literals",
            goal: GoalFormula::all_of(vec![
                lit(Relation::Inside, &["e", "l"]),
                lit(Relation::Beside, &["b", "f"]),
            ]),
        },
    ]
}

/// The benchmark world paired with a regime's goal.
///
/// # Errors
///
/// As [`bench_world`].
pub fn problem(regime: &Regime) -> Result<PlanningProblemV1, PlanError> {
    let (state, catalog) = bench_world()?;
    Ok(PlanningProblemV1::new(state, catalog, regime.goal.clone()))
}
