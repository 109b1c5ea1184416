//! Goal-distance heuristic for the blocks world.
//!
//! The estimate for a formula is the minimum over its conjunctions; each
//! conjunction combines its literal estimates with a [`ConjunctionCost`]
//! strategy. A literal estimates to exactly 0 when the goal test says it
//! holds, and to a strictly positive value otherwise.
//!
//! The estimate is not admissible. [`EXPOSE_COST`] charges four actions per
//! obstructing entity (pick, move, drop, return), and summing literals counts
//! shared moves twice.

use gripper_search::heuristic::HeuristicV1;
use gripper_world::goal::{GoalFormula, Requirement};
use gripper_world::object::ObjectId;
use gripper_world::state::{Location, WorldState};

use crate::config::ConjunctionCost;

/// Cost charged per entity that must be moved out of the way.
pub const EXPOSE_COST: u64 = 4;

/// Estimate for literals that no sequence of actions can satisfy (unknown
/// entity, `floor` as subject, `leftof` in a one-column world). Large but
/// finite so that `g + h` still orders.
pub const UNREACHABLE_COST: u64 = u32::MAX as u64;

/// The planner heuristic bound to one goal formula.
#[derive(Debug, Clone, Copy)]
pub struct GoalHeuristic<'a> {
    goal: &'a GoalFormula,
    conjunction_cost: ConjunctionCost,
}

impl<'a> GoalHeuristic<'a> {
    #[must_use]
    pub fn new(goal: &'a GoalFormula, conjunction_cost: ConjunctionCost) -> Self {
        Self {
            goal,
            conjunction_cost,
        }
    }
}

impl HeuristicV1<WorldState> for GoalHeuristic<'_> {
    fn estimate(&self, state: &WorldState) -> u64 {
        formula_estimate(self.goal, state, self.conjunction_cost)
    }
}

/// Heuristic with the default (`Sum`) conjunction strategy.
#[must_use]
pub fn heuristic(goal: &GoalFormula, state: &WorldState) -> u64 {
    formula_estimate(goal, state, ConjunctionCost::Sum)
}

/// Minimum over conjunctions of the combined literal estimates.
///
/// An empty formula estimates 0.
#[must_use]
pub fn formula_estimate(goal: &GoalFormula, state: &WorldState, strategy: ConjunctionCost) -> u64 {
    goal.conjunctions()
        .iter()
        .map(|conjunction| {
            strategy.combine(
                conjunction
                    .iter()
                    .map(|literal| literal_estimate(literal.requirement(), state)),
            )
        })
        .min()
        .unwrap_or(0)
}

/// Estimate for a single normalized literal.
#[must_use]
pub fn literal_estimate(requirement: Requirement<'_>, state: &WorldState) -> u64 {
    if requirement.is_satisfied(state) {
        return 0;
    }
    let estimate = match requirement {
        Requirement::Holding(x) => holding_cost(state, x),
        Requirement::LeftOf(x, y) => left_of_cost(state, x, y),
        Requirement::Beside(x, y) => beside_cost(state, x, y),
        Requirement::OnTop(x, y) => stack_cost(state, x, y, true),
        Requirement::OnFloor(x) => floor_cost(state, x),
        Requirement::Above(x, y) => stack_cost(state, x, y, false),
        Requirement::Unconstrained => Some(0),
        Requirement::Malformed => None,
    };
    estimate.unwrap_or(UNREACHABLE_COST)
}

fn distance(a: usize, b: usize) -> u64 {
    a.abs_diff(b) as u64
}

fn exposure(state: &WorldState, location: Location) -> u64 {
    EXPOSE_COST.saturating_mul(state.objects_above(location) as u64)
}

fn holding_cost(state: &WorldState, x: &ObjectId) -> Option<u64> {
    match state.locate(x)? {
        Location::Held => Some(0),
        location @ Location::Stacked { column, .. } => {
            let hand = if state.holding.is_none() { 1 } else { 2 };
            Some(distance(state.arm, column) + exposure(state, location) + hand)
        }
    }
}

/// Cheapest way to carry `mover` to any column in `targets`: uncover it, travel
/// to it, carry it, and pick/drop (1 if already held, else 2).
fn relocate_cost(
    state: &WorldState,
    mover: Location,
    targets: impl IntoIterator<Item = usize>,
) -> Option<u64> {
    targets
        .into_iter()
        .map(|target| match mover {
            Location::Held => distance(state.arm, target) + 1,
            Location::Stacked { column, .. } => {
                exposure(state, mover)
                    + distance(state.arm, column)
                    + distance(column, target)
                    + 2
            }
        })
        .min()
}

fn left_of_cost(state: &WorldState, x: &ObjectId, y: &ObjectId) -> Option<u64> {
    let (lx, ly) = (state.locate(x)?, state.locate(y)?);
    if state.column_count() < 2 {
        return None;
    }
    let last = state.last_column();
    // Move x anywhere left of y, or y anywhere right of x. An entity already
    // at the boundary column (or held) leaves the corresponding range empty.
    let move_x = ly.column().and_then(|cy| relocate_cost(state, lx, 0..cy));
    let move_y = lx
        .column()
        .and_then(|cx| relocate_cost(state, ly, cx + 1..=last));
    min_option(move_x, move_y).or_else(|| {
        // Both must move: y off column 0, x off the last column. A held
        // entity is dropped as part of its relocation.
        let y_right = relocate_cost(state, ly, 1..=last)?;
        let x_left = relocate_cost(state, lx, 0..last)?;
        Some(y_right + x_left)
    })
}

fn beside_cost(state: &WorldState, x: &ObjectId, y: &ObjectId) -> Option<u64> {
    let (lx, ly) = (state.locate(x)?, state.locate(y)?);
    let last = state.last_column();
    let neighbours = |c: usize| {
        [c.checked_sub(1), c.checked_add(1).filter(|&n| n <= last)]
            .into_iter()
            .flatten()
    };
    let move_x = ly.column().and_then(|cy| relocate_cost(state, lx, neighbours(cy)));
    let move_y = lx.column().and_then(|cx| relocate_cost(state, ly, neighbours(cx)));
    min_option(move_x, move_y)
}

/// `ontop`/`inside` (`direct`) and `above`: carry x onto y's column. Only a
/// direct placement needs y uncovered.
fn stack_cost(state: &WorldState, x: &ObjectId, y: &ObjectId, direct: bool) -> Option<u64> {
    let (lx, ly) = (state.locate(x)?, state.locate(y)?);
    match (lx, ly) {
        (Location::Held, Location::Held) => None,
        // y must be put down first (here), then x fetched and brought back.
        (Location::Stacked { column: cx, .. }, Location::Held) => {
            Some(1 + exposure(state, lx) + 2 * distance(state.arm, cx) + 2)
        }
        (Location::Held, Location::Stacked { column: cy, .. }) => {
            let uncover = if direct { exposure(state, ly) } else { 0 };
            Some(uncover + distance(state.arm, cy) + 1)
        }
        (Location::Stacked { column: cx, .. }, Location::Stacked { column: cy, .. }) => {
            let uncover = if direct { exposure(state, ly) } else { 0 };
            let carry = distance(state.arm, cx) + distance(cx, cy) + 2;
            Some(uncover + exposure(state, lx) + carry)
        }
    }
}

/// Carry x to the column that is cheapest to clear, 4 per resident entity.
fn floor_cost(state: &WorldState, x: &ObjectId) -> Option<u64> {
    let location = state.locate(x)?;
    let clear = |t: usize| EXPOSE_COST.saturating_mul(state.column_height(t) as u64);
    match location {
        Location::Held => (0..state.column_count())
            .map(|t| clear(t) + distance(state.arm, t) + 1)
            .min(),
        Location::Stacked { column, .. } => (0..state.column_count())
            .filter(|&t| t != column)
            .map(|t| {
                clear(t)
                    + exposure(state, location)
                    + distance(state.arm, column)
                    + distance(column, t)
                    + 2
            })
            .min(),
    }
}

fn min_option(a: Option<u64>, b: Option<u64>) -> Option<u64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
