//! The heuristic and the goal test agree: an estimate is zero exactly when
//! the literal holds, on every reachable state.

use proptest::prelude::*;

use gripper_planner::heuristic::{formula_estimate, literal_estimate, UNREACHABLE_COST};
use gripper_planner::ConjunctionCost;
use gripper_world::action::successors;
use gripper_world::goal::{GoalFormula, Literal, Relation};
use gripper_world::state::WorldState;
use lock_tests::fixtures::{lit, small_world_catalog, small_world_state};

const IDS: [&str; 13] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m"];

const BINARY: [Relation; 7] = [
    Relation::LeftOf,
    Relation::RightOf,
    Relation::Beside,
    Relation::OnTop,
    Relation::Inside,
    Relation::Above,
    Relation::Under,
];

fn reachable(choices: &[usize]) -> WorldState {
    let catalog = small_world_catalog();
    choices.iter().fold(small_world_state(), |state, &choice| {
        let options = successors(&state, &catalog);
        options[choice % options.len()].1.clone()
    })
}

fn literal_strategy() -> impl Strategy<Value = Literal> {
    let binary = (0..BINARY.len(), 0..IDS.len(), 0..=IDS.len()).prop_map(|(r, x, y)| {
        let second = IDS.get(y).copied().unwrap_or("floor");
        lit(BINARY[r], &[IDS[x], second])
    });
    let holding = (0..IDS.len()).prop_map(|x| lit(Relation::Holding, &[IDS[x]]));
    prop_oneof![4 => binary, 1 => holding]
}

fn conjunction_strategy() -> impl Strategy<Value = Vec<Literal>> {
    prop::collection::vec(literal_strategy(), 1..3)
}

proptest! {
    #[test]
    fn literal_estimate_is_zero_iff_satisfied(
        choices in prop::collection::vec(any::<usize>(), 0..50),
        literal in literal_strategy(),
    ) {
        let state = reachable(&choices);
        let estimate = literal_estimate(literal.requirement(), &state);
        let satisfied = literal.is_satisfied(&state);
        prop_assert_eq!(estimate == 0, satisfied, "{} -> {}", literal, estimate);
        prop_assert!(estimate <= UNREACHABLE_COST);
    }

    #[test]
    fn formula_estimate_is_zero_iff_goal_holds(
        choices in prop::collection::vec(any::<usize>(), 0..50),
        conjunctions in prop::collection::vec(conjunction_strategy(), 1..3),
    ) {
        let state = reachable(&choices);
        let goal = GoalFormula::new(conjunctions);
        for strategy in [ConjunctionCost::Sum, ConjunctionCost::Max] {
            let estimate = formula_estimate(&goal, &state, strategy);
            prop_assert_eq!(estimate == 0, goal.is_satisfied(&state));
        }
    }

    #[test]
    fn max_never_exceeds_sum(
        choices in prop::collection::vec(any::<usize>(), 0..50),
        literals in prop::collection::vec(literal_strategy(), 1..4),
    ) {
        let state = reachable(&choices);
        let goal = GoalFormula::all_of(literals);
        prop_assert!(
            formula_estimate(&goal, &state, ConjunctionCost::Max)
                <= formula_estimate(&goal, &state, ConjunctionCost::Sum)
        );
    }
}

#[test]
fn negative_literals_are_ignored_by_both() {
    let state = small_world_state();
    let mut negative = lit(Relation::Holding, &["e"]);
    negative.polarity = false;
    assert!(negative.is_satisfied(&state));
    assert_eq!(literal_estimate(negative.requirement(), &state), 0);
}
