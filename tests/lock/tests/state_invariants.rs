//! Transition invariants over random walks through the small world.

use proptest::prelude::*;

use gripper_planner::adapter::BlocksWorldGraph;
use gripper_search::contract::SearchGraphV1;
use gripper_world::action::{apply, successors, Action, ApplyFailure, ACTION_COST};
use gripper_world::object::{Form, Size};
use gripper_world::state::WorldState;
use lock_tests::fixtures::{small_world_catalog, small_world_state};

/// Follow `choices` from the small-world start, taking the `n % len`-th
/// legal successor at each step.
fn walk(choices: &[usize]) -> Vec<(Action, WorldState)> {
    let catalog = small_world_catalog();
    let mut state = small_world_state();
    let mut steps = Vec::with_capacity(choices.len());
    for &choice in choices {
        let options = successors(&state, &catalog);
        let (action, next) = options[choice % options.len()].clone();
        steps.push((action, next.clone()));
        state = next;
    }
    steps
}

proptest! {
    #[test]
    fn entities_are_conserved(choices in prop::collection::vec(any::<usize>(), 0..60)) {
        let catalog = small_world_catalog();
        let start = small_world_state();
        for (_, state) in walk(&choices) {
            prop_assert_eq!(state.object_count(), start.object_count());
            prop_assert_eq!(state.column_count(), start.column_count());
            prop_assert!(state.validate(&catalog).is_ok());
        }
    }

    #[test]
    fn every_action_is_undone_by_its_inverse(
        choices in prop::collection::vec(any::<usize>(), 1..40),
    ) {
        let catalog = small_world_catalog();
        let mut before = small_world_state();
        for (action, after) in walk(&choices) {
            let restored = apply(&after, action.inverse(), &catalog);
            prop_assert_eq!(
                restored.as_ref(),
                Ok(&before),
                "{} then {}",
                action,
                action.inverse()
            );
            before = after;
        }
    }

    #[test]
    fn no_box_ever_holds_a_same_size_box(
        choices in prop::collection::vec(any::<usize>(), 0..80),
    ) {
        let catalog = small_world_catalog();
        for (_, state) in walk(&choices) {
            for stack in &state.stacks {
                for pair in stack.windows(2) {
                    let lower = catalog.get(&pair[0]).unwrap();
                    let upper = catalog.get(&pair[1]).unwrap();
                    let same_size_boxes = lower.form == Form::Box
                        && upper.form == Form::Box
                        && lower.size == upper.size;
                    prop_assert!(!same_size_boxes, "{} inside {}", pair[1], pair[0]);
                    let large_on_small = lower.size == Size::Small && upper.size == Size::Large;
                    prop_assert!(!large_on_small);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Fixed transitions
// ---------------------------------------------------------------------------

/// Walk `actions` through the unpruned graph, returning the final state and
/// the summed edge cost.
fn follow_edges(start: &WorldState, actions: &[Action]) -> (WorldState, u64) {
    let catalog = small_world_catalog();
    let graph = BlocksWorldGraph::new(&catalog, false);
    let mut state = start.clone();
    let mut cost = 0;
    let mut incoming = None;
    for &action in actions {
        let edge = graph
            .successors(&state, incoming.as_ref())
            .into_iter()
            .find(|e| e.action == action)
            .unwrap_or_else(|| panic!("{action} not offered"));
        cost += edge.cost;
        state = edge.state;
        incoming = Some(action);
    }
    (state, cost)
}

#[test]
fn left_right_and_pick_drop_round_trip_at_cost_two() {
    let start = small_world_state();

    let (back, cost) = follow_edges(&start, &[Action::Right, Action::Left]);
    assert_eq!(back, start);
    assert_eq!(cost, 2 * ACTION_COST);

    let (dropped, cost) = follow_edges(&start, &[Action::Pick, Action::Drop]);
    assert_eq!(dropped, start);
    assert_eq!(cost, 2 * ACTION_COST);
}

#[test]
fn large_ball_cannot_go_on_a_table() {
    let catalog = small_world_catalog();
    let holding_e = WorldState::from_ids(&[&[], &["g"]], 1, Some("e"));
    assert!(matches!(
        apply(&holding_e, Action::Drop, &catalog),
        Err(ApplyFailure::Unsupported { .. })
    ));
}

#[test]
fn edges_and_hand_constrain_the_start() {
    let catalog = small_world_catalog();
    let start = small_world_state();
    let actions: Vec<Action> = successors(&start, &catalog)
        .into_iter()
        .map(|(a, _)| a)
        .collect();
    assert_eq!(actions, vec![Action::Right, Action::Pick]);
    assert_eq!(apply(&start, Action::Left, &catalog), Err(ApplyFailure::AtLeftEdge));
    assert_eq!(apply(&start, Action::Drop, &catalog), Err(ApplyFailure::HandEmpty));
}
