//! Typed search failures surface through the planner with their statistics.

use std::time::Duration;

use gripper_planner::{plan, PlanError, PlannerConfig, PlanningProblemV1};
use gripper_search::error::SearchError;
use gripper_search::policy::SearchPolicyV1;
use gripper_world::goal::Relation;
use gripper_world::object::{Catalog, Color, Form, Size};
use gripper_world::state::WorldState;
use lock_tests::fixtures::{goal, lit, small_world_problem};

fn with_budget(budget: Duration) -> PlannerConfig {
    PlannerConfig {
        search: SearchPolicyV1::with_time_budget(budget),
        ..PlannerConfig::default()
    }
}

fn tiny_problem(relation: Relation, args: &[&str]) -> PlanningProblemV1 {
    PlanningProblemV1::new(
        WorldState::from_ids(&[&["x"], &["y"], &[]], 1, None),
        Catalog::new()
            .with("x", Form::Ball, Size::Small, Color::Black)
            .with("y", Form::Box, Size::Large, Color::Blue),
        goal(vec![lit(relation, args)]),
    )
}

// ---------------------------------------------------------------------------
// Timeout
// ---------------------------------------------------------------------------

#[test]
fn zero_budget_times_out_even_when_start_is_goal() {
    let problem = small_world_problem(goal(vec![lit(Relation::OnTop, &["e", "floor"])]));
    let err = plan(&problem, &with_budget(Duration::ZERO)).unwrap_err();
    assert!(err.is_timeout(), "{err}");
    let PlanError::Search(search) = err else {
        panic!("expected a search failure");
    };
    assert!(search.is_retryable());
    assert_eq!(search.stats().expansions, 0);
}

#[test]
fn impossible_goal_in_large_world_times_out() {
    // Nothing rests on a ball; the small world is far too large to exhaust.
    let problem = small_world_problem(goal(vec![lit(Relation::OnTop, &["a", "e"])]));
    let err = plan(&problem, &with_budget(Duration::from_millis(50))).unwrap_err();
    match err {
        PlanError::Search(SearchError::Timeout { budget, stats }) => {
            assert_eq!(budget, Duration::from_millis(50));
            assert!(stats.elapsed >= budget);
            assert!(stats.expansions > 0);
            assert!(stats.nodes_generated > stats.expansions);
        }
        other => panic!("expected timeout, got {other}"),
    }
}

// ---------------------------------------------------------------------------
// Exhausted
// ---------------------------------------------------------------------------

#[test]
fn nothing_can_rest_on_a_ball() {
    let problem = tiny_problem(Relation::OnTop, &["y", "x"]);
    let err = plan(&problem, &PlannerConfig::default()).unwrap_err();
    match err {
        PlanError::Search(SearchError::Exhausted { stats }) => {
            assert!(stats.expansions > 0);
            assert!(stats.frontier_high_water > 0);
        }
        other => panic!("expected exhausted, got {other}"),
    }
}

#[test]
fn nothing_is_ever_above_a_ball_with_or_without_pruning() {
    for prune_reversals in [true, false] {
        let config = PlannerConfig {
            prune_reversals,
            ..PlannerConfig::default()
        };
        let err = plan(&tiny_problem(Relation::Above, &["y", "x"]), &config).unwrap_err();
        assert!(
            matches!(err, PlanError::Search(SearchError::Exhausted { .. })),
            "prune_reversals={prune_reversals}: {err}"
        );
    }
}

#[test]
fn floor_as_subject_is_never_satisfied() {
    let problem = tiny_problem(Relation::OnTop, &["floor", "y"]);
    let err = plan(&problem, &PlannerConfig::default()).unwrap_err();
    assert!(matches!(err, PlanError::Search(SearchError::Exhausted { .. })));
}

#[test]
fn exhausted_is_not_retryable() {
    let problem = tiny_problem(Relation::OnTop, &["y", "x"]);
    let err = plan(&problem, &PlannerConfig::default()).unwrap_err();
    assert!(!err.is_timeout());
}
