//! Gripper Planner: plans arm actions that satisfy a DNF goal formula.
//!
//! The planner plugs the blocks world (`gripper_world`) into the generic
//! best-first engine (`gripper_search`):
//!
//! ```text
//! PlanningProblemV1 ─► validate ─► BlocksWorldGraph + GoalHeuristic
//!   ─► gripper_search::search ─► assemble_plan ─► PlanV1
//! ```
//!
//! The planner does not parse language or narrate steps; it receives an
//! already-resolved goal formula and returns action labels.

#![forbid(unsafe_code)]

pub mod adapter;
pub mod config;
pub mod digest;
pub mod error;
pub mod heuristic;
pub mod plan;
pub mod problem;
pub mod runner;

pub use config::{ConjunctionCost, PlannerConfig};
pub use error::PlanError;
pub use plan::PlanV1;
pub use problem::PlanningProblemV1;
pub use runner::plan;
