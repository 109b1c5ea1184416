//! Gripper Search: generic best-first search over an arena of nodes.
//!
//! This crate knows nothing about blocks, arms, or goals. A caller supplies a
//! [`contract::SearchGraphV1`] (successor function), a goal predicate, a
//! [`heuristic::HeuristicV1`], and a [`policy::SearchPolicyV1`] carrying the
//! wall-clock budget.
//!
//! # Key types
//!
//! - [`node::SearchNodeV1`]: one state with `g`, `h`, and a parent handle
//! - [`node::NodeArena`]: owns every node created during one search call
//! - [`frontier::BestFirstFrontier`]: min-`f` priority queue with lazy dedup
//! - [`search::SearchOutcomeV1`]: the path, its cost, and [`stats::SearchStatsV1`]
//! - [`error::SearchError`]: `Timeout` or `Exhausted`

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
