//! Gripper World: the blocks-world domain model.
//!
//! This crate knows about entities, columns, the single arm, the physical
//! support rules that gate a drop, and the DNF goal formulas handed down by
//! the language front end. It knows nothing about search.
//!
//! # Crate dependency graph
//!
//! ```text
//! gripper_world  ←  gripper_planner  →  gripper_search
//! (state, rules)    (adapter, heuristic)  (frontier, arena)
//! ```
//!
//! # Key types
//!
//! - [`state::WorldState`]: arm column, held entity, and columns (value semantics)
//! - [`object::Catalog`]: immutable entity id → {form, size, color} mapping
//! - [`action::Action`]: `left | right | pick | drop`
//! - [`physics::SupportViolation`]: why a drop is physically illegal
//! - [`goal::GoalFormula`]: disjunction of conjunctions of [`goal::Literal`]s

#![forbid(unsafe_code)]

pub mod action;
pub mod error;
pub mod goal;
pub mod object;
pub mod physics;
pub mod state;
