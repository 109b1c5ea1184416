//! Typed world validation failures.
//!
//! The planner core never validates its inputs; these errors are produced
//! only by [`crate::state::WorldState::validate`], which problem loaders call
//! at the boundary.

use crate::object::ObjectId;
use crate::physics::SupportViolation;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// A world must have at least one column.
    #[error("world has no columns")]
    NoColumns,
    /// The arm is positioned outside the column range.
    #[error("arm column {arm} is out of range for {columns} columns")]
    ArmOutOfRange { arm: usize, columns: usize },
    /// An entity appears in a column or the gripper but not in the catalog.
    #[error("object {id} is not described in the catalog")]
    UnknownObject { id: ObjectId },
    /// An entity appears in more than one location.
    #[error("object {id} appears more than once")]
    DuplicateObject { id: ObjectId },
    /// Two adjacent entities in a column violate the support rules.
    #[error("object {upper} cannot rest on {lower} in column {column}: {violation}")]
    UnsupportedStack {
        column: usize,
        lower: ObjectId,
        upper: ObjectId,
        violation: SupportViolation,
    },
}
