//! `WorldState`: arm position, gripper contents, and the columns.
//!
//! # Equality semantics
//!
//! `WorldState` derives `Eq` and `Hash` structurally, so two states compare
//! equal iff the arm column, the held entity, and every column (bottom to
//! top) are identical. The search closed set relies on this.
//!
//! # Copy semantics
//!
//! Every transition produces a fresh `WorldState` via `Clone`; nothing is
//! mutated through a reference shared between search nodes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::WorldError;
use crate::object::{Catalog, ObjectId};
use crate::physics::check_support;

/// Where an entity currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// In the gripper.
    Held,
    /// In `column`, at `height` positions above the floor (0 = on the floor).
    Stacked { column: usize, height: usize },
}

impl Location {
    /// The column index, or `None` if the entity is held.
    #[must_use]
    pub const fn column(self) -> Option<usize> {
        match self {
            Self::Held => None,
            Self::Stacked { column, .. } => Some(column),
        }
    }
}

/// One configuration of the world.
///
/// Invariant: every entity appears exactly once across `stacks` and
/// `holding`. The number of columns is fixed for a planning problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldState {
    /// Column the arm is positioned over.
    pub arm: usize,
    /// The entity in the gripper, if any.
    pub holding: Option<ObjectId>,
    /// Columns, each listed bottom to top.
    pub stacks: Vec<Vec<ObjectId>>,
}

impl WorldState {
    /// Build a state from string ids. Intended for fixtures and tests.
    #[must_use]
    pub fn from_ids(stacks: &[&[&str]], arm: usize, holding: Option<&str>) -> Self {
        Self {
            arm,
            holding: holding.map(ObjectId::new),
            stacks: stacks
                .iter()
                .map(|column| column.iter().map(|id| ObjectId::new(id)).collect())
                .collect(),
        }
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.stacks.len()
    }

    /// Index of the rightmost column.
    #[must_use]
    pub fn last_column(&self) -> usize {
        self.stacks.len().saturating_sub(1)
    }

    /// The top entity of `column`, or `None` if the column is empty or out of range.
    #[must_use]
    pub fn top_of(&self, column: usize) -> Option<&ObjectId> {
        self.stacks.get(column).and_then(|c| c.last())
    }

    #[must_use]
    pub fn column_height(&self, column: usize) -> usize {
        self.stacks.get(column).map_or(0, Vec::len)
    }

    /// Locate an entity. `None` if it is neither held nor stacked.
    #[must_use]
    pub fn locate(&self, id: &ObjectId) -> Option<Location> {
        if self.holding.as_ref() == Some(id) {
            return Some(Location::Held);
        }
        self.stacks.iter().enumerate().find_map(|(column, stack)| {
            stack
                .iter()
                .position(|o| o == id)
                .map(|height| Location::Stacked { column, height })
        })
    }

    /// Number of entities resting above the given location (0 when held).
    #[must_use]
    pub fn objects_above(&self, location: Location) -> usize {
        match location {
            Location::Held => 0,
            Location::Stacked { column, height } => {
                self.column_height(column).saturating_sub(height + 1)
            }
        }
    }

    /// Total number of entities in the columns plus the gripper.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum::<usize>() + usize::from(self.holding.is_some())
    }

    /// Iterate every entity id, columns first (left to right, bottom to top),
    /// then the held entity.
    pub fn objects(&self) -> impl Iterator<Item = &ObjectId> {
        self.stacks.iter().flatten().chain(self.holding.iter())
    }

    /// Check the structural and physical invariants of this state against a
    /// catalog.
    ///
    /// # Errors
    ///
    /// Returns the first [`WorldError`] found: missing columns, arm out of
    /// range, unknown or duplicated entities, or a column whose adjacent
    /// entities violate the support rules.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), WorldError> {
        if self.stacks.is_empty() {
            return Err(WorldError::NoColumns);
        }
        if self.arm >= self.stacks.len() {
            return Err(WorldError::ArmOutOfRange {
                arm: self.arm,
                columns: self.stacks.len(),
            });
        }

        let mut seen = BTreeSet::new();
        for id in self.objects() {
            if !catalog.contains(id) {
                return Err(WorldError::UnknownObject { id: id.clone() });
            }
            if !seen.insert(id) {
                return Err(WorldError::DuplicateObject { id: id.clone() });
            }
        }

        for (column, stack) in self.stacks.iter().enumerate() {
            for pair in stack.windows(2) {
                let (lower, upper) = (&pair[0], &pair[1]);
                let (Some(lower_desc), Some(upper_desc)) = (catalog.get(lower), catalog.get(upper))
                else {
                    continue;
                };
                if let Err(violation) = check_support(upper_desc, Some(lower_desc)) {
                    return Err(WorldError::UnsupportedStack {
                        column,
                        lower: lower.clone(),
                        upper: upper.clone(),
                        violation,
                    });
                }
            }
        }
        Ok(())
    }
}
