//! Planning problems and their JSON loader.
//!
//! # Wire format
//!
//! ```json
//! {
//!   "world": {
//!     "arm": 0,
//!     "holding": null,
//!     "stacks": [["e"], ["a", "l"], []],
//!     "objects": { "e": {"form": "ball", "size": "large", "color": "white"} }
//!   },
//!   "goal": [[{"polarity": true, "relation": "ontop", "args": ["e", "floor"]}]]
//! }
//! ```
//!
//! Loading validates at the boundary; [`crate::runner::plan`] does not.

use std::path::Path;

use serde::{Deserialize, Serialize};

use gripper_world::goal::{GoalFormula, Term};
use gripper_world::object::Catalog;
use gripper_world::state::WorldState;

use crate::error::PlanError;

/// A world description: initial state plus the object catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldV1 {
    #[serde(flatten)]
    pub state: WorldState,
    pub objects: Catalog,
}

/// One planning call's inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningProblemV1 {
    pub world: WorldV1,
    pub goal: GoalFormula,
}

impl PlanningProblemV1 {
    #[must_use]
    pub fn new(state: WorldState, objects: Catalog, goal: GoalFormula) -> Self {
        Self {
            world: WorldV1 { state, objects },
            goal,
        }
    }

    /// Parse and validate a problem from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Json`] on malformed input, or a validation error
    /// from [`PlanningProblemV1::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, PlanError> {
        let problem: Self = serde_json::from_str(json)?;
        problem.validate()?;
        Ok(problem)
    }

    /// Read, parse, and validate a problem file.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Io`] if the file cannot be read, otherwise as
    /// [`PlanningProblemV1::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        let text = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Check the preconditions the search itself assumes: a physically valid
    /// world, a non-empty goal, and goal literals that only name catalogued
    /// entities (or the floor).
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidWorld`], [`PlanError::EmptyGoal`], or
    /// [`PlanError::UnknownGoalObject`].
    pub fn validate(&self) -> Result<(), PlanError> {
        self.world.state.validate(&self.world.objects)?;
        if self.goal.conjunctions().is_empty() {
            return Err(PlanError::EmptyGoal);
        }
        for literal in self.goal.literals() {
            for arg in &literal.args {
                if let Term::Object(id) = arg {
                    if !self.world.objects.contains(id) {
                        return Err(PlanError::UnknownGoalObject {
                            literal: literal.to_string(),
                            id: id.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
