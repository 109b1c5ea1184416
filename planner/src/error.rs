//! Typed planner failures.

use std::path::PathBuf;

use gripper_search::error::SearchError;
use gripper_world::error::WorldError;
use gripper_world::object::ObjectId;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The search failed (timeout or exhausted space).
    #[error(transparent)]
    Search(#[from] SearchError),
    /// The initial world violates a structural or physical invariant.
    #[error("invalid world: {0}")]
    InvalidWorld(#[from] WorldError),
    /// The goal formula has no conjunctions, so no state can satisfy it.
    #[error("goal formula has no conjunctions")]
    EmptyGoal,
    /// A goal literal names an entity that is not in the catalog.
    #[error("goal literal {literal} refers to unknown object {id}")]
    UnknownGoalObject { literal: String, id: ObjectId },
    /// A problem file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A problem or config document is not valid JSON for its schema.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlanError {
    /// Whether the failure was a search timeout (retryable with a larger budget).
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Search(SearchError::Timeout { .. }))
    }
}
