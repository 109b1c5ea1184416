//! Planner configuration.

use serde::{Deserialize, Serialize};

use gripper_search::policy::SearchPolicyV1;

/// How per-literal estimates combine within one conjunction.
///
/// `Sum` overestimates the true remaining cost for multi-literal goals (two
/// literals can share moves) but ranks the frontier more aggressively, which
/// usually finds a plan faster. `Max` is closer to a lower bound and tends to
/// find shorter plans at the price of more expansions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConjunctionCost {
    #[default]
    Sum,
    Max,
}

impl ConjunctionCost {
    /// Combine the literal estimates of one conjunction. Saturates on overflow.
    #[must_use]
    pub fn combine(self, estimates: impl IntoIterator<Item = u64>) -> u64 {
        match self {
            Self::Sum => estimates.into_iter().fold(0, u64::saturating_add),
            Self::Max => estimates.into_iter().max().unwrap_or(0),
        }
    }
}

/// Everything that tunes one planning call.
///
/// Deserializes from partial JSON: missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub search: SearchPolicyV1,
    pub conjunction_cost: ConjunctionCost,
    /// Skip successor edges that exactly undo the incoming action.
    pub prune_reversals: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            search: SearchPolicyV1::default(),
            conjunction_cost: ConjunctionCost::Sum,
            prune_reversals: true,
        }
    }
}
