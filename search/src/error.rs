//! Typed search failures.
//!
//! Both variants carry the statistics gathered up to the point of failure so
//! callers can report how much work was done.

use std::time::Duration;

use crate::stats::SearchStatsV1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The wall-clock budget ran out before a goal was found. Retrying with a
    /// larger budget may succeed.
    #[error(
        "search timed out after {:?} (budget {budget:?}, {} expansions)",
        stats.elapsed,
        stats.expansions
    )]
    Timeout {
        budget: Duration,
        stats: SearchStatsV1,
    },
    /// The frontier emptied without reaching a goal: the goal is unreachable
    /// from the start state. Retrying with the same inputs cannot succeed.
    #[error(
        "search space exhausted after {} expansions without reaching the goal",
        stats.expansions
    )]
    Exhausted { stats: SearchStatsV1 },
}

impl SearchError {
    /// Statistics recorded before the failure.
    #[must_use]
    pub fn stats(&self) -> &SearchStatsV1 {
        match self {
            Self::Timeout { stats, .. } | Self::Exhausted { stats } => stats,
        }
    }

    /// Whether retrying with a larger budget could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
