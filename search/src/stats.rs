//! Per-call search statistics.

use std::time::Duration;

/// Counters for one search call.
///
/// Returned by value with the outcome (or inside the error), never kept in
/// shared state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatsV1 {
    /// Nodes popped and expanded (goal pop excluded).
    pub expansions: u64,
    /// Nodes created, including the root.
    pub nodes_generated: u64,
    /// Pops discarded because their state was already closed.
    pub duplicates_discarded: u64,
    /// Successor edges skipped because their state was already closed.
    pub closed_skips: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Wall-clock time spent in the call.
    pub elapsed: Duration,
}
