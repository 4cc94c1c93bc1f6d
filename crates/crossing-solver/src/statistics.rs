//! Search statistics collection and reporting.
//!
//! Tracks how much of the tree a search visited, how much the budget
//! pruned, and how long it took.

use std::time::Duration;

/// Statistics for one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Candidate crossings produced by the generator.
    pub crossings_generated: u64,
    /// Candidates discarded because a member would exceed the budget.
    pub crossings_pruned: u64,
    /// Nodes whose candidates were generated, root included.
    pub nodes_expanded: u64,
    /// Complete schedules found.
    pub solutions_found: u64,
    /// Deepest node reached, in crossings from the root.
    pub max_depth: usize,
    /// Wall-clock time of the search.
    pub duration: Duration,
}

impl SearchStatistics {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that a node at `depth` was entered.
    #[inline]
    pub fn record_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }

    /// Returns the fraction of generated crossings that were pruned.
    pub fn prune_rate(&self) -> f64 {
        if self.crossings_generated == 0 {
            0.0
        } else {
            self.crossings_pruned as f64 / self.crossings_generated as f64
        }
    }

    /// Returns nodes expanded per second.
    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            (self.nodes_expanded as f64 / secs) as u64
        } else {
            0
        }
    }
}
