//! Top-level solver: validates configuration, runs the search and
//! assembles the report.

use std::time::Instant;

use crossing_config::{CrossingConfig, SearchConfig};
use crossing_core::{Budget, CrossingError, Roster, Solution};
use tracing::info;

use crate::report::{CrossingReport, ResultAssembler};
use crate::search::{ExhaustiveSearch, GroupCrossingGenerator};
use crate::statistics::SearchStatistics;

/// Everything a finished search produces.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// The initial roster; resolves horse labels for `solutions`.
    pub roster: Roster,
    /// Every solution, sorted by total time.
    pub solutions: Vec<Solution>,
    /// The output-ready report built from `solutions`.
    pub report: CrossingReport,
    /// Counters for the run.
    pub statistics: SearchStatistics,
}

/// Read-only search context built from a validated configuration.
///
/// # Example
///
/// ```
/// use crossing_config::CrossingConfig;
/// use crossing_solver::Solver;
///
/// let config = CrossingConfig::new(vec![1, 2, 5, 10]);
/// let outcome = Solver::new(&config).unwrap().solve();
///
/// assert_eq!(outcome.report.best_time(), Some(17));
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    speeds: Vec<u64>,
    budget: Budget,
    group_limit: usize,
    search: SearchConfig,
}

impl Solver {
    /// Creates a solver, rejecting invalid configuration before any search.
    ///
    /// # Errors
    ///
    /// Returns [`CrossingError::Config`] if the group limit is below 2 or a
    /// crossing time is not positive.
    pub fn new(config: &CrossingConfig) -> Result<Self, CrossingError> {
        config.validate()?;
        Ok(Self {
            speeds: config.speeds(),
            budget: config.budget(),
            group_limit: config.group_limit(),
            search: config.search,
        })
    }

    #[inline]
    pub fn budget(&self) -> Budget {
        self.budget
    }

    #[inline]
    pub fn group_limit(&self) -> usize {
        self.group_limit
    }

    /// Runs the exhaustive search and returns the sorted result.
    pub fn solve(&self) -> SolveOutcome {
        let roster = Roster::from_speeds(&self.speeds);
        let search = ExhaustiveSearch::new(
            GroupCrossingGenerator::new(self.group_limit),
            self.budget,
            self.search.traversal,
        );

        info!(
            event = "solve_start",
            horse_count = roster.len() as u64,
            group_limit = self.group_limit as u64,
            budget = %self.budget,
            traversal = %self.search.traversal,
        );

        let start = Instant::now();
        let mut statistics = SearchStatistics::new();
        let mut solutions = search.run(&roster, &mut statistics);
        statistics.duration = start.elapsed();

        let report = ResultAssembler::new(&roster, self.search.tie_break).assemble(&mut solutions);

        info!(
            event = "solve_end",
            solutions = statistics.solutions_found,
            nodes = statistics.nodes_expanded,
            pruned = statistics.crossings_pruned,
            prune_rate = statistics.prune_rate(),
            max_depth = statistics.max_depth as u64,
            duration_ms = statistics.duration.as_millis() as u64,
            speed = statistics.nodes_per_second(),
            best_time = report.best_time().unwrap_or(0),
        );

        SolveOutcome {
            roster,
            solutions,
            report,
            statistics,
        }
    }
}

/// Validates `config`, solves it and returns the outcome.
pub fn run_solver(config: &CrossingConfig) -> Result<SolveOutcome, CrossingError> {
    Ok(Solver::new(config)?.solve())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_group_limit_below_two() {
        let config = CrossingConfig::new(vec![1, 2, 5, 10]).with_num_limit(1);
        let err = Solver::new(&config).unwrap_err();
        assert!(matches!(err, CrossingError::Config(_)));
    }

    #[test]
    fn test_rejects_times_that_overflow() {
        let config = CrossingConfig::new(vec![i64::MAX, i64::MAX, 1]);
        let err = run_solver(&config).unwrap_err();
        assert!(matches!(err, CrossingError::Config(_)));
    }

    #[test]
    fn test_solver_context() {
        let config = CrossingConfig::new(vec![1, 2])
            .with_num_limit(3)
            .with_time_limit(-5);
        let solver = Solver::new(&config).unwrap();
        assert_eq!(solver.group_limit(), 3);
        assert_eq!(solver.budget(), Budget::Unlimited);
    }

    #[test]
    fn test_outcome_is_consistent() {
        let config = CrossingConfig::new(vec![1, 2, 5]);
        let outcome = run_solver(&config).unwrap();

        assert_eq!(outcome.report.num_of_solutions, outcome.solutions.len());
        assert_eq!(outcome.statistics.solutions_found, outcome.solutions.len() as u64);
        assert_eq!(outcome.roster.len(), 3);
        assert_eq!(outcome.report.best_time(), Some(8));
    }
}
