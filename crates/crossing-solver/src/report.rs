//! Result assembly: sorting solutions and shaping them for output.

use std::cmp::Ordering;

use crossing_config::TieBreak;
use crossing_core::{Roster, Solution};
use serde::{Deserialize, Serialize};

/// The final search result, as written to `solution.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingReport {
    /// Number of complete schedules found.
    pub num_of_solutions: usize,
    /// Schedules in ascending order of total time.
    pub solutions: Vec<SolutionRecord>,
}

/// One schedule in output form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionRecord {
    /// Sum of all crossing costs.
    pub total_time: u64,
    /// Accumulated time per horse, ordered by horse label.
    pub horses_time: Vec<u64>,
    /// Crossings in order, each as the labels of the horses taking it.
    pub path: Vec<Vec<String>>,
}

impl CrossingReport {
    /// Returns the smallest total time, if any solution exists.
    pub fn best_time(&self) -> Option<u64> {
        self.solutions.first().map(|s| s.total_time)
    }
}

/// Sorts discovered solutions and converts them into a [`CrossingReport`].
#[derive(Debug, Clone, Copy)]
pub struct ResultAssembler<'a> {
    roster: &'a Roster,
    tie_break: TieBreak,
}

impl<'a> ResultAssembler<'a> {
    /// Creates an assembler that resolves labels through `roster`.
    pub fn new(roster: &'a Roster, tie_break: TieBreak) -> Self {
        Self { roster, tie_break }
    }

    /// Sorts `solutions` by ascending total time.
    ///
    /// The sort is stable: with [`TieBreak::Discovery`] equal-time
    /// solutions keep their discovery order, with
    /// [`TieBreak::Lexicographic`] they are ordered by path labels.
    pub fn sort(&self, solutions: &mut [Solution]) {
        match self.tie_break {
            TieBreak::Discovery => solutions.sort_by_key(Solution::total_time),
            TieBreak::Lexicographic => solutions.sort_by(|a, b| {
                a.total_time()
                    .cmp(&b.total_time())
                    .then_with(|| self.compare_paths(a, b))
            }),
        }
    }

    /// Builds the output report from already sorted solutions.
    pub fn report(&self, solutions: &[Solution]) -> CrossingReport {
        CrossingReport {
            num_of_solutions: solutions.len(),
            solutions: solutions
                .iter()
                .map(|s| SolutionRecord {
                    total_time: s.total_time(),
                    horses_time: s.horses_time().to_vec(),
                    path: s.path_labels(self.roster),
                })
                .collect(),
        }
    }

    /// Sorts `solutions` in place and builds the report.
    pub fn assemble(&self, solutions: &mut [Solution]) -> CrossingReport {
        self.sort(solutions);
        self.report(solutions)
    }

    fn compare_paths(&self, a: &Solution, b: &Solution) -> Ordering {
        self.path_labels(a).cmp(self.path_labels(b))
    }

    fn path_labels<'s>(&'s self, solution: &'s Solution) -> impl Iterator<Item = Vec<&'s str>> + 's {
        solution.path().iter().map(move |c| {
            c.members()
                .iter()
                .map(|&id| self.roster.label(id))
                .collect()
        })
    }
}
