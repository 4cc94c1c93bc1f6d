//! Exhaustive depth-first search over crossing schedules.
//!
//! The search walks every schedule that starts with all horses on the
//! start bank, alternates forward and return crossings, and ends when
//! every horse is on the far bank. Crossings that would push any member
//! past the budget are discarded before they are explored.
//!
//! One working roster is shared by the whole walk: a crossing is applied
//! when its node is entered and undone when the node is left, so no
//! per-node roster copies are made.
//!
//! # Traversal Types
//!
//! - **Iterative**: explicit frame stack, independent of call-stack depth
//! - **Recursive**: one call per expanded node
//!
//! Both visit nodes in the same order and discover the same solutions in
//! the same order.

mod generator;
mod node;

use std::vec;

use crossing_config::Traversal;
use crossing_core::{Budget, Crossing, Roster, Solution};
use tracing::{debug, trace};

use crate::statistics::SearchStatistics;

pub use generator::{CrossingGenerator, GroupCrossingGenerator};
pub use node::{is_viable, NodeArena, NodeKind, SearchNode, ROOT};

/// Exhaustive search that collects every complete schedule.
///
/// # Type Parameters
/// * `G` - The generator that lists candidate crossings
///
/// # Example
///
/// ```
/// use crossing_config::Traversal;
/// use crossing_core::{Budget, Roster};
/// use crossing_solver::{ExhaustiveSearch, GroupCrossingGenerator, SearchStatistics};
///
/// let search = ExhaustiveSearch::new(
///     GroupCrossingGenerator::new(2),
///     Budget::Unlimited,
///     Traversal::Iterative,
/// );
/// let roster = Roster::from_speeds(&[1, 2, 5, 10]);
/// let mut statistics = SearchStatistics::new();
///
/// let solutions = search.run(&roster, &mut statistics);
/// assert_eq!(solutions.iter().map(|s| s.total_time()).min(), Some(17));
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveSearch<G> {
    generator: G,
    budget: Budget,
    traversal: Traversal,
}

impl<G: CrossingGenerator> ExhaustiveSearch<G> {
    /// Creates a new exhaustive search.
    pub fn new(generator: G, budget: Budget, traversal: Traversal) -> Self {
        Self {
            generator,
            budget,
            traversal,
        }
    }

    #[inline]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    #[inline]
    pub fn budget(&self) -> Budget {
        self.budget
    }

    #[inline]
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Explores the whole tree rooted at `initial` and returns every
    /// solution in discovery order.
    ///
    /// `initial` is left untouched; the walk works on its own copy.
    pub fn run(&self, initial: &Roster, statistics: &mut SearchStatistics) -> Vec<Solution> {
        let mut walk = Walk {
            search: self,
            initial,
            roster: initial.clone(),
            arena: NodeArena::with_capacity(2 * initial.len() + 1),
            statistics,
        };

        let solutions = match self.traversal {
            Traversal::Iterative => walk.iterative(),
            Traversal::Recursive => walk.expand(ROOT),
        };

        debug_assert_eq!(&walk.roster, initial);
        debug_assert_eq!(walk.arena.len(), 1);
        solutions
    }
}

// Mutable state of one run: the shared roster and the current path.
struct Walk<'a, G> {
    search: &'a ExhaustiveSearch<G>,
    initial: &'a Roster,
    roster: Roster,
    arena: NodeArena,
    statistics: &'a mut SearchStatistics,
}

// Pending candidates of one expanded node.
struct Frame {
    node: usize,
    candidates: vec::IntoIter<Crossing>,
}

impl<G: CrossingGenerator> Walk<'_, G> {
    fn candidates(&mut self, node: usize) -> Vec<Crossing> {
        self.statistics.nodes_expanded += 1;
        let departing = self.arena.get(node).kind().next_departure();
        self.search.generator.generate(&self.roster, departing)
    }

    fn open(&mut self, node: usize) -> Frame {
        Frame {
            node,
            candidates: self.candidates(node).into_iter(),
        }
    }

    fn iterative(&mut self) -> Vec<Solution> {
        let mut solutions = Vec::new();
        let mut stack = vec![self.open(ROOT)];

        while let Some(frame) = stack.last_mut() {
            let parent = frame.node;
            match frame.candidates.next() {
                Some(crossing) => {
                    let Some(child) = self.enter(parent, crossing) else {
                        continue;
                    };
                    if self.roster.all_on_far_bank() {
                        solutions.push(self.capture(child));
                        self.leave();
                    } else {
                        let frame = self.open(child);
                        stack.push(frame);
                    }
                }
                None => {
                    stack.pop();
                    if parent != ROOT {
                        self.leave();
                    }
                }
            }
        }

        solutions
    }

    fn expand(&mut self, node: usize) -> Vec<Solution> {
        let mut solutions = Vec::new();

        for crossing in self.candidates(node) {
            let Some(child) = self.enter(node, crossing) else {
                continue;
            };
            if self.roster.all_on_far_bank() {
                solutions.push(self.capture(child));
            } else {
                solutions.extend(self.expand(child));
            }
            self.leave();
        }

        solutions
    }

    // Applies `crossing` below `parent` if it is viable and its times fit.
    fn enter(&mut self, parent: usize, crossing: Crossing) -> Option<usize> {
        self.statistics.crossings_generated += 1;

        let cost = crossing.cost();
        let child = if is_viable(&crossing, &self.roster, self.search.budget) {
            self.arena.push_child(parent, crossing)
        } else {
            None
        };
        let Some(child) = child else {
            self.statistics.crossings_pruned += 1;
            trace!(
                event = "prune",
                depth = self.arena.get(parent).depth() as u64 + 1,
                cost,
                budget = %self.search.budget,
            );
            return None;
        };

        if let Some(crossing) = self.arena.get(child).crossing() {
            self.roster.apply(crossing);
        }
        self.statistics.record_depth(self.arena.get(child).depth());
        Some(child)
    }

    // Undoes the crossing of the deepest node on the path.
    fn leave(&mut self) {
        if let Some(node) = self.arena.pop() {
            if let Some(crossing) = node.crossing() {
                self.roster.undo(crossing);
            }
        }
    }

    // Replays `solution` from the initial roster with every crossing checked.
    fn replays_to_current(&self, solution: &Solution) -> bool {
        let mut replayed = self.initial.clone();
        replayed.replay(solution.path()).is_ok() && replayed == self.roster
    }

    fn capture(&mut self, node: usize) -> Solution {
        let solution = Solution::new(&self.roster, self.arena.path(node));
        debug_assert_eq!(solution.total_time(), self.arena.get(node).total_time());
        debug_assert!(self.replays_to_current(&solution));

        self.statistics.solutions_found += 1;
        debug!(
            event = "solution",
            total_time = solution.total_time(),
            depth = solution.path().len() as u64,
        );
        solution
    }
}
