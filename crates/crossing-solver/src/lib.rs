//! Crossing Solver Engine
//!
//! This crate provides the search side of the river-crossing scheduler:
//! - Crossing (move) generation
//! - The search node arena
//! - Exhaustive depth-first search with budget pruning
//! - Result assembly and sorting
//! - Search statistics
//!
//! Logging levels:
//! - **INFO**: Search start/end with totals
//! - **DEBUG**: Each discovered solution
//! - **TRACE**: Each pruned crossing

pub mod report;
pub mod search;
pub mod solver;
pub mod statistics;

pub use report::{CrossingReport, ResultAssembler, SolutionRecord};
pub use search::{
    is_viable, CrossingGenerator, ExhaustiveSearch, GroupCrossingGenerator, NodeArena, NodeKind,
    SearchNode,
};
pub use solver::{run_solver, SolveOutcome, Solver};
pub use statistics::SearchStatistics;
