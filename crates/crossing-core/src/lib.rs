//! Crossing Core - Core types for the river-crossing scheduler
//!
//! This crate provides the fundamental abstractions shared by the
//! configuration layer and the search engine:
//! - Horse identifiers, banks and per-horse state
//! - The roster of all horses with symmetric apply/undo of crossings
//! - Crossings (moves) and complete solutions
//! - The crate-wide error type

pub mod budget;
pub mod crossing;
pub mod error;
pub mod horse;
pub mod roster;
pub mod solution;

pub use budget::Budget;
pub use crossing::{Crossing, CrossingKind, Members};
pub use error::{CrossingError, Result};
pub use horse::{Horse, HorseId, Side};
pub use roster::Roster;
pub use solution::Solution;
