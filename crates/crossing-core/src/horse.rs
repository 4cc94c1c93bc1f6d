//! Horses, their identifiers and the two river banks.

use std::fmt;

/// Position of a horse in its roster.
///
/// Identifiers are dense: a roster of `n` horses uses `HorseId(0)` through
/// `HorseId(n - 1)` in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HorseId(pub usize);

impl HorseId {
    /// Returns the roster position.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A river bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// The bank every horse starts on.
    #[default]
    Start,
    /// The bank every horse must reach.
    Far,
}

impl Side {
    /// Returns the other bank.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Start => Side::Far,
            Side::Far => Side::Start,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Start => write!(f, "start"),
            Side::Far => write!(f, "far"),
        }
    }
}

/// State of one horse at one point of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Horse {
    label: String,
    speed: u64,
    spent: u64,
    side: Side,
}

impl Horse {
    /// Creates a horse on the start bank with no accumulated time.
    pub fn new(label: impl Into<String>, speed: u64) -> Self {
        Self {
            label: label.into(),
            speed,
            spent: 0,
            side: Side::Start,
        }
    }

    /// Returns the identifier string used in reports.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the time this horse needs to cross.
    #[inline]
    pub fn speed(&self) -> u64 {
        self.speed
    }

    /// Returns the crossing time accumulated so far.
    #[inline]
    pub fn spent(&self) -> u64 {
        self.spent
    }

    /// Returns the bank the horse is on.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    pub(crate) fn cross(&mut self, cost: u64) {
        self.side = self.side.opposite();
        self.spent += cost;
    }

    pub(crate) fn uncross(&mut self, cost: u64) {
        self.side = self.side.opposite();
        self.spent -= cost;
    }
}
