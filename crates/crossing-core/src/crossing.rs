//! Crossings: one group moving from one bank to the other.

use std::fmt;

use smallvec::SmallVec;

use crate::horse::{HorseId, Side};

/// The horses taking part in one crossing, in enumeration order.
pub type Members = SmallVec<[HorseId; 4]>;

/// Direction of a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossingKind {
    /// From the start bank to the far bank, carrying 2..=K horses.
    Forward,
    /// From the far bank back to the start bank, carrying exactly one horse.
    Return,
}

impl CrossingKind {
    /// Returns the bank this crossing departs from.
    #[inline]
    pub fn departs(self) -> Side {
        match self {
            CrossingKind::Forward => Side::Start,
            CrossingKind::Return => Side::Far,
        }
    }

    /// Returns the bank this crossing arrives at.
    #[inline]
    pub fn arrives(self) -> Side {
        self.departs().opposite()
    }

    /// Returns the kind of crossing that departs from `side`.
    #[inline]
    pub fn departing_from(side: Side) -> Self {
        match side {
            Side::Start => CrossingKind::Forward,
            Side::Far => CrossingKind::Return,
        }
    }
}

impl fmt::Display for CrossingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrossingKind::Forward => write!(f, "Forward"),
            CrossingKind::Return => write!(f, "Return"),
        }
    }
}

/// A group crossing the river.
///
/// The cost is the speed of the slowest member; it is fixed when the
/// crossing is built from a roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Crossing {
    kind: CrossingKind,
    members: Members,
    cost: u64,
}

impl Crossing {
    /// Creates a crossing with a precomputed cost.
    pub fn new(kind: CrossingKind, members: Members, cost: u64) -> Self {
        Self {
            kind,
            members,
            cost,
        }
    }

    #[inline]
    pub fn kind(&self) -> CrossingKind {
        self.kind
    }

    #[inline]
    pub fn members(&self) -> &[HorseId] {
        &self.members
    }

    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Returns whether `id` is part of this crossing.
    pub fn contains(&self, id: HorseId) -> bool {
        self.members.contains(&id)
    }

    /// Returns the number of horses crossing.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_kind_banks() {
        assert_eq!(CrossingKind::Forward.departs(), Side::Start);
        assert_eq!(CrossingKind::Forward.arrives(), Side::Far);
        assert_eq!(CrossingKind::Return.departs(), Side::Far);
        assert_eq!(CrossingKind::departing_from(Side::Far), CrossingKind::Return);
    }

    #[test]
    fn test_crossing_accessors() {
        let crossing = Crossing::new(
            CrossingKind::Forward,
            smallvec![HorseId(0), HorseId(2)],
            5,
        );

        assert_eq!(crossing.len(), 2);
        assert!(crossing.contains(HorseId(2)));
        assert!(!crossing.contains(HorseId(1)));
        assert_eq!(crossing.cost(), 5);
        assert_eq!(crossing.kind().to_string(), "Forward");
    }
}
