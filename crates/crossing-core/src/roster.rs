//! The roster of every horse in the puzzle.
//!
//! A search keeps one working roster and mutates it with [`Roster::apply`]
//! on the way down and [`Roster::undo`] on the way back up. Cloning a
//! roster produces an independent copy, so a clone never observes
//! mutations of the original.

use crate::crossing::{Crossing, CrossingKind, Members};
use crate::error::{CrossingError, Result};
use crate::horse::{Horse, HorseId, Side};

/// Labels are single uppercase letters up to this many horses.
const MAX_LETTER_LABELS: usize = 26;

/// Every horse in the puzzle, indexed by [`HorseId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    horses: Vec<Horse>,
}

impl Roster {
    /// Creates a roster with every horse on the start bank.
    ///
    /// Horses are labelled `A`, `B`, ... when there are at most 26 of them,
    /// otherwise `1`, `2`, ... by 1-based input position.
    pub fn from_speeds(speeds: &[u64]) -> Self {
        let letters = speeds.len() <= MAX_LETTER_LABELS;
        let horses = speeds
            .iter()
            .enumerate()
            .map(|(i, &speed)| {
                let label = if letters {
                    char::from(b'A' + i as u8).to_string()
                } else {
                    (i + 1).to_string()
                };
                Horse::new(label, speed)
            })
            .collect();
        Self { horses }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.horses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.horses.is_empty()
    }

    /// Returns the horse with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this roster.
    #[inline]
    pub fn horse(&self, id: HorseId) -> &Horse {
        &self.horses[id.index()]
    }

    /// Returns the horse with the given id, if it exists.
    pub fn get(&self, id: HorseId) -> Option<&Horse> {
        self.horses.get(id.index())
    }

    /// Returns the label of the given horse.
    #[inline]
    pub fn label(&self, id: HorseId) -> &str {
        self.horse(id).label()
    }

    /// Iterates over all horses with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (HorseId, &Horse)> {
        self.horses.iter().enumerate().map(|(i, h)| (HorseId(i), h))
    }

    /// Iterates over the ids of horses currently on `side`, in roster order.
    pub fn ids_on(&self, side: Side) -> impl Iterator<Item = HorseId> + '_ {
        self.iter()
            .filter(move |(_, h)| h.side() == side)
            .map(|(id, _)| id)
    }

    /// Returns the number of horses currently on `side`.
    pub fn count_on(&self, side: Side) -> usize {
        self.horses.iter().filter(|h| h.side() == side).count()
    }

    /// Returns whether every horse has reached the far bank.
    pub fn all_on_far_bank(&self) -> bool {
        self.horses.iter().all(|h| h.side() == Side::Far)
    }

    /// Returns the cost of moving `members` together: the slowest speed.
    pub fn cost_of(&self, members: &[HorseId]) -> u64 {
        members
            .iter()
            .map(|&id| self.horse(id).speed())
            .max()
            .unwrap_or(0)
    }

    /// Builds a checked crossing of `members` in direction `kind`.
    ///
    /// Group size is checked against the direction with `group_limit` as
    /// the largest forward group. The search does not use this; it is for
    /// crossings built outside a generator.
    pub fn crossing(
        &self,
        kind: CrossingKind,
        members: Members,
        group_limit: usize,
    ) -> Result<Crossing> {
        let size_ok = match kind {
            CrossingKind::Forward => (2..=group_limit).contains(&members.len()),
            CrossingKind::Return => members.len() == 1,
        };
        if !size_ok {
            return Err(CrossingError::InvalidRoster(format!(
                "{} crossing cannot carry {} horses",
                kind,
                members.len()
            )));
        }
        let crossing = Crossing::new(kind, members.clone(), self.cost_of(&members));
        self.validate(&crossing)?;
        Ok(crossing)
    }

    /// Checks that `crossing` can be applied to the current state.
    pub fn validate(&self, crossing: &Crossing) -> Result<()> {
        let departs = crossing.kind().departs();
        for (pos, &id) in crossing.members().iter().enumerate() {
            let horse = self.get(id).ok_or_else(|| {
                CrossingError::InvalidRoster(format!("unknown horse #{}", id.index()))
            })?;
            if horse.side() != departs {
                return Err(CrossingError::InvalidRoster(format!(
                    "horse {} is on the {} bank, crossing departs from the {} bank",
                    horse.label(),
                    horse.side(),
                    departs
                )));
            }
            if crossing.members()[..pos].contains(&id) {
                return Err(CrossingError::InvalidRoster(format!(
                    "horse {} appears twice in one crossing",
                    horse.label()
                )));
            }
        }
        Ok(())
    }

    /// Moves every member to the other bank and charges it the crossing cost.
    pub fn apply(&mut self, crossing: &Crossing) {
        for &id in crossing.members() {
            let horse = &mut self.horses[id.index()];
            debug_assert_eq!(horse.side(), crossing.kind().departs());
            horse.cross(crossing.cost());
        }
    }

    /// Exactly reverses a previous [`apply`](Self::apply) of `crossing`.
    pub fn undo(&mut self, crossing: &Crossing) {
        for &id in crossing.members() {
            let horse = &mut self.horses[id.index()];
            debug_assert_eq!(horse.side(), crossing.kind().arrives());
            horse.uncross(crossing.cost());
        }
    }

    /// Validates and applies every crossing of `path` in order.
    ///
    /// Used to verify a finished schedule against a fresh roster. Budgets
    /// are not checked here.
    pub fn replay<'a>(&mut self, path: impl IntoIterator<Item = &'a Crossing>) -> Result<()> {
        for crossing in path {
            self.validate(crossing)?;
            self.apply(crossing);
        }
        Ok(())
    }

    /// Returns accumulated time per horse, ordered by label.
    pub fn spent_by_label(&self) -> Vec<u64> {
        let mut horses: Vec<&Horse> = self.horses.iter().collect();
        horses.sort_by(|a, b| a.label().cmp(b.label()));
        horses.into_iter().map(Horse::spent).collect()
    }
}
