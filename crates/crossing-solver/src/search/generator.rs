//! Crossing generation for node expansion.
//!
//! The generator is responsible for listing every legal crossing that
//! departs from one bank, given the current roster.

use std::fmt::Debug;

use crossing_core::{Crossing, CrossingKind, HorseId, Members, Roster, Side};
use smallvec::{smallvec, SmallVec};

/// Produces the candidate crossings for one search node.
///
/// Candidates are not checked against the budget; the search prunes them.
pub trait CrossingGenerator: Send + Debug {
    /// Returns every legal crossing departing from `departing`.
    fn generate(&self, roster: &Roster, departing: Side) -> Vec<Crossing>;
}

/// The standard generator: groups of 2..=K forward, single horses back.
///
/// Forward groups are enumerated by ascending size, then lexicographically
/// by roster position. Return crossings follow roster order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCrossingGenerator {
    group_limit: usize,
}

impl GroupCrossingGenerator {
    /// Creates a generator with `group_limit` as the largest forward group.
    pub fn new(group_limit: usize) -> Self {
        Self { group_limit }
    }

    /// Returns the largest forward group.
    #[inline]
    pub fn group_limit(&self) -> usize {
        self.group_limit
    }
}

impl CrossingGenerator for GroupCrossingGenerator {
    fn generate(&self, roster: &Roster, departing: Side) -> Vec<Crossing> {
        let available: SmallVec<[HorseId; 16]> = roster.ids_on(departing).collect();

        match CrossingKind::departing_from(departing) {
            CrossingKind::Return => available
                .iter()
                .map(|&id| {
                    Crossing::new(CrossingKind::Return, smallvec![id], roster.horse(id).speed())
                })
                .collect(),
            CrossingKind::Forward => {
                let largest = self.group_limit.min(available.len());
                let mut crossings = Vec::new();
                for size in 2..=largest {
                    for_each_combination(&available, size, |members| {
                        crossings.push(Crossing::new(
                            CrossingKind::Forward,
                            Members::from_slice(members),
                            roster.cost_of(members),
                        ));
                    });
                }
                crossings
            }
        }
    }
}

// Visits every `size`-subset of `items` in lexicographic position order.
fn for_each_combination<F>(items: &[HorseId], size: usize, mut visit: F)
where
    F: FnMut(&[HorseId]),
{
    let n = items.len();
    if size == 0 || size > n {
        return;
    }

    let mut indices: SmallVec<[usize; 8]> = (0..size).collect();
    let mut members: SmallVec<[HorseId; 8]> = indices.iter().map(|&i| items[i]).collect();

    loop {
        visit(&members);

        // Rightmost index that can still advance.
        let Some(pos) = (0..size).rev().find(|&i| indices[i] < n - size + i) else {
            return;
        };
        indices[pos] += 1;
        for j in pos + 1..size {
            indices[j] = indices[j - 1] + 1;
        }
        for j in pos..size {
            members[j] = items[indices[j]];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(roster: &Roster, crossings: &[Crossing]) -> Vec<String> {
        crossings
            .iter()
            .map(|c| {
                c.members()
                    .iter()
                    .map(|&id| roster.label(id))
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_forward_pairs_in_lexicographic_order() {
        let roster = Roster::from_speeds(&[1, 2, 5, 10]);
        let generator = GroupCrossingGenerator::new(2);

        let crossings = generator.generate(&roster, Side::Start);
        assert_eq!(
            labels(&roster, &crossings),
            vec!["AB", "AC", "AD", "BC", "BD", "CD"]
        );
        assert!(crossings
            .iter()
            .all(|c| c.kind() == CrossingKind::Forward));
        assert_eq!(crossings[2].cost(), 10);
        assert_eq!(crossings[0].cost(), 2);
    }

    #[test]
    fn test_forward_sizes_ascend_up_to_limit() {
        let roster = Roster::from_speeds(&[1, 2, 5]);
        let generator = GroupCrossingGenerator::new(3);

        let crossings = generator.generate(&roster, Side::Start);
        assert_eq!(labels(&roster, &crossings), vec!["AB", "AC", "BC", "ABC"]);
    }

    #[test]
    fn test_limit_above_available_is_capped() {
        let roster = Roster::from_speeds(&[4, 6]);
        let generator = GroupCrossingGenerator::new(5);

        let crossings = generator.generate(&roster, Side::Start);
        assert_eq!(labels(&roster, &crossings), vec!["AB"]);
    }

    #[test]
    fn test_single_horse_has_no_forward_crossing() {
        let roster = Roster::from_speeds(&[5]);
        let generator = GroupCrossingGenerator::new(2);

        assert!(generator.generate(&roster, Side::Start).is_empty());
    }

    #[test]
    fn test_return_crossings_are_singletons_from_far_bank() {
        let mut roster = Roster::from_speeds(&[1, 2, 5, 10]);
        let generator = GroupCrossingGenerator::new(2);
        let first = generator.generate(&roster, Side::Start).remove(2); // AD
        roster.apply(&first);

        let crossings = generator.generate(&roster, Side::Far);
        assert_eq!(labels(&roster, &crossings), vec!["A", "D"]);
        assert!(crossings.iter().all(|c| c.len() == 1));
        assert_eq!(crossings[1].cost(), 10);

        // Forward crossings only draw from horses still on the start bank.
        let forward = generator.generate(&roster, Side::Start);
        assert_eq!(labels(&roster, &forward), vec!["BC"]);
    }

    #[test]
    fn test_combination_count() {
        let items: Vec<HorseId> = (0..6).map(HorseId).collect();
        let mut count = 0;
        for_each_combination(&items, 3, |members| {
            assert_eq!(members.len(), 3);
            assert!(members.windows(2).all(|w| w[0] < w[1]));
            count += 1;
        });
        assert_eq!(count, 20);
    }
}
