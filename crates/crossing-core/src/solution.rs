//! Complete crossing schedules.

use crate::crossing::Crossing;
use crate::roster::Roster;

/// A complete schedule after which every horse is on the far bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    total_time: u64,
    horses_time: Vec<u64>,
    path: Vec<Crossing>,
}

impl Solution {
    /// Captures a solution from the final roster and the crossings that led there.
    pub fn new(roster: &Roster, path: Vec<Crossing>) -> Self {
        Self {
            total_time: path.iter().map(Crossing::cost).sum(),
            horses_time: roster.spent_by_label(),
            path,
        }
    }

    /// Sum of all crossing costs.
    #[inline]
    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    /// Accumulated time per horse, ordered by label.
    #[inline]
    pub fn horses_time(&self) -> &[u64] {
        &self.horses_time
    }

    /// The crossings from the initial state to the final one.
    #[inline]
    pub fn path(&self) -> &[Crossing] {
        &self.path
    }

    /// Returns the path as label groups.
    pub fn path_labels(&self, roster: &Roster) -> Vec<Vec<String>> {
        self.path
            .iter()
            .map(|c| {
                c.members()
                    .iter()
                    .map(|&id| roster.label(id).to_string())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossing::CrossingKind;
    use crate::horse::HorseId;
    use smallvec::smallvec;

    #[test]
    fn test_solution_from_path() {
        let mut roster = Roster::from_speeds(&[1, 2]);
        let crossing = roster
            .crossing(CrossingKind::Forward, smallvec![HorseId(0), HorseId(1)], 2)
            .unwrap();
        roster.apply(&crossing);

        let solution = Solution::new(&roster, vec![crossing]);
        assert_eq!(solution.total_time(), 2);
        assert_eq!(solution.horses_time(), &[2, 2]);
        assert_eq!(solution.path_labels(&roster), vec![vec!["A", "B"]]);
    }
}
