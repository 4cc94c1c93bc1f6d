//! Per-horse cumulative time budget.

use std::fmt;

/// Cap on the total crossing time any single horse may accumulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Budget {
    /// No cap.
    #[default]
    Unlimited,

    /// Every horse must finish with at most this much accumulated time.
    Limited(u64),
}

impl Budget {
    /// Builds a budget from the raw configured limit.
    ///
    /// Any limit `<= 0` means unlimited.
    pub fn from_limit(limit: i64) -> Self {
        if limit <= 0 {
            Budget::Unlimited
        } else {
            Budget::Limited(limit as u64)
        }
    }

    /// Returns whether a horse that has already spent `spent` may take a
    /// crossing costing `cost`.
    ///
    /// A crossing whose new total would not fit in `u64` is never admitted,
    /// even without a limit.
    #[inline]
    pub fn admits(&self, spent: u64, cost: u64) -> bool {
        match self {
            Budget::Unlimited => spent.checked_add(cost).is_some(),
            Budget::Limited(limit) => spent
                .checked_add(cost)
                .is_some_and(|total| total <= *limit),
        }
    }

    /// Returns the limit, if any.
    pub fn limit(&self) -> Option<u64> {
        match self {
            Budget::Unlimited => None,
            Budget::Limited(limit) => Some(*limit),
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Budget::Unlimited => write!(f, "unlimited"),
            Budget::Limited(limit) => write!(f, "{}", limit),
        }
    }
}
