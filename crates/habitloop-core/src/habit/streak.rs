//! Day-over-day streak transition rules.
//!
//! A habit may be completed at most once per calendar day. Completing on
//! consecutive days extends the streak; a gap of two or more days costs
//! one point (floored at zero) instead of resetting the run outright.
//! The rules are pure date arithmetic with no storage involved.

use chrono::NaiveDate;

/// Result of applying the daily completion rule to one habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakTransition {
    /// Rejected: already completed today. State must not change.
    AlreadyDone,
    /// First completion ever; the streak starts at one regardless of any
    /// stale prior value.
    Started { streak: u32 },
    /// Completed yesterday as well; the run continues.
    Extended { streak: u32 },
    /// Last completion was two or more days ago; lenient decay.
    Decayed { streak: u32 },
}

impl StreakTransition {
    /// The streak value after the transition, or `None` when rejected.
    pub fn streak(&self) -> Option<u32> {
        match *self {
            StreakTransition::AlreadyDone => None,
            StreakTransition::Started { streak }
            | StreakTransition::Extended { streak }
            | StreakTransition::Decayed { streak } => Some(streak),
        }
    }
}

/// Apply the completion rule for `today` to a habit's current streak state.
///
/// A `last_done` in the future of `today` (clock skew, manual edits) is
/// treated as a gap and takes the decay path.
pub fn advance(streak: u32, last_done: Option<NaiveDate>, today: NaiveDate) -> StreakTransition {
    let yesterday = today.pred_opt();
    match last_done {
        Some(last) if last == today => StreakTransition::AlreadyDone,
        None => StreakTransition::Started { streak: 1 },
        Some(last) if Some(last) == yesterday => StreakTransition::Extended {
            streak: streak.saturating_add(1),
        },
        Some(_) => StreakTransition::Decayed {
            streak: streak.saturating_sub(1),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn same_day_is_rejected() {
        let today = day("2025-06-10");
        assert_eq!(advance(3, Some(today), today), StreakTransition::AlreadyDone);
    }

    #[test]
    fn first_completion_starts_at_one() {
        assert_eq!(
            advance(0, None, day("2025-06-10")),
            StreakTransition::Started { streak: 1 }
        );
        // A stale streak value without any last_done still starts at one.
        assert_eq!(
            advance(7, None, day("2025-06-10")),
            StreakTransition::Started { streak: 1 }
        );
    }

    #[test]
    fn consecutive_day_extends() {
        assert_eq!(
            advance(2, Some(day("2025-06-09")), day("2025-06-10")),
            StreakTransition::Extended { streak: 3 }
        );
    }

    #[test]
    fn gap_decays_by_one() {
        assert_eq!(
            advance(5, Some(day("2025-06-01")), day("2025-06-10")),
            StreakTransition::Decayed { streak: 4 }
        );
    }

    #[test]
    fn decay_floors_at_zero() {
        assert_eq!(
            advance(0, Some(day("2025-06-01")), day("2025-06-10")),
            StreakTransition::Decayed { streak: 0 }
        );
    }

    #[test]
    fn yesterday_across_month_boundary() {
        assert_eq!(
            advance(1, Some(day("2024-02-29")), day("2024-03-01")),
            StreakTransition::Extended { streak: 2 }
        );
        assert_eq!(
            advance(1, Some(day("2024-12-31")), day("2025-01-01")),
            StreakTransition::Extended { streak: 2 }
        );
    }

    #[test]
    fn future_last_done_takes_decay_path() {
        assert_eq!(
            advance(3, Some(day("2025-06-20")), day("2025-06-10")),
            StreakTransition::Decayed { streak: 2 }
        );
    }
}
