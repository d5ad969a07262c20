//! Property tests for the streak transition rules.

use chrono::{Duration, NaiveDate};
use habitloop_core::habit::{advance, StreakTransition};
use habitloop_core::{seed_habits, Habit, HabitStore, Persist, ToggleOutcome};
use proptest::prelude::*;

struct NoopPersist;

impl Persist for NoopPersist {
    fn persist(&self, _habits: &[Habit]) {}
}

fn day_from(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(offset)
}

proptest! {
    #[test]
    fn advance_matches_exactly_one_rule(
        streak in 0u32..1_000_000,
        last_offset in proptest::option::of(0i64..3000),
        today_offset in 0i64..3000,
    ) {
        let last = last_offset.map(day_from);
        let today = day_from(today_offset);

        match advance(streak, last, today) {
            StreakTransition::AlreadyDone => prop_assert_eq!(last, Some(today)),
            StreakTransition::Started { streak: s } => {
                prop_assert_eq!(s, 1);
                prop_assert!(last.is_none());
            }
            StreakTransition::Extended { streak: s } => {
                prop_assert_eq!(s, streak + 1);
                prop_assert_eq!(last, today.pred_opt());
            }
            StreakTransition::Decayed { streak: s } => {
                prop_assert_eq!(s, streak.saturating_sub(1));
            }
        }
    }

    #[test]
    fn toggle_sequences_keep_state_consistent(offsets in proptest::collection::vec(0i64..365, 1..40)) {
        let mut store = HabitStore::with_writer(seed_habits(), Box::new(NoopPersist));
        let id = store.habits()[0].id.clone();

        for offset in offsets {
            let today = day_from(offset);
            let streak_before = store.get(&id).unwrap().streak;
            match store.toggle_habit_on(&id, today) {
                ToggleOutcome::Completed { streak } => {
                    let habit = store.get(&id).unwrap();
                    prop_assert_eq!(habit.streak, streak);
                    prop_assert_eq!(habit.last_done_date, Some(today));
                    prop_assert!(habit.done);
                    // One completion moves the streak by at most one point.
                    prop_assert!(streak <= streak_before + 1);
                }
                ToggleOutcome::AlreadyDoneToday => {
                    let habit = store.get(&id).unwrap();
                    prop_assert_eq!(habit.last_done_date, Some(today));
                    prop_assert_eq!(habit.streak, streak_before);
                }
                ToggleOutcome::NotFound => prop_assert!(false, "habit vanished"),
            }
        }
    }

    #[test]
    fn second_toggle_same_day_never_changes_state(offset in 0i64..3000) {
        let mut store = HabitStore::with_writer(seed_habits(), Box::new(NoopPersist));
        let id = store.habits()[0].id.clone();
        let today = day_from(offset);

        store.toggle_habit_on(&id, today);
        let after_first = store.habits().to_vec();
        prop_assert_eq!(store.toggle_habit_on(&id, today), ToggleOutcome::AlreadyDoneToday);
        prop_assert_eq!(store.habits(), after_first.as_slice());
    }
}
