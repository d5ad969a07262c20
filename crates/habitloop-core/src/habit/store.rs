//! In-memory habit collection with best-effort persistence.
//!
//! The store owns an ordered habit sequence (insertion order is display
//! order) and mirrors it to a durable slot after every mutation. The
//! in-memory sequence is the source of truth for the session: persistence
//! failures are logged and never roll a mutation back. The store is a
//! plain owned value -- construct it once at startup and pass it by
//! reference, there is no global instance.

use chrono::{Local, NaiveDate};

use super::model::{seed_habits, Habit};
use super::streak::{advance, StreakTransition};
use crate::error::CoreError;
use crate::storage::{HabitSlot, Persist, PersistWriter};

/// Outcome of a toggle attempt, surfaced to the caller.
///
/// `AlreadyDoneToday` is a business-rule rejection, not an error: the UI
/// is expected to tell the user about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Habit marked done for the day; carries the updated streak.
    Completed { streak: u32 },
    /// Rejected: the habit was already completed on this calendar day.
    AlreadyDoneToday,
    /// No habit with the given id.
    NotFound,
}

/// Ordered habit collection mirrored to a durable slot.
pub struct HabitStore {
    habits: Vec<Habit>,
    writer: Box<dyn Persist>,
}

impl HabitStore {
    /// Open the store against the default slot with a background writer,
    /// seeding the sample habits when nothing usable is persisted.
    pub fn open() -> Result<Self, CoreError> {
        let slot = HabitSlot::open()?;
        Ok(Self::load(slot, seed_habits()))
    }

    /// Load from the given slot, falling back to `seed` when no prior
    /// data exists or the persisted contents fail to deserialize. A
    /// deserialization failure is logged and treated as "no prior data".
    pub fn load(slot: HabitSlot, seed: Vec<Habit>) -> Self {
        let (habits, seeded) = match slot.load() {
            Ok(Some(habits)) => (habits, false),
            Ok(None) => (seed, true),
            Err(e) => {
                eprintln!("Warning: failed to load habits, starting from defaults: {e}");
                (seed, true)
            }
        };
        let store = Self {
            habits,
            writer: Box::new(PersistWriter::spawn(slot)),
        };
        if seeded {
            // Seeds become the persisted state right away, so their ids
            // stay stable across sessions.
            store.persist();
        }
        store
    }

    /// Build a store over a caller-supplied persistence backend. Tests use
    /// this with an inline or no-op backend.
    pub fn with_writer(habits: Vec<Habit>, writer: Box<dyn Persist>) -> Self {
        Self { habits, writer }
    }

    /// Current sequence, in display order.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Append a new habit with the given title.
    ///
    /// The title is trimmed; empty or whitespace-only titles are a silent
    /// no-op and return `None`.
    pub fn add_habit(&mut self, title: &str) -> Option<&Habit> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        self.habits.push(Habit::new(title));
        self.persist();
        self.habits.last()
    }

    /// Rename a habit in place, leaving every other field untouched.
    ///
    /// Unknown ids and empty trimmed titles are a no-op (`false`).
    pub fn edit_habit(&mut self, id: &str, new_title: &str) -> bool {
        let new_title = new_title.trim();
        if new_title.is_empty() {
            return false;
        }
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            return false;
        };
        habit.title = new_title.to_string();
        self.persist();
        true
    }

    /// Remove the habit with the given id; unknown ids are a no-op.
    ///
    /// The yes/no confirmation gate is the caller's responsibility -- the
    /// store itself never prompts.
    pub fn delete_habit(&mut self, id: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);
        if self.habits.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Mark a habit done for the current calendar day.
    pub fn toggle_habit(&mut self, id: &str) -> ToggleOutcome {
        self.toggle_habit_on(id, Local::now().date_naive())
    }

    /// Date-explicit variant of [`toggle_habit`](Self::toggle_habit).
    ///
    /// Enforces at most one completion per calendar day: a habit whose
    /// `last_done_date` is already `today` is left untouched and the
    /// rejection is reported in the outcome.
    pub fn toggle_habit_on(&mut self, id: &str, today: NaiveDate) -> ToggleOutcome {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            return ToggleOutcome::NotFound;
        };
        let transition = advance(habit.streak, habit.last_done_date, today);
        let streak = match transition.streak() {
            Some(streak) => streak,
            None => return ToggleOutcome::AlreadyDoneToday,
        };
        habit.streak = streak;
        habit.done = true;
        habit.last_done_date = Some(today);
        self.persist();
        ToggleOutcome::Completed { streak }
    }

    fn persist(&self) {
        self.writer.persist(&self.habits);
    }
}
