//! Habit record and seed data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-tracked recurring action with a completion streak.
///
/// Serialized field names match the legacy mobile app's storage format
/// (`lastDoneDate` in camelCase, dates as `YYYY-MM-DD` strings), so a
/// persisted habit list is readable by either side. There is no version
/// field; schema changes are not migrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Opaque unique identifier, assigned at creation, never changed.
    pub id: String,
    /// Display title, non-empty.
    pub title: String,
    /// True if the habit was completed the last day the user acted on it.
    /// Stored as-is and not re-derived against the current date on load,
    /// so it goes stale across a day boundary until the next toggle.
    #[serde(default)]
    pub done: bool,
    /// Count of consecutive qualifying days.
    #[serde(default)]
    pub streak: u32,
    /// Calendar date of the most recent completion, if any.
    #[serde(rename = "lastDoneDate", default)]
    pub last_done_date: Option<NaiveDate>,
}

impl Habit {
    /// Create a habit in the never-completed state with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            done: false,
            streak: 0,
            last_done_date: None,
        }
    }

    /// Display label for the streak, matching the mobile app's wording.
    pub fn streak_label(&self) -> String {
        if self.streak > 0 {
            format!("{}-Day Streak", self.streak)
        } else {
            "No streak yet".to_string()
        }
    }
}

/// Default sample habits used when no persisted state exists.
pub fn seed_habits() -> Vec<Habit> {
    ["Wake up early", "Workout", "Read 10 pages"]
        .into_iter()
        .map(Habit::new)
        .collect()
}
