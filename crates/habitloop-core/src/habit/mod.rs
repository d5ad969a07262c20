mod model;
mod store;
mod streak;

pub use model::{seed_habits, Habit};
pub use store::{HabitStore, ToggleOutcome};
pub use streak::{advance, StreakTransition};
