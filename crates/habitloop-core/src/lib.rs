//! # Habitloop Core Library
//!
//! This library provides the core business logic for the Habitloop habit
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Habit Store**: An ordered, in-memory habit collection with a
//!   once-per-day completion rule and lenient streak decay
//! - **Storage**: A single JSON slot holding the whole habit sequence,
//!   written through a background single-writer queue, plus a TOML config
//! - **Streak rules**: Pure calendar-date transition logic, separate from
//!   the store so it can be tested without any storage
//!
//! ## Key Components
//!
//! - [`HabitStore`]: Owned, injectable habit collection
//! - [`HabitSlot`]: Durable JSON slot for the habit sequence
//! - [`PersistWriter`]: Background writer serializing slot updates
//! - [`Config`]: Application configuration management

pub mod habit;
pub mod storage;
pub mod error;

pub use habit::{seed_habits, Habit, HabitStore, StreakTransition, ToggleOutcome};
pub use storage::{Config, HabitSlot, Persist, PersistWriter};
pub use error::{ConfigError, CoreError, StorageError};
