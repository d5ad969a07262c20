//! Durable habit-list slot.
//!
//! The entire habit sequence lives under one fixed key: a single JSON file
//! named after the legacy mobile storage key `@habits_v1`, holding the
//! whole list as a JSON array. There is no version field and no migration
//! path; malformed contents degrade to the seed defaults at the store
//! layer, never to a fatal error.

use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::habit::Habit;

use super::data_dir;

/// File name standing in for the mobile app's AsyncStorage key.
const SLOT_FILE: &str = "habits_v1.json";

/// Handle to the slot file; reads and writes the full sequence.
pub struct HabitSlot {
    path: PathBuf,
}

impl HabitSlot {
    /// Open the slot in the default data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be resolved.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self::open_in(&data_dir()?))
    }

    /// Open the slot inside an explicit directory.
    pub fn open_in(dir: &Path) -> Self {
        Self {
            path: dir.join(SLOT_FILE),
        }
    }

    /// Open the slot at an exact file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted sequence. `Ok(None)` when nothing was ever saved.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<Vec<Habit>>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let habits = serde_json::from_str(&content)?;
        Ok(Some(habits))
    }

    /// Overwrite the slot with the full sequence.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(habits)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Path of the slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
