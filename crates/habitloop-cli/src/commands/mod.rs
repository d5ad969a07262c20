//! CLI command implementations.

pub mod config;
pub mod habit;

use std::path::{Path, PathBuf};

use habitloop_core::storage::data_dir;

/// Resolve the data directory, honoring the global `--data-dir` override.
pub fn resolve_data_dir(overridden: Option<&Path>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match overridden {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Ok(dir.to_path_buf())
        }
        None => Ok(data_dir()?),
    }
}
