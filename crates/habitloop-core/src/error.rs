//! Core error types for habitloop-core.
//!
//! This module defines the error hierarchy using thiserror. Note that two
//! whole classes of rejection are deliberately NOT errors: validation
//! rejections (empty title, unknown id) are no-op return values, and the
//! "already completed today" rule is an explicit [`ToggleOutcome`] variant.
//!
//! [`ToggleOutcome`]: crate::habit::ToggleOutcome

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitloop-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from the durable habit slot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read or write the slot file
    #[error("Failed to read/write habit slot: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted contents did not deserialize
    #[error("Failed to parse persisted habits: {0}")]
    Json(#[from] serde_json::Error),

    /// Data directory could not be resolved or created
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be resolved or created
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
