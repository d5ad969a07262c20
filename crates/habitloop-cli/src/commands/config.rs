//! Configuration management commands for CLI.

use std::path::Path;

use clap::Subcommand;
use habitloop_core::storage::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "ui.confirm_delete", "habits.seed_defaults")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction, data_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = super::resolve_data_dir(data_dir)?;

    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_in(&dir).unwrap_or_default();
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_in(&dir).unwrap_or_default();
            config.set(&key, &value)?;
            config.save_in(&dir)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = Config::load_in(&dir).unwrap_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            Config::default().save_in(&dir)?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
