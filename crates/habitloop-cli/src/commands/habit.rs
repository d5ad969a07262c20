//! Habit management commands for CLI.

use std::path::Path;

use chrono::NaiveDate;
use clap::Subcommand;
use habitloop_core::storage::{Config, HabitSlot};
use habitloop_core::{seed_habits, HabitStore, ToggleOutcome};

use crate::interact;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a new habit
    Add {
        /// Habit title; prompts interactively when omitted
        title: Option<String>,
    },
    /// List habits
    List {
        /// Print the raw habit sequence as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get habit details
    Get {
        /// Habit ID
        id: String,
    },
    /// Rename a habit
    Edit {
        /// Habit ID
        id: String,
        /// New title; prompts interactively when omitted
        title: Option<String>,
    },
    /// Delete a habit
    Delete {
        /// Habit ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Mark a habit done for the day
    Done {
        /// Habit ID
        id: String,
        /// Calendar day to record instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: HabitAction, data_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = super::resolve_data_dir(data_dir)?;
    let config = Config::load_in(&dir).unwrap_or_default();

    let seed = if config.habits.seed_defaults {
        seed_habits()
    } else {
        Vec::new()
    };
    let mut store = HabitStore::load(HabitSlot::open_in(&dir), seed);

    match action {
        HabitAction::Add { title } => {
            let input = interact::text_input();
            let Some(title) = title.or_else(|| input.prompt("Habit title")) else {
                println!("No title provided; habit not added.");
                return Ok(());
            };
            match store.add_habit(&title) {
                Some(habit) => {
                    println!("Habit created: {}", habit.id);
                    println!("{}", serde_json::to_string_pretty(habit)?);
                }
                None => println!("Empty title; habit not added."),
            }
        }
        HabitAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.habits())?);
            } else if store.is_empty() {
                println!("No habits yet. Add one with `habit add`.");
            } else {
                for habit in store.habits() {
                    let mark = if habit.done { "x" } else { " " };
                    println!(
                        "[{mark}] {}  ({})  {}",
                        habit.title,
                        habit.streak_label(),
                        habit.id
                    );
                }
            }
        }
        HabitAction::Get { id } => match store.get(&id) {
            Some(habit) => println!("{}", serde_json::to_string_pretty(habit)?),
            None => return Err(format!("habit not found: {id}").into()),
        },
        HabitAction::Edit { id, title } => {
            let input = interact::text_input();
            let Some(title) = title.or_else(|| input.prompt("New title")) else {
                println!("No title provided; habit unchanged.");
                return Ok(());
            };
            if store.edit_habit(&id, &title) {
                println!("Habit renamed: {id}");
            } else {
                println!("Habit unchanged.");
            }
        }
        HabitAction::Delete { id, yes } => {
            let confirmed = yes
                || !config.ui.confirm_delete
                || interact::confirm(&format!("Delete habit {id}?"));
            if !confirmed {
                println!("Cancelled.");
                return Ok(());
            }
            if store.delete_habit(&id) {
                println!("Habit deleted: {id}");
            } else {
                println!("No habit with id {id}.");
            }
        }
        HabitAction::Done { id, date } => {
            let outcome = match date {
                Some(day) => store.toggle_habit_on(&id, day),
                None => store.toggle_habit(&id),
            };
            match outcome {
                ToggleOutcome::Completed { streak } => println!("Done. {streak}-day streak."),
                ToggleOutcome::AlreadyDoneToday => println!("Already completed today."),
                ToggleOutcome::NotFound => return Err(format!("habit not found: {id}").into()),
            }
        }
    }
    Ok(())
}
