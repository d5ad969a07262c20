//! Interactive collaborators: free-text input and the delete confirmation.
//!
//! Prompt availability is resolved once per invocation from whether stdin
//! is a terminal. Non-interactive invocations (pipes, scripts) degrade to
//! a visible notice and a no-op rather than blocking on a read.

use std::io::{BufRead, IsTerminal, Write};

/// Text-input capability, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInput {
    Interactive,
    Unavailable,
}

/// Detect whether free-text prompts can be shown.
pub fn text_input() -> TextInput {
    if std::io::stdin().is_terminal() {
        TextInput::Interactive
    } else {
        TextInput::Unavailable
    }
}

impl TextInput {
    /// Ask the user for a line of text. `None` when input is unavailable
    /// or the entered line is empty.
    pub fn prompt(self, message: &str) -> Option<String> {
        match self {
            TextInput::Unavailable => {
                eprintln!("Interactive input is not available here; pass the text as an argument.");
                None
            }
            TextInput::Interactive => {
                print!("{message}: ");
                let _ = std::io::stdout().flush();
                let mut line = String::new();
                std::io::stdin().lock().read_line(&mut line).ok()?;
                let line = line.trim();
                if line.is_empty() {
                    None
                } else {
                    Some(line.to_string())
                }
            }
        }
    }
}

/// Yes/no gate used before destructive operations. Answers no when input
/// is unavailable.
pub fn confirm(message: &str) -> bool {
    match text_input() {
        TextInput::Unavailable => false,
        TextInput::Interactive => {
            print!("{message} [y/N] ");
            let _ = std::io::stdout().flush();
            let mut line = String::new();
            if std::io::stdin().lock().read_line(&mut line).is_err() {
                return false;
            }
            matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
        }
    }
}
