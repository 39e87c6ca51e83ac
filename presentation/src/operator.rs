//! Interactive operator prompt
//!
//! The adapter the approval gate suspends on when the trust policy requires a
//! human decision. Renders the action and its details on the terminal, then
//! blocks on a yes/no confirmation with an affirmative default. There is no
//! timeout: an unanswered prompt is absence of progress.

use async_trait::async_trait;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm};
use toolgate_application::{OperatorPrompt, PromptError};

/// Terminal-based operator prompt
pub struct InteractiveOperatorPrompt;

impl InteractiveOperatorPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InteractiveOperatorPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OperatorPrompt for InteractiveOperatorPrompt {
    async fn confirm(&self, action: &str, details: &str) -> Result<bool, PromptError> {
        println!();
        println!("{} {}", "Allow:".bold(), action.cyan().bold());
        for line in details.lines() {
            println!("  {}", line.dimmed());
        }

        let approved = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Proceed?")
            .default(true)
            .interact()
            .map_err(|e| match e {
                dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                    PromptError::Interrupted
                }
                dialoguer::Error::IO(io) => PromptError::Io(io.to_string()),
            })?;

        Ok(approved)
    }
}
