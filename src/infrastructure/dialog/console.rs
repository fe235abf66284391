//! Console dialog adapter
//!
//! Terminal stand-in for the host's modal dialogs: a `[y/N]` prompt on
//! stdin for confirmation, colored stderr lines for info and errors.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use colored::*;

use crate::application::ports::{Dialog, DialogError};

/// Dialog implementation reading answers from the terminal.
pub struct ConsoleDialog {
    /// Answer yes to every confirmation without prompting
    assume_yes: bool,
}

impl ConsoleDialog {
    /// Create a dialog that prompts interactively
    pub fn new() -> Self {
        Self { assume_yes: false }
    }

    /// Create a dialog that skips prompts (scripted use)
    pub fn assume_yes() -> Self {
        Self { assume_yes: true }
    }

    fn prompt_sync(title: &str, message: &str) -> Result<bool, DialogError> {
        let mut stderr = io::stderr();
        write!(
            stderr,
            "{} {} {} ",
            format!("[{}]", title).cyan().bold(),
            message,
            "[y/N]".dimmed()
        )
        .map_err(|e| DialogError::PresentFailed(e.to_string()))?;
        stderr
            .flush()
            .map_err(|e| DialogError::PresentFailed(e.to_string()))?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(|e| DialogError::PresentFailed(e.to_string()))?;

        let answer = answer.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

impl Default for ConsoleDialog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Dialog for ConsoleDialog {
    async fn confirm(&self, title: &str, message: &str) -> Result<bool, DialogError> {
        if self.assume_yes {
            return Ok(true);
        }

        let title = title.to_string();
        let message = message.to_string();
        // stdin reads block; keep them off the async workers
        tokio::task::spawn_blocking(move || Self::prompt_sync(&title, &message))
            .await
            .map_err(|e| DialogError::PresentFailed(format!("Prompt task error: {}", e)))?
    }

    async fn info(&self, title: &str, message: &str) -> Result<(), DialogError> {
        eprintln!("{} {}", format!("[{}]", title).green().bold(), message);
        Ok(())
    }

    async fn error(&self, title: &str, message: &str) -> Result<(), DialogError> {
        eprintln!("{} {}", format!("[{}]", title).red().bold(), message);
        Ok(())
    }
}
