//! Charm-style CLI prompts using cliclack

use crate::error::PromptError;
use crate::prompt::Prompter;

/// Interactive prompter used when stdin is a terminal.
///
/// Cancelling a prompt surfaces as [`PromptError::Interrupted`].
#[derive(Debug, Default)]
pub struct ClackPrompter;

impl ClackPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for ClackPrompter {
    fn menu(&mut self, title: &str, items: &[String]) -> Result<(), PromptError> {
        cliclack::note(title, items.join("\n"))?;
        Ok(())
    }

    fn ask(&mut self, question: &str, default_hint: &str) -> Result<String, PromptError> {
        let answer: String = cliclack::input(question)
            .placeholder(default_hint)
            .required(false)
            .interact()?;
        Ok(answer.trim().to_string())
    }
}

/// Make sure the terminal cursor is visible again (after panics or Ctrl+C)
pub fn restore_cursor() {
    let _ = console::Term::stderr().show_cursor();
}
