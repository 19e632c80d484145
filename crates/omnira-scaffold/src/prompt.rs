//! Line-oriented prompting
//!
//! The orchestrator asks its questions through [`Prompter`]. [`LinePrompter`]
//! reads plain lines from any reader (piped stdin, tests); the cliclack
//! implementation lives in `tui` behind the `tui` feature.

use crate::error::PromptError;
use std::io::{BufRead, Write};

/// Source of operator answers
pub trait Prompter {
    /// Show a block of numbered options ahead of a question
    fn menu(&mut self, title: &str, items: &[String]) -> Result<(), PromptError>;

    /// Ask one question and block until a line is answered.
    ///
    /// `default_hint` is only displayed; a blank answer comes back as an empty
    /// string and the caller applies the default.
    fn ask(&mut self, question: &str, default_hint: &str) -> Result<String, PromptError>;

    /// Release the input stream once every question is answered
    fn close(&mut self) -> Result<(), PromptError> {
        Ok(())
    }
}

/// Prompter over a buffered reader and a writer for the question text
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    /// Hand back the writer (tests inspect what was displayed)
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn menu(&mut self, title: &str, items: &[String]) -> Result<(), PromptError> {
        writeln!(self.output, "  {}", title)?;
        for item in items {
            writeln!(self.output, "    {}", item)?;
        }
        Ok(())
    }

    fn ask(&mut self, question: &str, default_hint: &str) -> Result<String, PromptError> {
        if self.closed {
            return Err(PromptError::InputClosed {
                question: question.to_string(),
            });
        }

        if default_hint.is_empty() {
            write!(self.output, "  {}: ", question)?;
        } else {
            write!(self.output, "  {} ({}): ", question, default_hint)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(PromptError::InputClosed {
                question: question.to_string(),
            });
        }

        Ok(line.trim().to_string())
    }

    fn close(&mut self) -> Result<(), PromptError> {
        self.closed = true;
        self.output.flush()?;
        Ok(())
    }
}
