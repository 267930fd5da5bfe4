//! Cancellable interactive text capture.
//!
//! The quick-append command collects its text through a [`TextPrompt`].
//! Dismissing the prompt without a value resolves to
//! [`PromptOutcome::Cancelled`], which callers treat as "operation
//! cancelled" — never as an error, and never followed by a write.

use crate::error::{DaybookError, Result};
use console::Term;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Value(String),
    Cancelled,
}

pub trait TextPrompt {
    fn request_text(&mut self, label: &str) -> Result<PromptOutcome>;
}

/// Terminal prompt on stderr, so piped stdout stays clean.
pub struct ConsolePrompt {
    term: Term,
}

impl ConsolePrompt {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPrompt for ConsolePrompt {
    fn request_text(&mut self, label: &str) -> Result<PromptOutcome> {
        self.term
            .write_str(&format!("{}: ", label))
            .map_err(DaybookError::Io)?;

        let line = match self.term.read_line() {
            Ok(line) => line,
            // Ctrl-C style interruption is a dismissal, not a failure.
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                return Ok(PromptOutcome::Cancelled)
            }
            Err(e) => return Err(DaybookError::Io(e)),
        };

        let value = line.trim_end().to_string();
        if value.is_empty() {
            Ok(PromptOutcome::Cancelled)
        } else {
            Ok(PromptOutcome::Value(value))
        }
    }
}
