//! Shared CLI plumbing: errors, exit codes, JSON output and confirmation.

use crate::confirm::{Confirmation, FixedAnswer};
use crate::models::Text;
use crate::ui::TerminalSurface;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input or a rejected request
    ValidationError = 1,
    /// Reading or writing files failed
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A CLI command failure.
#[derive(Error, Debug)]
pub enum CliError {
    /// Bad input or a rejected request
    #[error("{0}")]
    Validation(String),
    /// Reading or writing files failed
    #[error("{0}")]
    Io(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::ValidationError,
            Self::Io(_) => ExitCode::IoError,
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Asks on stdin, answering with the surface's wording.
///
/// Anything other than `y`/`yes` (including end of input) declines.
pub struct StdinConfirmation<'a> {
    surface: &'a TerminalSurface,
}

impl<'a> StdinConfirmation<'a> {
    /// Prompts through `surface`.
    #[must_use]
    pub const fn new(surface: &'a TerminalSurface) -> Self {
        Self { surface }
    }
}

impl Confirmation for StdinConfirmation<'_> {
    fn confirm(&mut self, prompt: &Text) -> bool {
        print!("{} [y/N] ", self.surface.warning(self.surface.text(prompt)));
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Confirmation for a destructive command: automatic with `--yes`, else stdin.
pub fn confirmation<'a>(yes: bool, surface: &'a TerminalSurface) -> Box<dyn Confirmation + 'a> {
    if yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(StdinConfirmation::new(surface))
    }
}
