//! Confirmation for destructive actions.
//!
//! Clearing data and deleting notes must be confirmed by the user first.
//! Declining is a no-op, never an error.

use crate::models::text::Text;

/// Asks the user to confirm a destructive action.
pub trait Confirmation {
    /// Shows `prompt` and returns whether the user agreed.
    fn confirm(&mut self, prompt: &Text) -> bool;
}

/// Answers every prompt with a fixed value (`--yes` flags and tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirmation for FixedAnswer {
    fn confirm(&mut self, _prompt: &Text) -> bool {
        self.0
    }
}
