//! Printer configuration

use super::buf::INITIAL_GUESS;
use serde::{Deserialize, Serialize};

/// What the third slot of a `for start; cond; step` header shows.
///
/// Historically the step slot re-rendered the loop's start expression, and
/// golden dumps depend on that, so `Start` stays the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForStep {
    #[default]
    Start,
    End,
}

/// Settings shared by the AST and IR printers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FmtConfig {
    /// First window size tried by the AST printer
    pub initial_guess: usize,
    /// Spaces per indentation level
    pub indent_width: usize,
    pub for_step: ForStep,
}

impl Default for FmtConfig {
    fn default() -> Self {
        Self {
            initial_guess: INITIAL_GUESS,
            indent_width: 2,
            for_step: ForStep::Start,
        }
    }
}

impl FmtConfig {
    pub fn with_initial_guess(mut self, initial_guess: usize) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    pub fn with_for_step(mut self, for_step: ForStep) -> Self {
        self.for_step = for_step;
        self
    }
}
