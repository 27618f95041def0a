//! Source locations attached to IR values

use crate::input::Input;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// A location in a source input (line and column are 1-based, line 0 means unknown)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceLocation {
    #[serde(default)]
    pub input: Option<Rc<Input>>,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    /// Create a location within a known input
    pub fn new(input: Rc<Input>, line: u32, column: u32) -> Self {
        Self {
            input: Some(input),
            line,
            column,
        }
    }

    /// Create a location with just line and column
    pub fn new_simple(line: u32, column: u32) -> Self {
        Self {
            input: None,
            line,
            column,
        }
    }

    pub fn is_known(&self) -> bool {
        self.line != 0
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.input {
            Some(input) => write!(f, "{}:{}:{}", input.name(), self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}
