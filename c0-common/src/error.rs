//! Error handling for the c0 compiler
//!
//! This module defines the error type shared by the source input layer,
//! the printers and the driver.

use std::collections::TryReserveError;
use thiserror::Error;

/// Main compiler error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("IO error on {path}: {message}")]
    IoError {
        path: String,
        message: String,
    },

    #[error("Out of memory while growing buffer to {requested} bytes")]
    OutOfMemory { requested: usize },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Internal compiler error: {message}")]
    InternalError { message: String },
}

impl CompilerError {
    /// Create an IO error for a named file
    pub fn io_error(path: &str, err: &std::io::Error) -> Self {
        CompilerError::IoError {
            path: path.to_string(),
            message: err.to_string(),
        }
    }

    /// Create an out-of-memory error from a failed reservation
    pub fn out_of_memory(requested: usize, _err: TryReserveError) -> Self {
        CompilerError::OutOfMemory { requested }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: String) -> Self {
        CompilerError::InvalidInput { message }
    }

    /// Whether this error came from allocation exhaustion
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, CompilerError::OutOfMemory { .. })
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IoError {
            path: "<unknown>".to_string(),
            message: err.to_string(),
        }
    }
}

/// Convert from String (for simple error cases)
impl From<String> for CompilerError {
    fn from(message: String) -> Self {
        CompilerError::InternalError { message }
    }
}
