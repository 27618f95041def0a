//! c0 compiler - Common Types and Utilities
//! 
//! This crate contains the id types, error definitions and source input
//! handling shared by the frontend and the driver.

pub mod error;
pub mod types;
pub mod input;
pub mod source_loc;

pub use error::CompilerError;
pub use types::*;
pub use input::Input;
pub use source_loc::SourceLocation;
