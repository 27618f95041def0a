//! Abstract Syntax Tree definitions
//! 
//! This module defines the AST nodes built by the parser. Nodes own their
//! children; types are shared through `TypeRef` handles.

pub mod ops;
pub mod expressions;
pub mod statements;

pub use ops::Op;
pub use expressions::Node;
pub use statements::{Fun, Local};
