//! Lowered Intermediate Representation
//! 
//! A unit holds functions, functions hold basic blocks and blocks hold
//! values. Values refer to their operands by id and to their result type
//! through a shared `TypeRef`.
//! 
//! ## Architecture
//! 
//! - `values` - IR values and their inline payload
//! - `blocks` - Basic blocks and their exits
//! - `function` - Function definitions
//! - `module` - The unit of functions

pub use self::values::{Aux, Value};
pub use self::blocks::{Block, BlockExit, BlockKind};
pub use self::function::Function;
pub use self::module::Unit;

mod values;
mod blocks;
mod function;
mod module;
