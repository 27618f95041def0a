//! Debug formatting for AST and IR
//!
//! ## Architecture
//!
//! - `buf` - Growable output buffer and the retry-to-fit protocol
//! - `config` - Printer settings
//! - `ast` - Depth-bounded AST and type printer
//! - `ir` - Column-aligned IR unit printer
//!
//! The free functions below use the default configuration.

pub mod ast;
pub mod buf;
pub mod config;
pub mod ir;

pub use self::ast::AstPrinter;
pub use self::buf::{Buf, Window, INITIAL_GUESS};
pub use self::config::{FmtConfig, ForStep};
pub use self::ir::{format_general, IrPrinter};

use crate::ast::Node;
use crate::ir::Unit;
use crate::types::Type;
use c0_common::CompilerError;

/// Append `node` to `buf`, expanding at most `max_depth` levels
pub fn render_node(buf: &mut Buf, node: &Node, max_depth: u32) -> Result<(), CompilerError> {
    AstPrinter::default().render(buf, node, max_depth)
}

pub fn render_type(buf: &mut Buf, ty: &Type, max_depth: u32) -> Result<(), CompilerError> {
    AstPrinter::default().render_type(buf, ty, max_depth)
}

/// Append the dump of `unit`; only fails when the buffer cannot grow
pub fn render_unit(buf: &mut Buf, unit: &Unit) -> Result<(), CompilerError> {
    IrPrinter::default().render(buf, unit)
}
