//! c0 compiler - Frontend
//!
//! This crate provides the frontend data model of the c0 compiler and its
//! debug printers:
//! - AST: expression-oriented syntax tree and operator table
//! - Types: shared type nodes
//! - IR: units, functions, basic blocks and values
//! - Fmt: depth-bounded AST printer and column-aligned IR printer

pub mod ast;
pub mod types;
pub mod ir;
pub mod fmt;

pub use ast::{Fun, Local, Node, Op};
pub use types::{FunType, StructType, Type, TypeRef};
pub use ir::{Aux, Block, BlockExit, BlockKind, Function, Unit, Value};
pub use fmt::{render_node, render_type, render_unit, AstPrinter, Buf, FmtConfig, ForStep, IrPrinter};

use c0_common::CompilerError;

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Decode an AST node from its JSON form
    pub fn node_from_json(json: &str) -> Result<Node, CompilerError> {
        serde_json::from_str(json).map_err(|e| CompilerError::invalid_input(format!("bad AST: {e}")))
    }

    /// Decode an IR unit from its JSON form
    pub fn unit_from_json(json: &str) -> Result<Unit, CompilerError> {
        serde_json::from_str(json).map_err(|e| CompilerError::invalid_input(format!("bad IR unit: {e}")))
    }

    /// Render a node to a fresh string
    pub fn dump_node(node: &Node, max_depth: u32, config: &FmtConfig) -> Result<String, CompilerError> {
        let mut buf = Buf::new();
        AstPrinter::new(config.clone()).render(&mut buf, node, max_depth)?;
        Ok(buf.into_string())
    }

    /// Render a unit to a fresh string
    pub fn dump_unit(unit: &Unit, config: &FmtConfig) -> Result<String, CompilerError> {
        let mut buf = Buf::new();
        IrPrinter::new(config.clone()).render(&mut buf, unit)?;
        Ok(buf.into_string())
    }
}
