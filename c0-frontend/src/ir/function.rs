//! Function Definitions

use crate::ast::Fun;
use crate::ir::Block;
use c0_common::BlockId;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Function in IR. `ast` links back to the definition it was lowered from
/// and is used to print the signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub ast: Option<Rc<Fun>>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Function {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ast: None,
            blocks: Vec::new(),
        }
    }

    /// Create a function named after its AST definition
    pub fn from_ast(ast: Rc<Fun>) -> Self {
        Self {
            name: ast.name.clone(),
            ast: Some(ast),
            blocks: Vec::new(),
        }
    }

    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn get_block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn entry_block(&self) -> Option<&Block> {
        self.blocks.first()
    }
}
