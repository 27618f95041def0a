//! Basic Block Management
//! 
//! A block owns its values and ends in exactly one exit. The exit shapes
//! carry their own successors and control value, so a conditional block
//! without a control value cannot be built.

use c0_common::{BlockId, CompilerError, ValueId};
use serde::{Deserialize, Serialize};
use crate::ir::Value;

/// Block kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Cont,
    First,
    If,
    Ret,
}

/// How control leaves a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockExit {
    /// Falls through to at most one successor
    Cont(Option<BlockId>),
    /// Function entry branching on `control`
    First {
        control: ValueId,
        then: BlockId,
        els: BlockId,
    },
    /// Two-way conditional branch on `control`
    If {
        control: ValueId,
        then: BlockId,
        els: BlockId,
    },
    /// Return, optionally with a value
    Ret(Option<ValueId>),
}

impl BlockExit {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockExit::Cont(_) => BlockKind::Cont,
            BlockExit::First { .. } => BlockKind::First,
            BlockExit::If { .. } => BlockKind::If,
            BlockExit::Ret(_) => BlockKind::Ret,
        }
    }

    pub fn control(&self) -> Option<ValueId> {
        match *self {
            BlockExit::First { control, .. } | BlockExit::If { control, .. } => Some(control),
            BlockExit::Ret(control) => control,
            BlockExit::Cont(_) => None,
        }
    }

    pub fn succs(&self) -> Vec<BlockId> {
        match *self {
            BlockExit::Cont(succ) => succ.into_iter().collect(),
            BlockExit::First { then, els, .. } | BlockExit::If { then, els, .. } => vec![then, els],
            BlockExit::Ret(_) => Vec::new(),
        }
    }
}

/// Basic Block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(default)]
    preds: Vec<BlockId>,
    pub exit: BlockExit,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub values: Vec<Value>,
}

impl Block {
    pub const MAX_PREDS: usize = 2;

    pub fn new(id: BlockId, exit: BlockExit) -> Self {
        Self {
            id,
            preds: Vec::new(),
            exit,
            comment: None,
            values: Vec::new(),
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.exit.kind()
    }

    pub fn preds(&self) -> &[BlockId] {
        &self.preds
    }

    pub fn add_pred(&mut self, pred: BlockId) -> Result<(), CompilerError> {
        if self.preds.len() == Self::MAX_PREDS {
            return Err(CompilerError::InternalError {
                message: format!("block b{} already has {} predecessors", self.id, Self::MAX_PREDS),
            });
        }
        self.preds.push(pred);
        Ok(())
    }

    pub fn add_value(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_shapes() {
        let cont = BlockExit::Cont(Some(2));
        assert_eq!(cont.kind(), BlockKind::Cont);
        assert_eq!(cont.succs(), vec![2]);
        assert_eq!(cont.control(), None);

        let cond = BlockExit::If { control: 4, then: 1, els: 2 };
        assert_eq!(cond.kind(), BlockKind::If);
        assert_eq!(cond.succs(), vec![1, 2]);
        assert_eq!(cond.control(), Some(4));

        let ret = BlockExit::Ret(None);
        assert!(ret.succs().is_empty());
        assert_eq!(ret.control(), None);
        assert_eq!(BlockExit::Ret(Some(3)).control(), Some(3));
    }

    #[test]
    fn test_at_most_two_preds() {
        let mut block = Block::new(3, BlockExit::Ret(None));
        block.add_pred(1).unwrap();
        block.add_pred(2).unwrap();
        assert!(block.add_pred(0).is_err());
        assert_eq!(block.preds(), &[1, 2]);
    }
}
