//! IR values
//!
//! A value is one instruction result inside a block. Operands refer to
//! other values of the same function by id.

use crate::ast::Op;
use crate::types::TypeRef;
use c0_common::{SourceLocation, ValueId};
use serde::{Deserialize, Serialize};

/// Inline scalar payload used by `arg`, `iconst` and `fconst`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Aux {
    #[default]
    None,
    /// Argument index (`arg`)
    Index(u32),
    /// Integer constant bits (`iconst`)
    Int(u64),
    /// Float constant (`fconst`)
    Float(f64),
}

/// IR Value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub id: ValueId,
    pub op: Op,
    pub ty: TypeRef,
    #[serde(default)]
    pub args: Vec<ValueId>,
    #[serde(default)]
    pub aux: Aux,
    #[serde(default)]
    pub nuse: u32,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub loc: Option<SourceLocation>,
}

impl Value {
    pub fn new(id: ValueId, op: Op, ty: TypeRef) -> Self {
        Self {
            id,
            op,
            ty,
            args: Vec::new(),
            aux: Aux::None,
            nuse: 0,
            comment: None,
            loc: None,
        }
    }

    /// `arg N`: the N:th function argument
    pub fn arg(id: ValueId, ty: TypeRef, index: u32) -> Self {
        Self { aux: Aux::Index(index), ..Self::new(id, Op::Arg, ty) }
    }

    pub fn iconst(id: ValueId, ty: TypeRef, value: u64) -> Self {
        Self { aux: Aux::Int(value), ..Self::new(id, Op::IConst, ty) }
    }

    pub fn fconst(id: ValueId, ty: TypeRef, value: f64) -> Self {
        Self { aux: Aux::Float(value), ..Self::new(id, Op::FConst, ty) }
    }

    pub fn with_args(mut self, args: &[ValueId]) -> Self {
        self.args = args.to_vec();
        self
    }

    pub fn with_uses(mut self, nuse: u32) -> Self {
        self.nuse = nuse;
        self
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn with_loc(mut self, loc: SourceLocation) -> Self {
        self.loc = Some(loc);
        self
    }
}
