//! AST nodes
//!
//! The language is expression oriented, so a single `Node` enum covers
//! declarations, statements, expressions and embedded type references.

use super::ops::Op;
use super::statements::{Fun, Local};
use crate::types::TypeRef;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// AST node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Placeholder produced by the parser on syntax errors
    Bad,

    Comment(String),

    /// Top-level compilation unit
    Unit(Vec<Node>),

    /// `type T ...`
    TypeDef(TypeRef),

    Param(Local),
    Field(Local),
    Let(Local),
    Var(Local),

    Fun(Rc<Fun>),

    Block(Vec<Node>),

    Call {
        recv: Box<Node>,
        args: Vec<Node>,
    },

    /// Type constructor call, e.g. `u8(x)`
    TypeCons {
        ty: TypeRef,
        expr: Option<Box<Node>>,
    },

    Member {
        recv: Box<Node>,
        name: String,
    },

    If {
        cond: Box<Node>,
        then: Box<Node>,
        els: Option<Box<Node>>,
    },

    For {
        start: Option<Box<Node>>,
        cond: Option<Box<Node>>,
        end: Option<Box<Node>>,
        body: Box<Node>,
    },

    Id(String),

    Return(Option<Box<Node>>),

    Deref(Box<Node>),

    PrefixOp {
        op: Op,
        expr: Box<Node>,
    },

    PostfixOp {
        op: Op,
        expr: Box<Node>,
    },

    Assign {
        op: Op,
        left: Box<Node>,
        right: Box<Node>,
    },

    BinOp {
        op: Op,
        left: Box<Node>,
        right: Box<Node>,
    },

    BoolLit(bool),

    /// Integer literal; printed in hex when `ty` is unsigned
    IntLit {
        value: u64,
        ty: Option<TypeRef>,
    },

    FloatLit(f64),

    /// String literal as raw bytes
    StrLit(Vec<u8>),

    ArrayLit(Vec<Node>),

    /// A type used in node position
    Type(TypeRef),
}

impl Node {
    pub fn id(name: &str) -> Self {
        Node::Id(name.to_string())
    }

    pub fn int(value: u64, ty: Option<TypeRef>) -> Self {
        Node::IntLit { value, ty }
    }

    pub fn str_lit(bytes: &[u8]) -> Self {
        Node::StrLit(bytes.to_vec())
    }

    pub fn binop(op: Op, left: Node, right: Node) -> Self {
        Node::BinOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn assign(op: Op, left: Node, right: Node) -> Self {
        Node::Assign {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(recv: Node, args: Vec<Node>) -> Self {
        Node::Call {
            recv: Box::new(recv),
            args,
        }
    }

    pub fn member(recv: Node, name: &str) -> Self {
        Node::Member {
            recv: Box::new(recv),
            name: name.to_string(),
        }
    }

    /// Human readable kind, for diagnostics ("expected value, got type definition")
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Param(_) => "parameter",
            Node::Let(_) => "binding",
            Node::Var(_) => "variable",
            Node::Fun(_) => "function",
            Node::Block(_) => "block",
            Node::Id(_) => "identifier",
            Node::PrefixOp { .. } | Node::PostfixOp { .. } | Node::BinOp { .. } => "operation",
            Node::Assign { .. } => "assignment",
            Node::Deref(_) => "dereference",
            Node::IntLit { .. } | Node::FloatLit(_) | Node::BoolLit(_) => "constant",
            Node::Member { .. } => "member",
            Node::Field(_) => "field",
            Node::TypeDef(_) => "type definition",
            Node::Type(ty) => ty.kind_name(),
            Node::Unit(_) => "unit",
            Node::Bad => "bad node",
            Node::Comment(_) => "comment",
            Node::Call { .. }
            | Node::TypeCons { .. }
            | Node::If { .. }
            | Node::For { .. }
            | Node::Return(_)
            | Node::StrLit(_)
            | Node::ArrayLit(_) => "expression",
        }
    }
}
