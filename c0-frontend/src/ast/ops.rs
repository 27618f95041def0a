//! Operator definitions
//!
//! A single operator enumeration is shared by AST operation nodes and IR
//! values. Every operator maps to a display token (`symbol`) and a short
//! lowercase mnemonic (`name`); both matches are exhaustive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    // Structural (IR only)
    Noop, Alias, Arg, Borrow, BorrowMut, Call, Drop, FConst, Fun, IConst,
    Move, OCheck, Phi, Store, Var, Zero, Cast, Gep,

    // Unary
    Inc, Dec, Inv, Not, Deref,

    // Arithmetic
    Add, Sub, Mul, Div, Mod,

    // Bitwise
    And, Or, Xor, Shl, Shr,

    // Logical
    LAnd, LOr,

    // Comparison
    Eq, Neq, Lt, Gt, LtEq, GtEq,

    // Assignment
    Assign,
    AddAssign, AndAssign, DivAssign, ModAssign, MulAssign,
    OrAssign, ShlAssign, ShrAssign, SubAssign, XorAssign,
}

impl Op {
    /// Lowercase mnemonic, used for IR value lines
    pub fn name(self) -> &'static str {
        match self {
            Op::Noop => "noop",
            Op::Alias => "alias",
            Op::Arg => "arg",
            Op::Borrow => "borrow",
            Op::BorrowMut => "borrow_mut",
            Op::Call => "call",
            Op::Drop => "drop",
            Op::FConst => "fconst",
            Op::Fun => "fun",
            Op::IConst => "iconst",
            Op::Move => "move",
            Op::OCheck => "ocheck",
            Op::Phi => "phi",
            Op::Store => "store",
            Op::Var => "var",
            Op::Zero => "zero",
            Op::Cast => "cast",
            Op::Gep => "gep",
            Op::Inc => "inc",
            Op::Dec => "dec",
            Op::Inv => "inv",
            Op::Not => "not",
            Op::Deref => "deref",
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Mod => "mod",
            Op::And => "and",
            Op::Or => "or",
            Op::Xor => "xor",
            Op::Shl => "shl",
            Op::Shr => "shr",
            Op::LAnd => "land",
            Op::LOr => "lor",
            Op::Eq => "eq",
            Op::Neq => "neq",
            Op::Lt => "lt",
            Op::Gt => "gt",
            Op::LtEq => "lteq",
            Op::GtEq => "gteq",
            Op::Assign => "assign",
            Op::AddAssign => "add_assign",
            Op::AndAssign => "and_assign",
            Op::DivAssign => "div_assign",
            Op::ModAssign => "mod_assign",
            Op::MulAssign => "mul_assign",
            Op::OrAssign => "or_assign",
            Op::ShlAssign => "shl_assign",
            Op::ShrAssign => "shr_assign",
            Op::SubAssign => "sub_assign",
            Op::XorAssign => "xor_assign",
        }
    }

    /// Display token: the source symbol for expression operators,
    /// the mnemonic for structural ones
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Noop | Op::Alias | Op::Arg | Op::Borrow | Op::BorrowMut | Op::Call
            | Op::Drop | Op::FConst | Op::Fun | Op::IConst | Op::Move | Op::OCheck
            | Op::Phi | Op::Store | Op::Var | Op::Zero | Op::Cast | Op::Gep => self.name(),

            Op::Inc => "++",
            Op::Dec => "--",
            Op::Inv => "~",
            Op::Not => "!",
            Op::Deref => "*",

            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Mod => "%",

            Op::And => "&",
            Op::Or => "|",
            Op::Xor => "^",
            Op::Shl => "<<",
            Op::Shr => ">>",

            Op::LAnd => "&&",
            Op::LOr => "||",

            Op::Eq => "==",
            Op::Neq => "!=",
            Op::Lt => "<",
            Op::Gt => ">",
            Op::LtEq => "<=",
            Op::GtEq => ">=",

            Op::Assign => "=",
            Op::AddAssign => "+=",
            Op::AndAssign => "&=",
            Op::DivAssign => "/=",
            Op::ModAssign => "%=",
            Op::MulAssign => "*=",
            Op::OrAssign => "|=",
            Op::ShlAssign => "<<=",
            Op::ShrAssign => ">>=",
            Op::SubAssign => "-=",
            Op::XorAssign => "^=",
        }
    }

    pub fn is_unary(self) -> bool {
        matches!(self, Op::Inc | Op::Dec | Op::Inv | Op::Not | Op::Deref)
    }

    pub fn is_assign(self) -> bool {
        matches!(
            self,
            Op::Assign | Op::AddAssign | Op::AndAssign | Op::DivAssign | Op::ModAssign
                | Op::MulAssign | Op::OrAssign | Op::ShlAssign | Op::ShrAssign
                | Op::SubAssign | Op::XorAssign
        )
    }

    pub fn is_binary(self) -> bool {
        self.is_assign()
            || matches!(
                self,
                Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Mod
                    | Op::And | Op::Or | Op::Xor | Op::Shl | Op::Shr
                    | Op::LAnd | Op::LOr
                    | Op::Eq | Op::Neq | Op::Lt | Op::Gt | Op::LtEq | Op::GtEq
            )
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_display() {
        assert_eq!(format!("{}", Op::Add), "+");
        assert_eq!(format!("{}", Op::Neq), "!=");
        assert_eq!(format!("{}", Op::LAnd), "&&");
        assert_eq!(format!("{}", Op::ShrAssign), ">>=");
        assert_eq!(format!("{}", Op::Inv), "~");
    }

    #[test]
    fn test_structural_ops_use_mnemonic() {
        assert_eq!(Op::IConst.symbol(), "iconst");
        assert_eq!(Op::Phi.symbol(), "phi");
        assert_eq!(Op::BorrowMut.symbol(), "borrow_mut");
        assert_eq!(Op::Gep.name(), "gep");
    }

    #[test]
    fn test_op_classes() {
        assert!(Op::Deref.is_unary());
        assert!(!Op::Sub.is_unary());
        assert!(Op::Sub.is_binary());
        assert!(Op::XorAssign.is_binary());
        assert!(Op::XorAssign.is_assign());
        assert!(!Op::Eq.is_assign());
        assert!(!Op::Store.is_binary());
    }
}
