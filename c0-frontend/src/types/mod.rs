//! Type system definitions
//!
//! Types are shared between many AST and IR sites, so every reference to a
//! type is a `TypeRef` (`Rc<Type>`). Two sites referring to the same type
//! object can be told apart from two structurally equal types with
//! `Rc::ptr_eq`.

use crate::ast::Local;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Shared, non-owning handle to a type
pub type TypeRef = Rc<Type>;

/// Type nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Type {
    Void,
    Bool,

    /// Signed integers
    I8, I16, I32, I64, Int,

    /// Unsigned integers
    U8, U16, U32, U64, UInt,

    /// Floating point
    F32, F64,

    Struct(StructType),

    Fun(FunType),

    /// Array with a fixed length; a length of 0 means unsized
    Array {
        elem: TypeRef,
        len: u64,
    },

    Slice {
        elem: TypeRef,
        mutable: bool,
    },

    Ptr(TypeRef),

    Ref {
        elem: TypeRef,
        mutable: bool,
    },

    Optional(TypeRef),

    /// Named alias of another type
    Alias {
        name: String,
        elem: TypeRef,
    },

    /// Type not yet known (before type checking)
    Unknown,

    /// Named type not yet resolved
    Unresolved(String),
}

/// Struct type; `name` is `None` for anonymous structs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructType {
    pub name: Option<String>,
    pub fields: Vec<Local>,
}

/// Function signature type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunType {
    pub params: Vec<Local>,
    pub result: TypeRef,
}

impl Type {
    pub fn is_unsigned(&self) -> bool {
        matches!(self, Type::U8 | Type::U16 | Type::U32 | Type::U64 | Type::UInt)
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Type::I8 | Type::I16 | Type::I32 | Type::I64 | Type::Int)
    }

    pub fn is_integer(&self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Type::F32 | Type::F64)
    }

    /// Keyword for primitive types, `None` for composite ones
    pub fn primitive_name(&self) -> Option<&'static str> {
        let name = match self {
            Type::Void => "void",
            Type::Bool => "bool",
            Type::I8 => "i8",
            Type::I16 => "i16",
            Type::I32 => "i32",
            Type::I64 => "i64",
            Type::Int => "int",
            Type::U8 => "u8",
            Type::U16 => "u16",
            Type::U32 => "u32",
            Type::U64 => "u64",
            Type::UInt => "uint",
            Type::F32 => "f32",
            Type::F64 => "f64",
            _ => return None,
        };
        Some(name)
    }

    /// Human readable kind, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Struct(_) => "struct type",
            Type::Unknown => "unknown type",
            Type::Unresolved(_) => "named type",
            _ => "type",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signedness() {
        assert!(Type::U8.is_unsigned());
        assert!(Type::UInt.is_unsigned());
        assert!(!Type::I64.is_unsigned());
        assert!(Type::Int.is_signed());
        assert!(Type::U32.is_integer());
        assert!(!Type::F32.is_integer());
        assert!(Type::F64.is_float());
        assert!(!Type::Bool.is_signed());
    }

    #[test]
    fn test_primitive_names() {
        assert_eq!(Type::Void.primitive_name(), Some("void"));
        assert_eq!(Type::UInt.primitive_name(), Some("uint"));
        assert_eq!(Type::F32.primitive_name(), Some("f32"));
        assert_eq!(Type::Ptr(Rc::new(Type::I8)).primitive_name(), None);
    }

    #[test]
    fn test_kind_names() {
        let st = Type::Struct(StructType { name: None, fields: vec![] });
        assert_eq!(st.kind_name(), "struct type");
        assert_eq!(Type::Unresolved("T".to_string()).kind_name(), "named type");
        assert_eq!(Type::I32.kind_name(), "type");
    }
}
