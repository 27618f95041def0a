//! Declaration AST nodes
//!
//! This module defines bindings (`Local`) and function definitions.

use super::expressions::Node;
use crate::types::TypeRef;
use serde::{Deserialize, Serialize};

/// A named binding: parameter, struct field, `let` or `var`.
/// `ty` is `None` until the type checker has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Local {
    pub name: String,
    pub ty: Option<TypeRef>,
    #[serde(default)]
    pub init: Option<Box<Node>>,
}

impl Local {
    pub fn new(name: &str, ty: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            ty: Some(ty),
            init: None,
        }
    }

    pub fn untyped(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: None,
            init: None,
        }
    }

    pub fn with_init(mut self, init: Node) -> Self {
        self.init = Some(Box::new(init));
        self
    }
}

/// Function definition. IR functions keep an `Rc<Fun>` back to this node
/// to print their signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fun {
    pub name: String,
    pub params: Vec<Local>,
    pub result: TypeRef,
    #[serde(default)]
    pub body: Option<Box<Node>>,
}

impl Fun {
    pub fn new(name: &str, params: Vec<Local>, result: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            params,
            result,
            body: None,
        }
    }

    pub fn with_body(mut self, body: Node) -> Self {
        self.body = Some(Box::new(body));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type;
    use std::rc::Rc;

    #[test]
    fn test_local_builders() {
        let i32_t = Rc::new(Type::I32);
        let local = Local::new("x", Rc::clone(&i32_t)).with_init(Node::int(3, None));
        assert_eq!(local.name, "x");
        assert!(Rc::ptr_eq(local.ty.as_ref().unwrap(), &i32_t));
        assert_eq!(local.init.as_deref(), Some(&Node::int(3, None)));
        assert!(Local::untyped("y").ty.is_none());
    }

    #[test]
    fn test_fun_builders() {
        let fun = Fun::new("main", vec![], Rc::new(Type::Void)).with_body(Node::Block(vec![]));
        assert_eq!(fun.name, "main");
        assert!(fun.body.is_some());
    }
}
