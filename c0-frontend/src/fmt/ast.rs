//! AST printer
//!
//! Renders nodes and types as compact, source-like text for diagnostics
//! and debug dumps. Output is bounded by a maximum depth: block bodies,
//! unit members and loop parts are rendered one level shallower than their
//! parent, and anything rendered at depth 1 collapses (`{...}`, `[...]`,
//! `struct`, `for`). Wrapping forms such as member access, calls, unary
//! and binary operations do not consume depth.
//!
//! Rendering goes through `Buf::render_fit`, so a single call either
//! appends the complete text or nothing.

use super::buf::{Buf, Window};
use super::config::{FmtConfig, ForStep};
use crate::ast::{Fun, Local, Node};
use crate::types::{FunType, StructType, Type, TypeRef};
use c0_common::CompilerError;
use log::trace;
use std::rc::Rc;

/// Placeholder for an absent child
const NULL_NODE: &str = "(NULL)";

/// Depth-bounded AST renderer
#[derive(Debug, Clone, Default)]
pub struct AstPrinter {
    config: FmtConfig,
}

impl AstPrinter {
    pub fn new(config: FmtConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FmtConfig {
        &self.config
    }

    /// Append `node` to `buf`, expanding at most `max_depth` levels (at least 1)
    pub fn render(&self, buf: &mut Buf, node: &Node, max_depth: u32) -> Result<(), CompilerError> {
        let max_depth = max_depth.max(1);
        trace!("rendering {} at depth {}", node.kind_name(), max_depth);
        let config = &self.config;
        buf.render_fit(config.initial_guess, |w| {
            Renderer::new(w, config).node(Some(node), 0, max_depth)
        })
    }

    pub fn render_type(&self, buf: &mut Buf, ty: &Type, max_depth: u32) -> Result<(), CompilerError> {
        let max_depth = max_depth.max(1);
        let config = &self.config;
        buf.render_fit(config.initial_guess, |w| {
            Renderer::new(w, config).ty(Some(ty), 0, max_depth)
        })
    }

    /// Render a binding without its `let`/`var` keyword, as a parameter is shown
    pub fn render_local(&self, buf: &mut Buf, local: &Local, max_depth: u32) -> Result<(), CompilerError> {
        let max_depth = max_depth.max(1);
        let config = &self.config;
        buf.render_fit(config.initial_guess, |w| {
            Renderer::new(w, config).local(local, 0, max_depth)
        })
    }
}

struct Renderer<'a, 'b> {
    w: &'a mut Window<'b>,
    config: &'a FmtConfig,
}

impl<'a, 'b> Renderer<'a, 'b> {
    fn new(w: &'a mut Window<'b>, config: &'a FmtConfig) -> Self {
        Self { w, config }
    }

    /// Line break (unless this is the first output) and indentation
    fn startline(&mut self, indent: u32) {
        if !self.w.is_empty() {
            self.w.push_char('\n');
        }
        self.w.fill(' ', indent as usize * self.config.indent_width);
    }

    fn node_list(&mut self, nodes: &[Node], sep: &str, indent: u32, depth: u32) {
        for (i, n) in nodes.iter().enumerate() {
            if i > 0 {
                self.w.push_str(sep);
            }
            self.node(Some(n), indent, depth);
        }
    }

    /// Each child on its own line at `indent`, one depth level down
    fn lines(&mut self, nodes: &[Node], indent: u32, depth: u32) {
        for n in nodes {
            self.startline(indent);
            self.node(Some(n), indent, depth - 1);
        }
    }

    fn node(&mut self, n: Option<&Node>, indent: u32, depth: u32) {
        if depth == 0 {
            return;
        }
        let Some(n) = n else {
            self.w.push_str(NULL_NODE);
            return;
        };

        match n {
            Node::Bad => self.w.push_str("/*NODE_BAD*/"),

            Node::Comment(_) => self.w.push_str("/*comment*/"),

            Node::Unit(children) => {
                if depth <= 1 && !children.is_empty() {
                    self.w.push_str("...");
                } else {
                    self.lines(children, indent, depth);
                }
            }

            Node::TypeDef(ty) => {
                self.w.push_str("type ");
                self.ty(Some(ty), indent, depth);
            }

            Node::Let(local) => {
                self.w.push_str("let ");
                self.local(local, indent, depth);
            }

            Node::Var(local) => {
                self.w.push_str("var ");
                self.local(local, indent, depth);
            }

            Node::Param(local) | Node::Field(local) => self.local(local, indent, depth),

            Node::Fun(fun) => self.fun(fun, indent, depth),

            Node::Block(children) => {
                self.w.push_char('{');
                if !children.is_empty() {
                    if depth <= 1 {
                        self.w.push_str("...");
                    } else {
                        self.lines(children, indent + 1, depth);
                        self.startline(indent);
                    }
                }
                self.w.push_char('}');
            }

            Node::Call { recv, args } => {
                self.node(Some(recv), indent, depth);
                self.w.push_char('(');
                self.node_list(args, ", ", indent, depth);
                self.w.push_char(')');
            }

            Node::TypeCons { ty, expr } => {
                self.ty(Some(ty), indent, depth);
                self.w.push_char('(');
                self.node(expr.as_deref(), indent, depth);
                self.w.push_char(')');
            }

            Node::Member { recv, name } => {
                self.node(Some(recv), indent, depth);
                self.w.push_char('.');
                self.w.push_str(name);
            }

            Node::If { cond, then, els } => {
                self.w.push_str("if ");
                self.node(Some(cond), indent, depth);
                self.w.push_char(' ');
                self.node(Some(then), indent, depth);
                if let Some(els) = els {
                    self.w.push_str(" else ");
                    self.node(Some(els), indent, depth);
                }
            }

            Node::For { start, cond, end, body } => {
                if depth <= 1 {
                    self.w.push_str("for");
                    return;
                }
                let inner = depth - 1;
                self.w.push_str("for ");
                if start.is_some() || end.is_some() {
                    if let Some(start) = start {
                        self.node(Some(start), indent, inner);
                    }
                    self.w.push_str("; ");
                    self.node(cond.as_deref(), indent, inner);
                    self.w.push_str("; ");
                    if end.is_some() {
                        let step = match self.config.for_step {
                            ForStep::Start => start,
                            ForStep::End => end,
                        };
                        self.node(step.as_deref(), indent, inner);
                    }
                } else {
                    self.node(cond.as_deref(), indent, inner);
                }
                self.w.push_char(' ');
                self.node(Some(body), indent, inner);
            }

            Node::Id(name) => self.w.push_str(name),

            Node::Return(value) => {
                self.w.push_str("return");
                if let Some(value) = value {
                    self.w.push_char(' ');
                    self.node(Some(value), indent, depth);
                }
            }

            Node::Deref(expr) => {
                self.w.push_char('*');
                self.node(Some(expr), indent, depth);
            }

            Node::PrefixOp { op, expr } => {
                self.w.push_str(op.symbol());
                self.node(Some(expr), indent, depth);
            }

            Node::PostfixOp { op, expr } => {
                self.node(Some(expr), indent, depth);
                self.w.push_str(op.symbol());
            }

            Node::Assign { op, left, right } | Node::BinOp { op, left, right } => {
                self.node(Some(left), indent, depth);
                self.w.push_char(' ');
                self.w.push_str(op.symbol());
                self.w.push_char(' ');
                self.node(Some(right), indent, depth);
            }

            Node::BoolLit(value) => self.w.push_str(if *value { "true" } else { "false" }),

            Node::IntLit { value, ty } => {
                if ty.as_deref().is_some_and(Type::is_unsigned) {
                    self.w.push_fmt(format_args!("0x{value:x}"));
                } else {
                    self.w.push_fmt(format_args!("{value}"));
                }
            }

            // Debug formatting is the shortest text that parses back to the same f64
            Node::FloatLit(value) => self.w.push_fmt(format_args!("{value:?}")),

            Node::StrLit(bytes) => {
                self.w.push_char('"');
                self.repr(bytes);
                self.w.push_char('"');
            }

            Node::ArrayLit(values) => {
                self.w.push_char('[');
                if depth <= 1 {
                    self.w.push_str("...");
                } else {
                    self.node_list(values, ", ", indent, depth);
                }
                self.w.push_char(']');
            }

            Node::Type(ty) => self.ty(Some(ty), indent, depth),
        }
    }

    fn local(&mut self, local: &Local, indent: u32, depth: u32) {
        self.w.push_str(&local.name);
        self.w.push_char(' ');
        self.ty(local.ty.as_deref(), indent, depth);
        if let Some(init) = &local.init {
            if depth > 1 {
                self.w.push_str(" = ");
                self.node(Some(init), indent, depth);
            }
        }
    }

    fn fun(&mut self, fun: &Fun, indent: u32, depth: u32) {
        self.w.push_str("fun ");
        self.w.push_str(&fun.name);
        self.w.push_char('(');
        for (i, param) in fun.params.iter().enumerate() {
            if i > 0 {
                self.w.push_str(", ");
            }
            self.local(param, indent, depth);
        }
        self.w.push_str(") ");
        self.ty(Some(&fun.result), indent, depth);
        if let Some(body) = &fun.body {
            self.w.push_char(' ');
            self.node(Some(body), indent, depth);
        }
    }

    fn ty(&mut self, t: Option<&Type>, indent: u32, depth: u32) {
        if depth == 0 {
            return;
        }
        let Some(t) = t else {
            self.w.push_str(NULL_NODE);
            return;
        };

        match t {
            Type::Void
            | Type::Bool
            | Type::I8
            | Type::I16
            | Type::I32
            | Type::I64
            | Type::Int
            | Type::U8
            | Type::U16
            | Type::U32
            | Type::U64
            | Type::UInt
            | Type::F32
            | Type::F64 => {
                if let Some(name) = t.primitive_name() {
                    self.w.push_str(name);
                }
            }

            Type::Struct(st) => self.struct_type(st, indent, depth),

            Type::Fun(ft) => {
                self.w.push_str("fun");
                self.fun_type(ft, indent, depth);
            }

            Type::Array { elem, len } => {
                self.w.push_char('[');
                self.ty(Some(elem), indent, depth);
                if *len > 0 {
                    self.w.push_fmt(format_args!(" {len}"));
                }
                self.w.push_char(']');
            }

            Type::Slice { elem, mutable } => {
                self.w.push_str(if *mutable { "mut&[" } else { "&[" });
                self.ty(Some(elem), indent, depth);
                self.w.push_char(']');
            }

            Type::Ptr(elem) => {
                self.w.push_char('*');
                self.ty(Some(elem), indent, depth);
            }

            Type::Ref { elem, mutable } => {
                self.w.push_str(if *mutable { "mut&" } else { "&" });
                self.ty(Some(elem), indent, depth);
            }

            Type::Optional(elem) => {
                self.w.push_char('?');
                self.ty(Some(elem), indent, depth);
            }

            Type::Alias { name, elem } => {
                self.w.push_str(name);
                if depth > 1 {
                    self.w.push_char(' ');
                    self.ty(Some(elem), indent, depth);
                }
            }

            Type::Unknown => self.w.push_str("unknown"),

            Type::Unresolved(name) => self.w.push_str(name),
        }
    }

    /// `(a, b i32, c bool) result`; a run of params sharing one type object
    /// shows the type once, after the last name of the run
    fn fun_type(&mut self, ft: &FunType, indent: u32, depth: u32) {
        self.w.push_char('(');
        for (i, param) in ft.params.iter().enumerate() {
            if i > 0 {
                self.w.push_str(", ");
            }
            self.w.push_str(&param.name);
            let next = ft.params.get(i + 1);
            if next.map_or(true, |next| !same_type(&next.ty, &param.ty)) {
                self.w.push_char(' ');
                self.ty(param.ty.as_deref(), indent, depth);
            }
        }
        self.w.push_str(") ");
        self.ty(Some(&ft.result), indent, depth);
    }

    fn struct_type(&mut self, st: &StructType, indent: u32, depth: u32) {
        if let Some(name) = &st.name {
            self.w.push_str(name);
        }
        if depth <= 1 {
            if st.name.is_none() {
                self.w.push_str("struct");
            }
            return;
        }
        if st.name.is_some() {
            self.w.push_char(' ');
        }
        self.w.push_char('{');
        if !st.fields.is_empty() {
            let inner = indent + 1;
            for field in &st.fields {
                self.startline(inner);
                self.w.push_str(&field.name);
                self.w.push_char(' ');
                self.ty(field.ty.as_deref(), inner, depth);
                if let Some(init) = &field.init {
                    self.w.push_str(" = ");
                    self.node(Some(init), inner, depth);
                }
            }
            self.startline(indent);
        }
        self.w.push_char('}');
    }

    /// Printable ASCII as is, common control characters as C escapes,
    /// everything else as `\xHH`
    fn repr(&mut self, bytes: &[u8]) {
        for &b in bytes {
            match b {
                b'"' => self.w.push_str("\\\""),
                b'\\' => self.w.push_str("\\\\"),
                b'\n' => self.w.push_str("\\n"),
                b'\r' => self.w.push_str("\\r"),
                b'\t' => self.w.push_str("\\t"),
                0x20..=0x7e => self.w.push_char(b as char),
                _ => self.w.push_fmt(format_args!("\\x{b:02x}")),
            }
        }
    }
}

/// Identity, not structural equality: two distinct `i32` objects differ
fn same_type(a: &Option<TypeRef>, b: &Option<TypeRef>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
