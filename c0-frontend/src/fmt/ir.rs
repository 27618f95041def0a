//! IR printer
//!
//! Dumps a unit as one line per block header, value and block exit:
//!
//! ```text
//! fun max(a i32, b i32) i32 {
//!   b0:
//!     v1  i32  = arg    0         # [1]
//!     v2  i32  = arg    1         # [1]
//!     v3  bool = gt     v1  v2    # [1]
//!   if v3 -> b1 b2
//! ...
//! ```
//!
//! Comments start at a fixed column and source locations at a second one,
//! so dumps line up in a terminal and diff cleanly.

use super::ast::AstPrinter;
use super::buf::Buf;
use super::config::FmtConfig;
use crate::ast::Op;
use crate::ir::{Aux, Block, BlockExit, Function, Unit, Value};
use c0_common::CompilerError;
use log::debug;

/// Column where `# ...` comments start
const COMMENT_COL: usize = 32;

/// Column where source locations start
const LOC_COL: usize = COMMENT_COL + 10;

/// Renders IR units, using an `AstPrinter` for types and signatures
#[derive(Debug, Clone, Default)]
pub struct IrPrinter {
    ast: AstPrinter,
}

impl IrPrinter {
    pub fn new(config: FmtConfig) -> Self {
        Self {
            ast: AstPrinter::new(config),
        }
    }

    /// Append the dump of every function in `unit`. On error the buffer is
    /// cut back to what it held before the call.
    pub fn render(&self, buf: &mut Buf, unit: &Unit) -> Result<(), CompilerError> {
        debug!("rendering IR unit with {} functions", unit.functions.len());
        let start = buf.len();
        let mut ctx = Ctx { out: &mut *buf, ast: &self.ast };
        let result = unit.functions.iter().try_for_each(|f| ctx.fun(f));
        if result.is_err() {
            buf.truncate(start);
        }
        result
    }
}

struct Ctx<'a> {
    out: &'a mut Buf,
    ast: &'a AstPrinter,
}

impl Ctx<'_> {
    /// Pad with spaces so the line starting at `start` reaches column `col`;
    /// always emits at least one space
    fn tabulate(&mut self, start: usize, col: usize) -> Result<(), CompilerError> {
        let used = self.out.len().saturating_sub(start);
        self.out.fill(' ', col.saturating_sub(used).max(1))
    }

    fn fun(&mut self, f: &Function) -> Result<(), CompilerError> {
        self.out.push_fmt(format_args!("\nfun {}(", f.name))?;
        if let Some(ast) = &f.ast {
            for (i, param) in ast.params.iter().enumerate() {
                if i > 0 {
                    self.out.push_str(", ")?;
                }
                self.ast.render_local(self.out, param, 0)?;
            }
            self.out.push_str(") ")?;
            self.ast.render_type(self.out, &ast.result, 0)?;
            self.out.push_str(" {")?;
        } else {
            self.out.push_str(") {")?;
        }
        for b in &f.blocks {
            self.block(b)?;
        }
        self.out.push_str("\n}")
    }

    fn block(&mut self, b: &Block) -> Result<(), CompilerError> {
        let start = self.out.len() + 1;
        self.out.push_fmt(format_args!("\n  b{}:", b.id))?;

        match b.preds() {
            [] => {}
            [p0] => self.out.push_fmt(format_args!(" <- b{p0}"))?,
            [p0, p1, ..] => self.out.push_fmt(format_args!(" <- b{p0} b{p1}"))?,
        }

        if let Some(comment) = &b.comment {
            self.tabulate(start, COMMENT_COL)?;
            self.out.push_fmt(format_args!("# {comment}"))?;
        }

        for v in &b.values {
            self.value(v)?;
        }

        match b.exit {
            BlockExit::Cont(Some(succ)) => self.out.push_fmt(format_args!("\n  cont -> b{succ}")),
            BlockExit::Cont(None) => self.out.push_str("\n  cont -> ?"),
            BlockExit::First { control, then, els } => {
                self.out.push_fmt(format_args!("\n  first v{control} -> b{then} b{els}"))
            }
            BlockExit::If { control, then, els } => {
                self.out.push_fmt(format_args!("\n  if v{control} -> b{then} b{els}"))
            }
            BlockExit::Ret(Some(control)) => self.out.push_fmt(format_args!("\n  ret v{control}")),
            BlockExit::Ret(None) => self.out.push_str("\n  ret"),
        }
    }

    fn value(&mut self, v: &Value) -> Result<(), CompilerError> {
        let start = self.out.len() + 1;
        self.out.push_fmt(format_args!("\n    v{:<2} ", v.id))?;

        let type_start = self.out.len();
        self.ast.render_type(self.out, &v.ty, 0)?;
        let pad = 4usize.saturating_sub(self.out.len() - type_start);
        self.out.push_fmt(format_args!("{:pad$} = {:<6}", "", v.op.name()))?;

        for arg in &v.args {
            self.out.push_fmt(format_args!(" v{arg:<2}"))?;
        }

        match (v.op, v.aux) {
            (Op::Arg, Aux::Index(index)) => self.out.push_fmt(format_args!(" {index}"))?,
            (Op::IConst, Aux::Int(value)) => self.out.push_fmt(format_args!(" 0x{value:x}"))?,
            (Op::FConst, Aux::Float(value)) => {
                self.out.push_char(' ')?;
                self.out.push_str(&format_general(value))?;
            }
            _ => {}
        }

        self.tabulate(start, COMMENT_COL)?;
        self.out.push_fmt(format_args!("# [{}]", v.nuse))?;
        if let Some(comment) = v.comment.as_deref().filter(|c| !c.is_empty()) {
            self.out.push_char(' ')?;
            self.out.push_str(comment)?;
        }

        if let Some(loc) = v.loc.as_ref().filter(|loc| loc.is_known()) {
            self.tabulate(start, LOC_COL)?;
            self.out.push_fmt(format_args!(" {loc}"))?;
        }
        Ok(())
    }
}

/// Format like C's `%g`: six significant digits, trailing zeros removed,
/// exponent form when the exponent is below -4 or at least 6
pub fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_fraction_zeros(mantissa), sign, exp.abs())
    } else {
        let fixed = format!("{:.*}", (PRECISION - 1 - exp) as usize, value);
        strip_fraction_zeros(&fixed).to_string()
    }
}

fn strip_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
