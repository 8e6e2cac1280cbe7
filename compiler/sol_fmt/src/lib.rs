//! Sol Formatter
//!
//! Renders an AST back to canonical Sol source. Parsing the output yields a
//! tree equal to the input for every tree the parser can produce.
//!
//! # Modules
//!
//! - [`emitter`]: Output abstraction
//! - [`formatter`]: Statement and expression rendering

pub mod emitter;
pub mod formatter;

pub use emitter::{Emitter, StringEmitter};
pub use formatter::{Formatter, INDENT_WIDTH};

use sol_ir::{Expr, Stmt};

/// Format a whole program, one top-level statement per line.
pub fn format_program(stmts: &[Stmt]) -> String {
    let mut formatter = Formatter::new(StringEmitter::new());
    formatter.program(stmts);
    formatter.into_emitter().output()
}

/// Format a single statement at indentation level zero.
pub fn format_stmt(stmt: &Stmt) -> String {
    let mut formatter = Formatter::new(StringEmitter::new());
    formatter.stmt(stmt);
    formatter.into_emitter().output()
}

/// Format a single expression.
pub fn format_expr(expr: &Expr) -> String {
    let mut formatter = Formatter::new(StringEmitter::new());
    formatter.expr(expr);
    formatter.into_emitter().output()
}
