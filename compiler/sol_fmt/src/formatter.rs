//! Statement and expression rendering.
//!
//! Operands are parenthesised only when the tree could not be recovered
//! without them: a left operand binding looser than its operator, or a
//! right operand binding looser than or as loose as its operator (all
//! levels fold to the left).
//!
//! An `if` without `else` nested directly as the then-branch of an `if`
//! with `else` renders ambiguously; the parser never builds that shape, as
//! `else` always attaches to the innermost `if`.

use sol_ir::{Block, Call, Expr, FunctionDecl, Stmt};
use sol_stack::ensure_sufficient_stack;

use crate::emitter::Emitter;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Renders AST nodes into an [`Emitter`].
pub struct Formatter<E: Emitter> {
    out: E,
    level: usize,
}

impl<E: Emitter> Formatter<E> {
    pub fn new(out: E) -> Self {
        Formatter { out, level: 0 }
    }

    pub fn into_emitter(self) -> E {
        self.out
    }

    /// Render top-level statements, each on its own line.
    pub fn program(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.line(stmt);
        }
    }

    fn line(&mut self, stmt: &Stmt) {
        self.out.emit_indent(self.level);
        self.stmt(stmt);
        self.out.emit_newline();
    }

    /// Render one statement starting at the current column.
    pub fn stmt(&mut self, stmt: &Stmt) {
        ensure_sufficient_stack(|| match stmt {
            Stmt::VarDecl { name, init } => {
                self.out.emit("var ");
                self.out.emit(name.as_str());
                if *init != Expr::Null {
                    self.out.emit(" = ");
                    self.expr(init);
                }
                self.out.emit(";");
            }
            Stmt::Assign { name, value } => {
                self.out.emit(name.as_str());
                self.out.emit(" = ");
                self.expr(value);
                self.out.emit(";");
            }
            Stmt::Print(expr) => {
                self.out.emit("print ");
                self.expr(expr);
                self.out.emit(";");
            }
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.out.emit("if (");
                self.expr(cond);
                self.out.emit(")");
                self.out.emit_space();
                self.stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.out.emit(" else ");
                    self.stmt(else_branch);
                }
            }
            Stmt::While { cond, body } => {
                self.out.emit("while (");
                self.expr(cond);
                self.out.emit(")");
                self.out.emit_space();
                self.stmt(body);
            }
            Stmt::Block(block) => self.block(block),
            Stmt::FuncDecl(decl) => self.function(decl),
            Stmt::Call(call) => {
                self.call(call);
                self.out.emit(";");
            }
            Stmt::Return(value) => {
                self.out.emit("return");
                if let Some(value) = value {
                    self.out.emit_space();
                    self.expr(value);
                }
                self.out.emit(";");
            }
        });
    }

    fn block(&mut self, block: &Block) {
        if block.stmts.is_empty() {
            self.out.emit("{}");
            return;
        }
        self.out.emit("{");
        self.out.emit_newline();
        self.level += 1;
        for stmt in &block.stmts {
            self.line(stmt);
        }
        self.level -= 1;
        self.out.emit_indent(self.level);
        self.out.emit("}");
    }

    fn function(&mut self, decl: &FunctionDecl) {
        self.out.emit("func ");
        self.out.emit(decl.name.as_str());
        self.out.emit("(");
        for (i, param) in decl.params.iter().enumerate() {
            if i > 0 {
                self.out.emit(", ");
            }
            self.out.emit(param.as_str());
        }
        self.out.emit(")");
        self.out.emit_space();
        self.block(&decl.body);
    }

    /// Render one expression.
    pub fn expr(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| match expr {
            // Only reachable through `var x;`, which is rendered without it.
            Expr::Null => self.out.emit("null"),
            Expr::Number(n) => self.out.emit(&n.to_string()),
            Expr::Bool(true) => self.out.emit("true"),
            Expr::Bool(false) => self.out.emit("false"),
            Expr::Str(text) => {
                self.out.emit("\"");
                self.out.emit(text);
                self.out.emit("\"");
            }
            Expr::Ident(name) => self.out.emit(name.as_str()),
            Expr::Binary { left, op, right } => {
                let prec = op.precedence();
                self.operand(left, left.precedence() < prec);
                self.out.emit_space();
                self.out.emit(op.as_symbol());
                self.out.emit_space();
                self.operand(right, right.precedence() <= prec);
            }
            Expr::Call(call) => self.call(call),
        });
    }

    fn operand(&mut self, expr: &Expr, parens: bool) {
        if parens {
            self.out.emit("(");
            self.expr(expr);
            self.out.emit(")");
        } else {
            self.expr(expr);
        }
    }

    fn call(&mut self, call: &Call) {
        self.out.emit(call.name.as_str());
        self.out.emit("(");
        for (i, arg) in call.args.iter().enumerate() {
            if i > 0 {
                self.out.emit(", ");
            }
            self.expr(arg);
        }
        self.out.emit(")");
    }
}
