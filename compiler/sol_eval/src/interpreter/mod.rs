//! Tree-walking interpreter.
//!
//! # Architecture
//!
//! - [`Interpreter`]: owns the scope chain, the function table and the
//!   print handler for one session
//! - [`InterpreterBuilder`]: configures a new session
//! - `scope_guard`: RAII scope push/pop
//! - `function_call`: user function dispatch
//!
//! Statements evaluate to a [`Flow`]; a `return` travels outward as
//! `Flow::Return` until a call (or the top level) consumes it. Every scope
//! pushed on the way is popped by its guard, whichever way control leaves.

mod builder;
mod function_call;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use std::sync::Arc;

use sol_ir::{Block, Expr, Stmt};
use sol_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::errors::{
    duplicate_declaration, invalid_condition, nested_function_declaration, undefined_variable,
    EvalResult, InterpretError,
};
use crate::operators::evaluate_binary;
use crate::{Environment, FunctionTable, SharedPrintHandler, Value};

/// Default bound on nested user function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    /// Fell through to the next statement.
    Normal,
    /// A `return` is unwinding toward the enclosing call.
    Return(Value),
}

/// An interpreter session.
///
/// The global scope and the function table outlive individual
/// [`interpret`](Interpreter::interpret) calls unless a call asks for a reset,
/// so successive fragments can build on each other.
pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) functions: FunctionTable,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) max_call_depth: usize,
    /// Number of user function calls currently active.
    pub(crate) call_depth: usize,
}

impl Interpreter {
    /// Create a session printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Parse `source` and run it.
    ///
    /// With `reset`, the global scope and the function table are cleared
    /// first. Returns the value of a `return` executed at the top level,
    /// which also stops the run.
    #[tracing::instrument(level = "debug", skip(self, source), fields(len = source.len()))]
    pub fn interpret(
        &mut self,
        source: &str,
        reset: bool,
    ) -> Result<Option<Value>, InterpretError> {
        if reset {
            self.reset();
        }
        let program = sol_parse::parse(source)?;
        debug!(statements = program.len(), "parsed");
        Ok(self.run(&program)?)
    }

    /// Run already-parsed top-level statements against the current session.
    pub fn run(&mut self, program: &[Stmt]) -> EvalResult<Option<Value>> {
        self.call_depth = 0;
        for stmt in program {
            if let Flow::Return(value) = self.exec_stmt(stmt)? {
                debug!(%value, "top-level return");
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Clear the global scope and the function table.
    pub fn reset(&mut self) {
        self.env.reset();
        self.functions.clear();
        self.call_depth = 0;
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Execute one statement.
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<Flow> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt) -> EvalResult<Flow> {
        match stmt {
            Stmt::VarDecl { name, init } => {
                let value = self.eval_expr(init)?;
                trace!(%name, %value, "declare");
                self.env
                    .declare(name.clone(), value)
                    .map_err(|_| duplicate_declaration(name))?;
                Ok(Flow::Normal)
            }
            Stmt::Assign { name, value } => {
                let value = self.eval_expr(value)?;
                self.env
                    .assign(name.as_str(), value)
                    .map_err(|_| undefined_variable(name))?;
                Ok(Flow::Normal)
            }
            Stmt::Print(expr) => {
                let value = self.eval_expr(expr)?;
                self.print_handler.println(&value.to_string());
                Ok(Flow::Normal)
            }
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.condition(cond, "if")? {
                    self.exec_stmt(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_stmt(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            }
            Stmt::While { cond, body } => {
                while self.condition(cond, "while")? {
                    if let Flow::Return(value) = self.exec_stmt(body)? {
                        return Ok(Flow::Return(value));
                    }
                }
                Ok(Flow::Normal)
            }
            Stmt::Block(block) => self.exec_block(block),
            Stmt::FuncDecl(decl) => {
                if !self.env.is_global() {
                    return Err(nested_function_declaration(&decl.name));
                }
                trace!(name = %decl.name, arity = decl.arity(), "register function");
                self.functions.insert(Arc::clone(decl));
                Ok(Flow::Normal)
            }
            Stmt::Call(call) => {
                self.call_function(call)?;
                Ok(Flow::Normal)
            }
            Stmt::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            }
        }
    }

    /// Execute a block in a fresh scope.
    pub(crate) fn exec_block(&mut self, block: &Block) -> EvalResult<Flow> {
        self.with_env_scope(|scoped| scoped.exec_stmts(&block.stmts))
    }

    fn exec_stmts(&mut self, stmts: &[Stmt]) -> EvalResult<Flow> {
        for stmt in stmts {
            if let flow @ Flow::Return(_) = self.exec_stmt(stmt)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Evaluate an `if`/`while` condition.
    ///
    /// The shape is checked before anything is evaluated: only identifiers,
    /// boolean literals and comparisons are accepted.
    fn condition(&mut self, cond: &Expr, construct: &'static str) -> EvalResult<bool> {
        if !cond.is_condition_shape() {
            return Err(invalid_condition(construct));
        }
        Ok(self.eval_expr(cond)?.is_truthy())
    }

    /// Evaluate an expression.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Null => Ok(Value::Null),
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Str(s) => Ok(Value::Str(s.clone())),
            Expr::Ident(name) => self
                .env
                .lookup(name.as_str())
                .cloned()
                .ok_or_else(|| undefined_variable(name)),
            Expr::Binary { left, op, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(left, *op, right)
            }
            Expr::Call(call) => self.call_function(call),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
