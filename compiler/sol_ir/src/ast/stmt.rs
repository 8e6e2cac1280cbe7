//! Statement nodes.
//!
//! There is no `for` node: the parser lowers
//! `for (init; cond; inc) body` to
//! `Block([init, While(cond, Block([body, inc]))])`.

use std::sync::Arc;

use crate::Name;

use super::{Call, Expr};

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `var name = init;` (`init` is `Expr::Null` when omitted).
    VarDecl { name: Name, init: Expr },
    /// `name = value;`
    Assign { name: Name, value: Expr },
    /// `print expr;`
    Print(Expr),
    /// `if (cond) then_branch else else_branch`
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    /// `while (cond) body`
    While { cond: Expr, body: Box<Stmt> },
    /// `{ stmts }`
    Block(Block),
    /// `func name(params) { body }`
    FuncDecl(Arc<FunctionDecl>),
    /// `name(args);`
    Call(Call),
    /// `return expr?;`
    Return(Option<Expr>),
}

impl Stmt {
    /// Wrap a statement list in a block statement.
    pub fn block(stmts: Vec<Stmt>) -> Self {
        Stmt::Block(Block::new(stmts))
    }
}

/// Ordered statement sequence; opens a new scope when executed.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Block { stmts }
    }
}

/// A function declaration, shared between the AST and the function table.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: Block,
}

impl FunctionDecl {
    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
