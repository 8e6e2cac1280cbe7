//! Statement parsing.
//!
//! ```text
//! stmt      = var_decl | func_decl | std_stmt
//! std_stmt  = print | return | if | while | for | assign | call_stmt | block
//! var_decl  = 'var' ident ('=' exp)? ';'
//! func_decl = 'func' ident '(' (ident (',' ident)*)? ')' block
//! print     = 'print' exp ';'
//! return    = 'return' exp? ';'
//! if        = 'if' '(' exp ')' std_stmt ('else' std_stmt)?
//! while     = 'while' '(' exp ')' std_stmt
//! for       = 'for' '(' (var_decl | std_stmt | ';') exp? ';' assign_exp? ')' std_stmt
//! assign    = ident '=' exp ';'
//! call_stmt = call ';'
//! block     = '{' stmt* '}'
//! ```
//!
//! Whitespace is allowed between all terminals. Declarations are only
//! legal where `stmt` is: an `if`/`while`/`for` body must be a standard
//! statement, so `if (x) var y = 1;` does not parse.

use std::sync::Arc;

use sol_ir::{Block, Expr, FunctionDecl, Stmt};
use sol_stack::ensure_sufficient_stack;

use crate::Parser;

impl Parser<'_> {
    /// Parse any statement, including declarations.
    pub(crate) fn statement(&mut self) -> Option<Stmt> {
        ensure_sufficient_stack(|| {
            if let Some(decl) = self.speculate(Self::var_decl) {
                return Some(decl);
            }
            if let Some(func) = self.speculate(Self::func_decl) {
                return Some(func);
            }
            self.standard_statement()
        })
    }

    /// Parse a statement that is not a declaration.
    fn standard_statement(&mut self) -> Option<Stmt> {
        let rules: [fn(&mut Self) -> Option<Stmt>; 8] = [
            Self::print_stmt,
            Self::return_stmt,
            Self::if_stmt,
            Self::while_stmt,
            Self::for_stmt,
            Self::assign_stmt,
            Self::call_stmt,
            Self::block_stmt,
        ];
        ensure_sufficient_stack(|| rules.into_iter().find_map(|rule| self.speculate(rule)))
    }

    fn var_decl(&mut self) -> Option<Stmt> {
        self.ws();
        self.keyword("var", "`var`")?;
        self.ws();
        let name = self.identifier()?;
        let init = self
            .speculate(|p| {
                p.ws();
                p.punct("=", "`=`")?;
                p.expr()
            })
            .unwrap_or(Expr::Null);
        self.semicolon()?;
        Some(Stmt::VarDecl { name, init })
    }

    fn func_decl(&mut self) -> Option<Stmt> {
        self.ws();
        self.keyword("func", "`func`")?;
        self.ws();
        let name = self.identifier()?;
        self.ws();
        self.punct("(", "`(`")?;
        self.ws();
        let mut params = Vec::new();
        if let Some(first) = self.speculate(Self::identifier) {
            params.push(first);
            while let Some(next) = self.speculate(|p| {
                p.ws();
                p.punct(",", "`,`")?;
                p.ws();
                p.identifier()
            }) {
                params.push(next);
            }
        }
        self.ws();
        self.punct(")", "`)`")?;
        let body = self.block()?;
        Some(Stmt::FuncDecl(Arc::new(FunctionDecl { name, params, body })))
    }

    fn print_stmt(&mut self) -> Option<Stmt> {
        self.ws();
        self.keyword("print", "`print`")?;
        let expr = self.expr()?;
        self.semicolon()?;
        Some(Stmt::Print(expr))
    }

    fn return_stmt(&mut self) -> Option<Stmt> {
        self.ws();
        self.keyword("return", "`return`")?;
        let value = self.speculate(Self::expr);
        self.semicolon()?;
        Some(Stmt::Return(value))
    }

    fn if_stmt(&mut self) -> Option<Stmt> {
        self.ws();
        self.keyword("if", "`if`")?;
        let cond = self.condition()?;
        let then_branch = self.standard_statement()?;
        let else_branch = self.speculate(|p| {
            p.ws();
            p.keyword("else", "`else`")?;
            p.standard_statement()
        });
        Some(Stmt::If {
            cond,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        })
    }

    fn while_stmt(&mut self) -> Option<Stmt> {
        self.ws();
        self.keyword("while", "`while`")?;
        let cond = self.condition()?;
        let body = self.standard_statement()?;
        Some(Stmt::While {
            cond,
            body: Box::new(body),
        })
    }

    /// Lowers `for (init; cond; inc) body` to
    /// `{ init; while (cond) { body; inc; } }`, with `true` for a missing
    /// condition and missing pieces left out.
    fn for_stmt(&mut self) -> Option<Stmt> {
        self.ws();
        self.keyword("for", "`for`")?;
        self.ws();
        self.punct("(", "`(`")?;
        let init = self.for_init()?;
        let cond = self.speculate(Self::expr);
        self.semicolon()?;
        let inc = self.speculate(Self::assignment);
        self.ws();
        self.punct(")", "`)`")?;
        let body = self.standard_statement()?;

        let mut loop_body = vec![body];
        loop_body.extend(inc);
        let lowered = Stmt::While {
            cond: cond.unwrap_or(Expr::Bool(true)),
            body: Box::new(Stmt::block(loop_body)),
        };
        let mut outer: Vec<Stmt> = init.into_iter().collect();
        outer.push(lowered);
        Some(Stmt::block(outer))
    }

    /// `var_decl | std_stmt | ';'`; the empty form yields `None`.
    fn for_init(&mut self) -> Option<Option<Stmt>> {
        if let Some(decl) = self.speculate(Self::var_decl) {
            return Some(Some(decl));
        }
        if let Some(stmt) = self.speculate(Self::standard_statement) {
            return Some(Some(stmt));
        }
        self.semicolon()?;
        Some(None)
    }

    fn assign_stmt(&mut self) -> Option<Stmt> {
        let assign = self.assignment()?;
        self.semicolon()?;
        Some(assign)
    }

    /// `ident '=' exp` without the terminating `;`.
    fn assignment(&mut self) -> Option<Stmt> {
        self.ws();
        let name = self.identifier()?;
        self.ws();
        self.punct("=", "`=`")?;
        let value = self.expr()?;
        Some(Stmt::Assign { name, value })
    }

    fn call_stmt(&mut self) -> Option<Stmt> {
        self.ws();
        let call = self.call()?;
        self.semicolon()?;
        Some(Stmt::Call(call))
    }

    fn block_stmt(&mut self) -> Option<Stmt> {
        self.block().map(Stmt::Block)
    }

    /// `'{' stmt* '}'`
    fn block(&mut self) -> Option<Block> {
        self.ws();
        self.punct("{", "`{`")?;
        let mut stmts = Vec::new();
        while let Some(stmt) = self.speculate(Self::statement) {
            stmts.push(stmt);
        }
        self.ws();
        self.punct("}", "`}`")?;
        Some(Block::new(stmts))
    }

    /// `'(' exp ')'` after `if`/`while`.
    fn condition(&mut self) -> Option<Expr> {
        self.ws();
        self.punct("(", "`(`")?;
        let cond = self.expr()?;
        self.ws();
        self.punct(")", "`)`")?;
        Some(cond)
    }

    fn semicolon(&mut self) -> Option<()> {
        self.ws();
        self.punct(";", "`;`")
    }
}
