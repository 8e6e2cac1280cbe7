//! Iterative drop for expression and statement trees.
//!
//! Derived drop glue recurses once per nesting level, so a long `+` chain
//! or deeply nested blocks would overflow the stack while being freed.
//! Each `Drop` impl below detaches the node's children onto a heap
//! work-list instead; every node is then dropped with its children
//! already taken, so no drop recurses more than one level.

use std::mem;
use std::sync::Arc;

use super::{Block, Expr, Stmt};

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_expr_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_expr_children(&mut expr, &mut pending);
        }
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_stmt_children(self, &mut pending);
        while let Some(mut stmt) = pending.pop() {
            detach_stmt_children(&mut stmt, &mut pending);
        }
    }
}

impl Expr {
    fn has_children(&self) -> bool {
        match self {
            Expr::Binary { .. } => true,
            Expr::Call(call) => !call.args.is_empty(),
            Expr::Null | Expr::Number(_) | Expr::Bool(_) | Expr::Str(_) | Expr::Ident(_) => false,
        }
    }
}

impl Stmt {
    fn has_children(&self) -> bool {
        match self {
            Stmt::If { .. } | Stmt::While { .. } => true,
            Stmt::Block(block) => !block.stmts.is_empty(),
            Stmt::FuncDecl(decl) => !decl.body.stmts.is_empty(),
            Stmt::VarDecl { .. }
            | Stmt::Assign { .. }
            | Stmt::Print(_)
            | Stmt::Call(_)
            | Stmt::Return(_) => false,
        }
    }
}

fn detach_expr_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    match expr {
        Expr::Binary { left, right, .. } => {
            for child in [left, right] {
                if child.has_children() {
                    pending.push(mem::replace(&mut **child, Expr::Null));
                }
            }
        }
        Expr::Call(call) => pending.append(&mut call.args),
        Expr::Null | Expr::Number(_) | Expr::Bool(_) | Expr::Str(_) | Expr::Ident(_) => {}
    }
}

/// Expressions held by a statement keep their own iterative drop, so only
/// nested statements are detached here.
fn detach_stmt_children(stmt: &mut Stmt, pending: &mut Vec<Stmt>) {
    match stmt {
        Stmt::If {
            then_branch,
            else_branch,
            ..
        } => {
            detach_boxed(then_branch, pending);
            if let Some(else_branch) = else_branch {
                detach_boxed(else_branch, pending);
            }
        }
        Stmt::While { body, .. } => detach_boxed(body, pending),
        Stmt::Block(block) => pending.append(&mut block.stmts),
        // A declaration still registered elsewhere is freed by its last owner.
        Stmt::FuncDecl(decl) => {
            if let Some(decl) = Arc::get_mut(decl) {
                pending.append(&mut decl.body.stmts);
            }
        }
        Stmt::VarDecl { .. }
        | Stmt::Assign { .. }
        | Stmt::Print(_)
        | Stmt::Call(_)
        | Stmt::Return(_) => {}
    }
}

fn detach_boxed(child: &mut Stmt, pending: &mut Vec<Stmt>) {
    if child.has_children() {
        pending.push(mem::replace(child, Stmt::Block(Block::default())));
    }
}
