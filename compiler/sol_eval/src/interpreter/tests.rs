//! Statement-level tests on hand-built trees.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use sol_ir::{BinaryOp, Block, Call, Expr, FunctionDecl, Name, Stmt};

use super::*;
use crate::{buffer_handler, EvalError};

fn interp() -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build()
}

#[test]
fn return_produces_return_flow() {
    let mut interp = interp();
    assert_eq!(
        interp.exec_stmt(&Stmt::Return(Some(Expr::Number(1.0)))),
        Ok(Flow::Return(Value::Number(1.0)))
    );
    assert_eq!(
        interp.exec_stmt(&Stmt::Return(None)),
        Ok(Flow::Return(Value::Null))
    );
    assert_eq!(
        interp.exec_stmt(&Stmt::Print(Expr::Bool(true))),
        Ok(Flow::Normal)
    );
}

#[test]
fn block_propagates_return_and_skips_the_rest() {
    let mut interp = interp();
    let block = Stmt::block(vec![
        Stmt::Print(Expr::Number(1.0)),
        Stmt::block(vec![Stmt::Return(Some(Expr::Str("done".into())))]),
        Stmt::Print(Expr::Number(2.0)),
    ]);
    assert_eq!(
        interp.exec_stmt(&block),
        Ok(Flow::Return(Value::Str("done".into())))
    );
    assert_eq!(interp.print_handler().output(), "1\n");
    assert_eq!(interp.env().depth(), 1);
}

#[test]
fn null_initializer_declares_null() {
    let mut interp = interp();
    interp
        .exec_stmt(&Stmt::VarDecl {
            name: Name::new("x"),
            init: Expr::Null,
        })
        .unwrap();
    assert_eq!(interp.eval_expr(&Expr::ident("x")), Ok(Value::Null));
}

#[test]
fn condition_shape_is_checked_on_the_tree() {
    let mut interp = interp();
    let stmt = Stmt::While {
        cond: Expr::Null,
        body: Box::new(Stmt::block(vec![])),
    };
    assert_eq!(
        interp.exec_stmt(&stmt),
        Err(EvalError::InvalidCondition { construct: "while" })
    );

    let stmt = Stmt::If {
        cond: Expr::binary(Expr::Number(1.0), BinaryOp::NotEq, Expr::Number(2.0)),
        then_branch: Box::new(Stmt::Print(Expr::Str("yes".into()))),
        else_branch: None,
    };
    assert_eq!(interp.exec_stmt(&stmt), Ok(Flow::Normal));
    assert_eq!(interp.print_handler().output(), "yes\n");
}

#[test]
fn call_statement_discards_result() {
    let mut interp = interp();
    let decl = FunctionDecl {
        name: Name::new("one"),
        params: vec![],
        body: Block::new(vec![Stmt::Return(Some(Expr::Number(1.0)))]),
    };
    interp.exec_stmt(&Stmt::FuncDecl(Arc::new(decl))).unwrap();

    let call = Call::new(Name::new("one"), vec![]);
    assert_eq!(interp.exec_stmt(&Stmt::Call(call.clone())), Ok(Flow::Normal));
    assert_eq!(interp.eval_expr(&Expr::Call(call)), Ok(Value::Number(1.0)));
}

#[test]
fn deeply_nested_expression_evaluates() {
    let mut expr = Expr::Number(0.0);
    for _ in 0..2_000 {
        expr = Expr::binary(expr, BinaryOp::Add, Expr::Number(1.0));
    }
    let mut interp = interp();
    assert_eq!(interp.eval_expr(&expr), Ok(Value::Number(2_000.0)));
}
