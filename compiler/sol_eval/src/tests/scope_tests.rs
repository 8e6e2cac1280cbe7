use pretty_assertions::assert_eq;
use sol_ir::Name;

use super::{eval_error, output, session};
use crate::EvalError;

#[test]
fn block_variable_is_unreachable_after_block() {
    assert_eq!(
        eval_error("{ var x = 1; } print x;"),
        EvalError::UndefinedVariable(Name::new("x"))
    );
    assert_eq!(
        eval_error("{ var x = 1; } x = 2;"),
        EvalError::UndefinedVariable(Name::new("x"))
    );
}

#[test]
fn redeclaration_fails_at_any_nesting_depth() {
    assert_eq!(
        eval_error("var x = 1; { { var x = 2; } }"),
        EvalError::DuplicateDeclaration(Name::new("x"))
    );
    assert_eq!(
        eval_error("var x = 1; var x = 2;"),
        EvalError::DuplicateDeclaration(Name::new("x"))
    );
    assert_eq!(
        eval_error("{ var y; if (true) { var y; } }"),
        EvalError::DuplicateDeclaration(Name::new("y"))
    );
}

#[test]
fn sibling_blocks_may_reuse_names() {
    assert_eq!(
        output("{ var x = 1; print x; } { var x = 2; print x; }"),
        "1\n2\n"
    );
}

#[test]
fn loop_body_scope_is_fresh_each_iteration() {
    assert_eq!(
        output("var i = 0; while (i < 2) { var seen = i; print seen; i = i + 1; }"),
        "0\n1\n"
    );
}

#[test]
fn assignment_reaches_enclosing_scope() {
    assert_eq!(output("var x = 1; { { x = x + 1; } } print x;"), "2\n");
}

#[test]
fn undeclared_assignment_fails() {
    assert_eq!(
        eval_error("y = 1;"),
        EvalError::UndefinedVariable(Name::new("y"))
    );
}

#[test]
fn scopes_are_released_after_errors() {
    let mut interp = session();
    assert!(interp.interpret("{ { var z = 1; print nope; } }", true).is_err());
    assert_eq!(interp.env().depth(), 1);
    assert!(interp.env().is_global());

    // `z` went with its block; declaring it again at the top works.
    interp.interpret("var z = 2; print z;", false).unwrap();
    assert_eq!(interp.print_handler().output(), "2\n");
}
