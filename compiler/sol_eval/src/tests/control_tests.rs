use pretty_assertions::assert_eq;

use super::{eval_error, output, session};
use crate::{EvalError, Value};

#[test]
fn arithmetic_condition_is_rejected_before_evaluation() {
    assert_eq!(
        eval_error("if (1 + 1) print 1;"),
        EvalError::InvalidCondition { construct: "if" }
    );
    // The division by zero is never reached.
    assert_eq!(
        eval_error("while (1 / 0) print 1;"),
        EvalError::InvalidCondition { construct: "while" }
    );
}

#[test]
fn call_and_string_conditions_are_rejected() {
    assert_eq!(
        eval_error("func f() { return true; } if (f()) print 1;"),
        EvalError::InvalidCondition { construct: "if" }
    );
    assert_eq!(
        eval_error(r#"if ("yes") print 1;"#),
        EvalError::InvalidCondition { construct: "if" }
    );
    assert_eq!(
        eval_error("if (7) print 1;"),
        EvalError::InvalidCondition { construct: "if" }
    );
}

#[test]
fn identifier_conditions_use_runtime_truthiness() {
    assert_eq!(
        output(
            r#"var zero = 0; var empty = ""; var none; var word = "w";
            if (zero) print 1; else print 2;
            if (empty) print 3; else print 4;
            if (none) print 5; else print 6;
            if (word) print 7; else print 8;"#
        ),
        "2\n4\n6\n7\n"
    );
}

#[test]
fn else_binds_to_nearest_if() {
    assert_eq!(output("if (false) if (true) print 1; else print 2;"), "");
    assert_eq!(output("if (true) if (false) print 1; else print 2;"), "2\n");
}

#[test]
fn while_rechecks_condition_each_iteration() {
    assert_eq!(
        output("var i = 0; while (i < 3) { print i; i = i + 1; } print i;"),
        "0\n1\n2\n3\n"
    );
    assert_eq!(output("while (false) print 1;"), "");
}

#[test]
fn for_loop_prints_and_scopes_its_variable() {
    let mut interp = session();
    interp
        .interpret("for (var i = 0; i < 3; i = i + 1) print i;", true)
        .unwrap();
    assert_eq!(interp.print_handler().output(), "0\n1\n2\n");

    let err = interp.interpret("print i;", false).unwrap_err();
    assert_eq!(
        err,
        EvalError::UndefinedVariable(sol_ir::Name::new("i")).into()
    );
}

#[test]
fn for_loop_without_condition_runs_until_return() {
    let mut interp = session();
    let result = interp
        .interpret(
            "for (var i = 0; ; i = i + 1) { if (i == 3) return i; }",
            true,
        )
        .unwrap();
    assert_eq!(result, Some(Value::Number(3.0)));
}

#[test]
fn for_loop_with_outer_counter() {
    assert_eq!(
        output("var i = 5; for (; i < 7; i = i + 1) print i; print i;"),
        "5\n6\n7\n"
    );
}

#[test]
fn top_level_return_stops_the_run() {
    let mut interp = session();
    let result = interp
        .interpret(
            "var i = 0; while (true) { i = i + 1; if (i == 3) return i * 10; } print 99;",
            true,
        )
        .unwrap();
    assert_eq!(result, Some(Value::Number(30.0)));
    assert_eq!(interp.print_handler().output(), "");
    assert_eq!(interp.env().depth(), 1);
}

#[test]
fn bare_return_yields_null() {
    let mut interp = session();
    assert_eq!(interp.interpret("return;", true).unwrap(), Some(Value::Null));
    assert_eq!(interp.interpret("print 1;", true).unwrap(), None);
}

#[test]
fn deeply_nested_blocks_run_and_free() {
    let depth = 50_000;
    let source = format!("{}print 1;{}", "{".repeat(depth), "}".repeat(depth));
    assert_eq!(output(&source), "1\n");
}
