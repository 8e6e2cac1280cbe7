use pretty_assertions::assert_eq;
use sol_ir::BinaryOp;

use super::{eval_error, output};
use crate::{evaluate_binary, EvalError, Value};

#[test]
fn division_is_always_true_division() {
    assert_eq!(output("print 5 / 2;"), "2.5\n");
    assert_eq!(output("print 4 / 2;"), "2\n");
    assert_eq!(output("print 1 / 3;"), "0.3333333333333333\n");
}

#[test]
fn arithmetic_precedence_and_left_folding() {
    assert_eq!(output("print 1 + 2 * 3;"), "7\n");
    assert_eq!(output("print (1 + 2) * 3;"), "9\n");
    assert_eq!(output("print 10 - 4 - 3;"), "3\n");
    assert_eq!(output("print 24 / 4 / 2;"), "3\n");
}

#[test]
fn division_by_zero_fails() {
    assert_eq!(eval_error("print 1 / 0;"), EvalError::DivisionByZero);
    assert_eq!(eval_error("print 1 / (2 - 2);"), EvalError::DivisionByZero);
}

#[test]
fn plus_concatenates_strings() {
    assert_eq!(output(r#"print "foo" + "bar";"#), "foobar\n");
}

#[test]
fn mixed_arithmetic_operands_fail() {
    assert_eq!(
        eval_error(r#"print "a" - "b";"#),
        EvalError::InvalidOperands {
            op: BinaryOp::Sub,
            left: "string",
            right: "string",
        }
    );
    assert_eq!(
        eval_error(r#"print 1 + "b";"#),
        EvalError::InvalidOperands {
            op: BinaryOp::Add,
            left: "number",
            right: "string",
        }
    );
    assert_eq!(
        eval_error("var n; print n * 2;"),
        EvalError::InvalidOperands {
            op: BinaryOp::Mul,
            left: "null",
            right: "number",
        }
    );
}

#[test]
fn equality_requires_same_type_and_value() {
    assert_eq!(output("print 2 == 2;"), "true\n");
    assert_eq!(output("print 2 != 2;"), "false\n");
    assert_eq!(output(r#"print 1 == "1";"#), "false\n");
    assert_eq!(output(r#"print true != "true";"#), "true\n");
    assert_eq!(output("var a; var b; print a == b;"), "true\n");
}

#[test]
fn ordering_comparisons() {
    assert_eq!(output("print 1 < 2;"), "true\n");
    assert_eq!(output("print 2 <= 2;"), "true\n");
    assert_eq!(output("print 3 >= 4;"), "false\n");
    assert_eq!(output("print 3 > 2;"), "true\n");
    assert_eq!(output(r#"print "abc" < "abd";"#), "true\n");
    assert_eq!(output("print false < true;"), "true\n");
}

#[test]
fn ordering_across_types_fails() {
    assert_eq!(
        eval_error(r#"print 1 < "2";"#),
        EvalError::InvalidOperands {
            op: BinaryOp::Lt,
            left: "number",
            right: "string",
        }
    );
}

#[test]
fn comparison_chains_compare_the_previous_result() {
    // (3 > 2) == true
    assert_eq!(output("print 3 > 2 == true;"), "true\n");
    // (1 < 2) < 3 compares a bool with a number.
    assert_eq!(
        eval_error("print 1 < 2 < 3;"),
        EvalError::InvalidOperands {
            op: BinaryOp::Lt,
            left: "bool",
            right: "number",
        }
    );
}

#[test]
fn values_print_in_natural_form() {
    assert_eq!(
        output(r#"var n; print n; print true; print "two words"; print 12;"#),
        "null\ntrue\ntwo words\n12\n"
    );
}

#[test]
fn evaluate_binary_directly() {
    assert_eq!(
        evaluate_binary(Value::Number(7.0), BinaryOp::Sub, Value::Number(10.0)),
        Ok(Value::Number(-3.0))
    );
    assert_eq!(
        evaluate_binary(Value::from("x"), BinaryOp::Eq, Value::from("x")),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        evaluate_binary(Value::Null, BinaryOp::GtEq, Value::Null),
        Err(EvalError::InvalidOperands {
            op: BinaryOp::GtEq,
            left: "null",
            right: "null",
        })
    );
}

#[test]
fn nan_orders_against_nothing() {
    let nan = Value::Number(f64::NAN);
    for op in [BinaryOp::Lt, BinaryOp::LtEq, BinaryOp::Gt, BinaryOp::GtEq] {
        assert_eq!(
            evaluate_binary(nan.clone(), op, Value::Number(1.0)),
            Ok(Value::Bool(false))
        );
    }
}

#[test]
fn long_addition_chain_evaluates_and_frees() {
    let source = format!("print {};", vec!["1"; 100_000].join(" + "));
    assert_eq!(output(&source), "100000\n");
}
