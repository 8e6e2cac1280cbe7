//! Binary operator evaluation.
//!
//! Both operands are already evaluated; there is no short-circuiting.

use std::cmp::Ordering;

use sol_ir::BinaryOp;

use crate::errors::{division_by_zero, invalid_operands, EvalResult};
use crate::Value;

/// Apply `op` to two evaluated operands.
pub fn evaluate_binary(left: Value, op: BinaryOp, right: Value) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Gt | BinaryOp::Lt | BinaryOp::GtEq | BinaryOp::LtEq => {
            compare(&left, op, &right)
        }
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            arithmetic(left, op, right)
        }
    }
}

fn arithmetic(left: Value, op: BinaryOp, right: Value) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => match op {
            BinaryOp::Add => Ok(Value::Number(a + b)),
            BinaryOp::Sub => Ok(Value::Number(a - b)),
            BinaryOp::Mul => Ok(Value::Number(a * b)),
            _ if b == 0.0 => Err(division_by_zero()),
            _ => Ok(Value::Number(a / b)),
        },
        (Value::Str(mut a), Value::Str(b)) if op == BinaryOp::Add => {
            a.push_str(&b);
            Ok(Value::Str(a))
        }
        (left, right) => Err(invalid_operands(op, &left, &right)),
    }
}

fn compare(left: &Value, op: BinaryOp, right: &Value) -> EvalResult {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => return Err(invalid_operands(op, left, right)),
    };
    // NaN orders against nothing, so every ordering comparison is false.
    let result = ordering.is_some_and(|ordering| {
        matches!(
            (op, ordering),
            (BinaryOp::Gt | BinaryOp::GtEq, Ordering::Greater)
                | (BinaryOp::Lt | BinaryOp::LtEq, Ordering::Less)
                | (BinaryOp::GtEq | BinaryOp::LtEq, Ordering::Equal)
        )
    });
    Ok(Value::Bool(result))
}
