//! Evaluation errors and their constructors.
//!
//! Every error aborts the current run; the language has no way to catch
//! one. Constructors live here so call sites stay one line long.

use sol_ir::{BinaryOp, Name};
use sol_parse::ParseError;
use thiserror::Error;

use crate::Value;

/// Result of evaluating a statement or expression.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// A runtime error raised while evaluating a parsed program.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("undefined variable `{0}`")]
    UndefinedVariable(Name),

    #[error("variable `{0}` is already declared in an enclosing scope")]
    DuplicateDeclaration(Name),

    #[error("function `{0}` must be declared at the top level")]
    NestedFunctionDeclaration(Name),

    #[error("undefined function `{0}`")]
    UndefinedFunction(Name),

    #[error("function `{name}` expects {expected} argument(s), got {got}")]
    ArgumentCountMismatch {
        name: Name,
        expected: usize,
        got: usize,
    },

    /// The condition of an `if` or `while` is not an identifier, a boolean
    /// literal or a comparison.
    #[error("invalid `{construct}` condition: expected an identifier, a boolean or a comparison")]
    InvalidCondition { construct: &'static str },

    #[error("cannot apply `{}` to {left} and {right}", op.as_symbol())]
    InvalidOperands {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("maximum call depth of {depth} exceeded")]
    RecursionLimitExceeded { depth: usize },
}

/// Failure of a whole `interpret` call: either the source did not parse or
/// the program failed at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InterpretError {
    #[error("parse error at {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

// Variable errors

#[cold]
pub fn undefined_variable(name: &Name) -> EvalError {
    EvalError::UndefinedVariable(name.clone())
}

#[cold]
pub fn duplicate_declaration(name: &Name) -> EvalError {
    EvalError::DuplicateDeclaration(name.clone())
}

// Function errors

#[cold]
pub fn nested_function_declaration(name: &Name) -> EvalError {
    EvalError::NestedFunctionDeclaration(name.clone())
}

#[cold]
pub fn undefined_function(name: &Name) -> EvalError {
    EvalError::UndefinedFunction(name.clone())
}

#[cold]
pub fn argument_count_mismatch(name: &Name, expected: usize, got: usize) -> EvalError {
    EvalError::ArgumentCountMismatch {
        name: name.clone(),
        expected,
        got,
    }
}

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::RecursionLimitExceeded { depth }
}

// Expression errors

#[cold]
pub fn invalid_condition(construct: &'static str) -> EvalError {
    EvalError::InvalidCondition { construct }
}

#[cold]
pub fn invalid_operands(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::InvalidOperands {
        op,
        left: left.type_name(),
        right: right.type_name(),
    }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}
