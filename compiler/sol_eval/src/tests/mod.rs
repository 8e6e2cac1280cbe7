//! End-to-end evaluator tests: source in, printed output or error out.

mod control_tests;
mod operators_tests;
mod scope_tests;

use crate::{
    buffer_handler, silent_handler, EvalError, InterpretError, Interpreter, InterpreterBuilder,
};

/// A session that captures `print` output.
fn session() -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build()
}

/// Run `source` in a fresh session and return what it printed.
fn output(source: &str) -> String {
    let mut interp = session();
    if let Err(err) = interp.interpret(source, true) {
        panic!("{source:?} failed: {err}");
    }
    interp.print_handler().output()
}

/// Run `source` in a fresh session and return the runtime error it raised.
fn eval_error(source: &str) -> EvalError {
    let mut interp = InterpreterBuilder::new()
        .print_handler(silent_handler())
        .build();
    match interp.interpret(source, true) {
        Err(InterpretError::Eval(err)) => err,
        other => panic!("expected a runtime error from {source:?}, got {other:?}"),
    }
}
