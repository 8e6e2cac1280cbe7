//! Sol Eval - tree-walking interpreter for the Sol language.
//!
//! # Architecture
//!
//! - [`Interpreter`]: session state and statement/expression dispatch
//! - [`Environment`]: scope chain for variables
//! - [`FunctionTable`]: global function declarations
//! - [`PrintHandlerImpl`]: destination for `print`
//! - [`errors`]: runtime errors and their constructors
//!
//! ```text
//! let mut interp = InterpreterBuilder::new().print_handler(buffer_handler()).build();
//! interp.interpret("var a = 5 / 2; print a;", true)?;
//! assert_eq!(interp.print_handler().output(), "2.5\n");
//! ```

mod environment;
pub mod errors;
mod function_table;
mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::{BindError, Environment, ScopeId};
pub use errors::{EvalError, EvalResult, InterpretError};
pub use function_table::FunctionTable;
pub use interpreter::{
    Flow, Interpreter, InterpreterBuilder, ScopedInterpreter, DEFAULT_MAX_CALL_DEPTH,
};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::Value;

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
