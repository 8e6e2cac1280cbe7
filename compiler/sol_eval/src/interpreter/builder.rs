//! `InterpreterBuilder` for configuring interpreter sessions.

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::{stdout_handler, Environment, FunctionTable, SharedPrintHandler};

/// Builder for [`Interpreter`] sessions.
///
/// Defaults: print to stdout, at most [`DEFAULT_MAX_CALL_DEPTH`] nested calls.
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Set where `print` output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the bound on nested user function calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: Environment::new(),
            functions: FunctionTable::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
