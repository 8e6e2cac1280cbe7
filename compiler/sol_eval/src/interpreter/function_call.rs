//! User function calls.
//!
//! A call scope is pushed on the *caller's* current scope, not on the scope
//! the function was declared in: a function body sees every variable its
//! caller can see, unless a parameter shadows it.

use smallvec::SmallVec;
use sol_ir::Call;
use tracing::trace;

use super::{Flow, Interpreter};
use crate::errors::{
    argument_count_mismatch, recursion_limit_exceeded, undefined_function, EvalResult,
};
use crate::Value;

impl Interpreter {
    /// Call a declared function and return its result (`null` when the body
    /// finishes without `return`).
    pub(crate) fn call_function(&mut self, call: &Call) -> EvalResult {
        let decl = self
            .functions
            .get(call.name.as_str())
            .ok_or_else(|| undefined_function(&call.name))?;
        if decl.arity() != call.args.len() {
            return Err(argument_count_mismatch(
                &call.name,
                decl.arity(),
                call.args.len(),
            ));
        }

        let args = call
            .args
            .iter()
            .map(|arg| self.eval_expr(arg))
            .collect::<EvalResult<SmallVec<[Value; 4]>>>()?;

        if self.call_depth >= self.max_call_depth {
            return Err(recursion_limit_exceeded(self.max_call_depth));
        }
        trace!(name = %call.name, depth = self.call_depth, "call");

        self.call_depth += 1;
        let flow = self.with_bindings(decl.params.iter().cloned().zip(args), |scoped| {
            scoped.exec_block(&decl.body)
        });
        self.call_depth -= 1;

        match flow? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Null),
        }
    }
}
