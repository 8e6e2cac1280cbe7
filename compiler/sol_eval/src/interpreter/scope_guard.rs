//! RAII scope guards for the interpreter's scope chain.
//!
//! [`ScopedInterpreter`] pushes a scope when created and pops it when
//! dropped, so a scope is released on normal completion, on `return`, on
//! error and during unwinding alike. The guard holds `&mut Interpreter` and
//! derefs to it, so the body runs against the whole interpreter.

use std::ops::{Deref, DerefMut};

use sol_ir::Name;

use super::Interpreter;
use crate::Value;

/// Guard that pops the scope it pushed when dropped.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a scope and return a guard that pops it on drop.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a new scope.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }

    /// Run `f` inside a new scope pre-populated with `bindings`.
    ///
    /// Bindings go through `define`, so they may shadow names further up
    /// the chain.
    pub fn with_bindings<T, F, I>(&mut self, bindings: I, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
        I: IntoIterator<Item = (Name, Value)>,
    {
        self.with_env_scope(|scoped| {
            for (name, value) in bindings {
                scoped.env.define(name, value);
            }
            f(scoped)
        })
    }
}
