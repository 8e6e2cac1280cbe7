//! Scope chain for variable bindings.
//!
//! Scopes live in an arena and point at their parent by index. Scopes are
//! only ever pushed on top of the current one and popped in reverse order,
//! so the arena doubles as the scope stack.

use rustc_hash::FxHashMap;
use sol_ir::Name;

use crate::Value;

/// Index of a scope in the [`Environment`] arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The global scope, always at the bottom of the chain.
    pub const GLOBAL: ScopeId = ScopeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Error returned when binding or rebinding a name fails.
///
/// The interpreter turns these into [`EvalError`](crate::EvalError)s carrying
/// the offending name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindError {
    /// The name is already bound somewhere along the chain.
    AlreadyDeclared,
    /// The name is not bound anywhere along the chain.
    Undefined,
}

/// A single scope: its bindings and the scope it was pushed on.
#[derive(Clone, Debug, Default)]
struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<ScopeId>,
}

/// The live scope chain of an interpreter session.
#[derive(Clone, Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
    current: ScopeId,
}

impl Environment {
    /// Create an environment holding only an empty global scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::default()],
            current: ScopeId::GLOBAL,
        }
    }

    /// Number of scopes on the chain, the global scope included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn current(&self) -> ScopeId {
        self.current
    }

    /// Whether the current scope is the global scope.
    pub fn is_global(&self) -> bool {
        self.current == ScopeId::GLOBAL
    }

    /// Push a new scope whose parent is the current scope.
    #[inline]
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope {
            bindings: FxHashMap::default(),
            parent: Some(self.current),
        });
        self.current = ScopeId(self.scopes.len() - 1);
    }

    /// Pop the current scope, making its parent current.
    ///
    /// Popping the global scope is a no-op.
    #[inline]
    pub fn pop_scope(&mut self) {
        debug_assert_eq!(self.current.index(), self.scopes.len() - 1);
        if let Some(parent) = self.scopes[self.current.index()].parent {
            self.scopes.pop();
            self.current = parent;
        }
    }

    /// Drop every scope and binding, leaving an empty global scope.
    pub fn reset(&mut self) {
        self.scopes.clear();
        self.scopes.push(Scope::default());
        self.current = ScopeId::GLOBAL;
    }

    /// Bind `name` in the current scope.
    ///
    /// Fails if `name` is bound anywhere along the chain, not just in the
    /// current scope: declarations never shadow.
    pub fn declare(&mut self, name: Name, value: Value) -> Result<(), BindError> {
        if self.resolve(name.as_str()).is_some() {
            return Err(BindError::AlreadyDeclared);
        }
        self.define(name, value);
        Ok(())
    }

    /// Bind `name` in the current scope, replacing any binding it holds
    /// there and shadowing any further up the chain.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.scopes[self.current.index()]
            .bindings
            .insert(name, value);
    }

    /// Look up the nearest binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let id = self.resolve(name)?;
        self.scopes[id.index()].bindings.get(name)
    }

    /// Rebind the nearest binding of `name`, in whichever scope holds it.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), BindError> {
        let id = self.resolve(name).ok_or(BindError::Undefined)?;
        match self.scopes[id.index()].bindings.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(BindError::Undefined),
        }
    }

    /// Find the innermost scope binding `name`, walking from the current
    /// scope toward the global one.
    fn resolve(&self, name: &str) -> Option<ScopeId> {
        let mut next = Some(self.current);
        while let Some(id) = next {
            let scope = &self.scopes[id.index()];
            if scope.bindings.contains_key(name) {
                return Some(id);
            }
            next = scope.parent;
        }
        None
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
