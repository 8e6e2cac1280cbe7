//! Global table of declared functions.
//!
//! Kept apart from the scope chain: functions are visible everywhere once
//! declared and are never shadowed or removed.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use sol_ir::{FunctionDecl, Name};

#[derive(Clone, Debug, Default)]
pub struct FunctionTable {
    functions: FxHashMap<Name, Arc<FunctionDecl>>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration, replacing any earlier one with the same name.
    pub fn insert(&mut self, decl: Arc<FunctionDecl>) {
        self.functions.insert(decl.name.clone(), decl);
    }

    pub fn get(&self, name: &str) -> Option<Arc<FunctionDecl>> {
        self.functions.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn clear(&mut self) {
        self.functions.clear();
    }
}
