//! Variable and function scopes.
//!
//! Scopes live in a stack owned by the [`Environment`]. Each scope links to
//! its parent by index; lookups walk from the current scope to the global
//! scope and never look at children. A call pushes a scope whose parent is
//! the caller's current scope and pops it when the call returns.

use crate::FunctionDefinition;
use lisp_diagnostic::{undefined_function, undefined_variable, LispResult};
use lisp_ir::{names, Value};
use rustc_hash::FxHashMap;
use std::rc::Rc;

/// Index of the global scope.
const GLOBAL: usize = 0;

/// A single scope: variable bindings and function definitions.
#[derive(Clone, Debug, Default)]
struct Scope {
    variables: FxHashMap<String, Value>,
    functions: FxHashMap<String, Rc<FunctionDefinition>>,
    parent: Option<usize>,
}

impl Scope {
    fn with_parent(parent: usize) -> Self {
        Scope {
            parent: Some(parent),
            ..Scope::default()
        }
    }
}

/// Chained environment using a scope stack.
///
/// The global scope is created with `t` and `nil` bound to themselves and
/// is never popped.
#[derive(Clone, Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        let mut env = Environment {
            scopes: vec![Scope::default()],
        };
        env.set_variable(names::T, Value::t());
        env.set_variable(names::NIL, Value::nil());
        env
    }

    /// Number of scopes, including the global scope.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Push a scope whose parent is the current scope.
    pub fn push_scope(&mut self) {
        let parent = self.current_index();
        self.scopes.push(Scope::with_parent(parent));
    }

    /// Pop the current scope. The global scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    #[inline]
    fn current_index(&self) -> usize {
        self.scopes.len() - 1
    }

    fn current_mut(&mut self) -> &mut Scope {
        let index = self.current_index();
        &mut self.scopes[index]
    }

    /// Scopes from the current one up to the global scope.
    fn chain(&self) -> impl Iterator<Item = &Scope> {
        std::iter::successors(Some(&self.scopes[self.current_index()]), |scope| {
            scope.parent.map(|index| &self.scopes[index])
        })
    }

    /// Bind `name` in the current scope, shadowing any outer binding.
    ///
    /// Returns the stored value.
    pub fn set_variable(&mut self, name: impl Into<String>, value: Value) -> Value {
        self.current_mut()
            .variables
            .insert(name.into(), value.clone());
        value
    }

    /// The innermost binding of `name`.
    pub fn lookup_variable(&self, name: &str) -> Option<&Value> {
        self.chain().find_map(|scope| scope.variables.get(name))
    }

    pub fn get_variable(&self, name: &str) -> LispResult<Value> {
        self.lookup_variable(name)
            .cloned()
            .ok_or_else(|| undefined_variable(name))
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.lookup_variable(name).is_some()
    }

    /// Register a function in the current scope. Returns the name as a symbol.
    pub fn define_function(
        &mut self,
        name: impl Into<String>,
        params: Vec<String>,
        body: Value,
    ) -> Value {
        let name = name.into();
        let definition = Rc::new(FunctionDefinition::new(params, body));
        self.current_mut()
            .functions
            .insert(name.clone(), definition);
        Value::Symbol(name)
    }

    /// The innermost definition of `name`.
    pub fn lookup_function(&self, name: &str) -> Option<&Rc<FunctionDefinition>> {
        self.chain().find_map(|scope| scope.functions.get(name))
    }

    pub fn get_function(&self, name: &str) -> LispResult<Rc<FunctionDefinition>> {
        self.lookup_function(name)
            .cloned()
            .ok_or_else(|| undefined_function(name))
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.lookup_function(name).is_some()
    }

    /// Names bound in the global scope, sorted.
    pub fn global_variables(&self) -> Vec<(&str, &Value)> {
        let mut bindings: Vec<_> = self.scopes[GLOBAL]
            .variables
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        bindings.sort_unstable_by_key(|(name, _)| *name);
        bindings
    }

    /// Functions defined in the global scope, sorted by name.
    pub fn global_functions(&self) -> Vec<(&str, &FunctionDefinition)> {
        let mut functions: Vec<_> = self.scopes[GLOBAL]
            .functions
            .iter()
            .map(|(name, definition)| (name.as_str(), definition.as_ref()))
            .collect();
        functions.sort_unstable_by_key(|(name, _)| *name);
        functions
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
