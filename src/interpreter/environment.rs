use std::{collections::HashMap, fmt};

use log::trace;

use crate::interpreter::value::core::Value;

/// Handle to a scope inside an [`Environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
struct Scope {
    vars:     HashMap<String, Value>,
    parent:   Option<ScopeId>,
    captured: bool,
}

/// All scopes of a running program, stored in one arena.
///
/// Each scope maps names to values and links to its parent by handle, which
/// forms the scope chain used for lookups. The global scope is created with
/// the environment; every procedure invocation adds a child of the scope the
/// procedure was defined in. Conditionals and loops do not get scopes of their
/// own.
///
/// When an invocation ends its scope is released and the slot reused, unless a
/// procedure defined during the invocation captured it.
///
/// # Example
/// ```
/// use boomslang::interpreter::{environment::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// let root = env.root();
/// env.define(root, "x", Value::Integer(1));
///
/// let child = env.child(root);
/// env.define(child, "x", Value::Integer(2));
///
/// assert_eq!(env.lookup(child, "x"), Some(&Value::Integer(2)));
/// assert_eq!(env.lookup(root, "x"), Some(&Value::Integer(1)));
/// assert_eq!(env.lookup(child, "y"), None);
/// ```
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
    free:   Vec<usize>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates an environment holding only an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::default()],
               free:   Vec::new(), }
    }

    /// The global scope.
    #[must_use]
    pub const fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Creates a new, empty scope whose parent is `parent`.
    pub fn child(&mut self, parent: ScopeId) -> ScopeId {
        let scope = Scope { parent: Some(parent),
                            ..Scope::default() };

        let id = if let Some(slot) = self.free.pop() {
            self.scopes[slot] = scope;
            ScopeId(slot)
        } else {
            self.scopes.push(scope);
            ScopeId(self.scopes.len() - 1)
        };

        trace!(target: "eval", "scope {id} created with parent {parent}");
        id
    }

    /// Binds `name` to `value` in `scope`, shadowing any binding of the same
    /// name in its ancestors.
    pub fn define(&mut self, scope: ScopeId, name: impl Into<String>, value: Value) {
        self.scopes[scope.0].vars.insert(name.into(), value);
    }

    /// Looks `name` up in `scope`, then in each ancestor in order.
    ///
    /// Returns `None` if no scope in the chain binds the name.
    #[must_use]
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Value> {
        let mut current = Some(scope);

        while let Some(id) = current {
            let scope = &self.scopes[id.0];
            if let Some(value) = scope.vars.get(name) {
                return Some(value);
            }
            current = scope.parent;
        }

        None
    }

    /// Marks `scope` as referenced by a closure, so it is never released.
    pub fn capture(&mut self, scope: ScopeId) {
        self.scopes[scope.0].captured = true;
    }

    /// Ends the lifetime of an invocation scope.
    ///
    /// The global scope and captured scopes are kept; any other scope is
    /// cleared and its slot becomes available for the next invocation.
    pub fn release(&mut self, scope: ScopeId) {
        if scope == self.root() || self.scopes[scope.0].captured {
            return;
        }

        self.scopes[scope.0] = Scope::default();
        self.free.push(scope.0);
        trace!(target: "eval", "scope {scope} released");
    }

    /// Number of scopes currently alive, including the global scope.
    #[must_use]
    pub fn live_scopes(&self) -> usize {
        self.scopes.len() - self.free.len()
    }
}
