//! Store arenas and scope operations.
//!
//! Responsibilities:
//! - Own the scope and variable arenas; the root scope lives at handle 0.
//! - Parse colon-delimited lines into chains of nested variables.
//! - Provide the scope-level primitives (lookup, create-once,
//!   insert-overwrite, get-or-create) that `Entry` and the public API
//!   build on.
//!
//! Does NOT handle:
//! - The chainable handle surface (see `entry.rs`).
//! - Typed-value dispatch (see `value.rs`).
//!
//! Invariants / Assumptions:
//! - Scope maps are insertion-ordered and names are unique per scope.
//! - `create_in` is create-once: an existing name yields `None` (the
//!   sentinel at the `Entry` layer). `insert_in` overwrites. The
//!   asymmetry is deliberate and covered by tests.
//! - A variable's owner handle always names the scope whose map contains
//!   it; re-registration keeps the original insertion position.

use indexmap::IndexMap;
use tracing::trace;

use super::entry::Entry;
use super::value::{TypedValue, VarView};
use super::variable::Variable;
use crate::error::SourceError;
use crate::source::LineSource;

/// Handle to a scope in the store's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScopeId(pub(crate) usize);

/// Handle to a variable in the store's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VarId(pub(crate) usize);

/// The top-level scope every `Store` starts with.
pub(crate) const ROOT_SCOPE: ScopeId = ScopeId(0);

/// One scope: an insertion-ordered mapping from name to variable.
#[derive(Debug, Default)]
pub(crate) struct ScopeData {
    pub(crate) entries: IndexMap<String, VarId>,
}

/// Hierarchical configuration store.
///
/// Variables live in an arena owned by the store; scopes refer to them by
/// handle, and variables refer back to their owning scope the same way,
/// so the tree carries no reference cycles.
#[derive(Debug)]
pub struct Store {
    scopes: Vec<ScopeData>,
    vars: Vec<Variable>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store with a root scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![ScopeData::default()],
            vars: Vec::new(),
        }
    }

    // Arena accessors, shared with the sibling modules.

    pub(crate) fn var(&self, id: VarId) -> &Variable {
        &self.vars[id.0]
    }

    pub(crate) fn var_mut(&mut self, id: VarId) -> &mut Variable {
        &mut self.vars[id.0]
    }

    pub(crate) fn scope(&self, id: ScopeId) -> &ScopeData {
        &self.scopes[id.0]
    }

    fn alloc_var(&mut self, name: &str, owner: ScopeId) -> VarId {
        let id = VarId(self.vars.len());
        self.vars.push(Variable::new(name, owner));
        id
    }

    /// The variable's nested scope, if it has ever been used as a branch.
    pub(crate) fn children_of(&self, id: VarId) -> Option<ScopeId> {
        self.var(id).children
    }

    /// The variable's nested scope, created now if it never existed.
    pub(crate) fn ensure_children(&mut self, id: VarId) -> ScopeId {
        if let Some(scope) = self.var(id).children {
            return scope;
        }
        let scope = ScopeId(self.scopes.len());
        self.scopes.push(ScopeData::default());
        self.var_mut(id).children = Some(scope);
        scope
    }

    // Scope-level primitives.

    pub(crate) fn lookup_in(&self, scope: ScopeId, name: &str) -> Option<VarId> {
        self.scope(scope).entries.get(name).copied()
    }

    /// Create-once: registers a fresh empty variable, or yields `None`
    /// when the name is already taken.
    pub(crate) fn create_in(&mut self, scope: ScopeId, name: &str) -> Option<VarId> {
        if self.scope(scope).entries.contains_key(name) {
            return None;
        }
        let id = self.alloc_var(name, scope);
        self.scopes[scope.0].entries.insert(name.to_string(), id);
        Some(id)
    }

    /// Get-or-create: the existing variable if present, a fresh one
    /// otherwise. Used while walking parsed paths.
    pub(crate) fn ensure_in(&mut self, scope: ScopeId, name: &str) -> VarId {
        if let Some(id) = self.lookup_in(scope, name) {
            return id;
        }
        let id = self.alloc_var(name, scope);
        self.scopes[scope.0].entries.insert(name.to_string(), id);
        id
    }

    /// Create-or-overwrite: assigns the raw value, re-runs all three
    /// coercions, and records the owner scope.
    pub(crate) fn insert_in(&mut self, scope: ScopeId, name: &str, raw: &str) -> VarId {
        let id = self.ensure_in(scope, name);
        let var = self.var_mut(id);
        var.set_raw(raw);
        var.coerce_all();
        var.owner = scope;
        id
    }

    // Public root-scope API. The same verbs are reachable scoped through
    // `Entry` handles returned here.

    /// Look up a top-level variable. Absence is a value: the returned
    /// handle is the missing sentinel, on which every mutation is a no-op.
    pub fn lookup(&mut self, name: &str) -> Entry<'_> {
        let var = self.lookup_in(ROOT_SCOPE, name);
        Entry::new(self, var)
    }

    /// Create a fresh empty top-level variable. If the name already
    /// exists this yields the missing sentinel, not the existing variable.
    pub fn create(&mut self, name: &str) -> Entry<'_> {
        let var = self.create_in(ROOT_SCOPE, name);
        Entry::new(self, var)
    }

    /// Insert a top-level variable, overwriting the raw value and
    /// re-running the coercions if the name already exists.
    pub fn insert(&mut self, name: &str, raw: &str) -> Entry<'_> {
        let var = self.insert_in(ROOT_SCOPE, name, raw);
        Entry::new(self, Some(var))
    }

    /// Registered top-level names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scope(ROOT_SCOPE).entries.keys().map(String::as_str)
    }

    /// Read-only views of the registered top-level variables, in
    /// insertion order.
    pub fn variables(&self) -> impl Iterator<Item = VarView<'_>> {
        self.scope(ROOT_SCOPE)
            .entries
            .values()
            .map(|&id| VarView::new(self, Some(id)))
    }

    /// Number of registered top-level variables.
    pub fn len(&self) -> usize {
        self.scope(ROOT_SCOPE).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Typed query against the root scope: the stored interpretation of
    /// the named variable, or the type-appropriate zero value when the
    /// name is absent or the interpretation was never computed.
    pub fn value_of<T: TypedValue>(&self, name: &str) -> T {
        T::extract(VarView::new(self, self.lookup_in(ROOT_SCOPE, name)))
    }

    /// Parse one colon-delimited line into a chain of nested variables.
    ///
    /// The first segment names a root variable, created if absent and
    /// reused if present. Each middle segment descends into (creating if
    /// absent) a variable nested in the previous one's own scope. The
    /// final segment becomes the deepest variable's raw value and all
    /// three coercions are re-run on it. A line without a delimiter is
    /// stored as a root variable named by the whole line with an empty
    /// value; an empty line lands under the empty name.
    pub fn parse_line(&mut self, line: &str) {
        let mut segments = line.split(':');
        let first = segments.next().unwrap_or_default();
        let rest: Vec<&str> = segments.collect();

        if rest.is_empty() {
            self.ensure_in(ROOT_SCOPE, first);
            trace!(name = first, "stored bare line as empty-valued variable");
            return;
        }

        let Some((value, path)) = rest.split_last() else {
            return;
        };

        let mut current = self.ensure_in(ROOT_SCOPE, first);
        for segment in path {
            let scope = self.ensure_children(current);
            current = self.ensure_in(scope, segment);
        }

        let var = self.var_mut(current);
        var.set_raw(value);
        var.coerce_all();
        trace!(root = first, depth = path.len() + 1, "parsed configuration line");
    }

    /// Drain a line source through `parse_line`.
    pub fn load_from<S: LineSource>(&mut self, source: S) -> Result<(), SourceError> {
        for line in source.read_lines()? {
            self.parse_line(&line);
        }
        Ok(())
    }
}
