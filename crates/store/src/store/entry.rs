//! Chainable variable handles.
//!
//! Responsibilities:
//! - Expose the per-variable verbs (`select`, `create`, `insert`, `also`)
//!   as a chainable handle over the store's arenas.
//! - Carry the missing sentinel: a handle whose variable is absent still
//!   supports the full method set, with every mutation an identity no-op.
//!
//! Invariants:
//! - Deep chained expressions (`store.lookup("a").create("b").insert(...)`)
//!   never need null checks at intermediate steps.
//! - `also` targets the variable's owner scope, never its nested scope.

use super::scope::{Store, VarId};
use super::value::{TypedValue, VarView};

/// A possibly-missing variable, chainable through nested scopes.
///
/// Obtained from [`Store::lookup`], [`Store::create`], or
/// [`Store::insert`]. The sentinel returned for failed lookups and
/// create-once collisions absorbs every mutation and reads as empty.
pub struct Entry<'s> {
    store: &'s mut Store,
    var: Option<VarId>,
}

impl<'s> Entry<'s> {
    pub(crate) fn new(store: &'s mut Store, var: Option<VarId>) -> Self {
        Self { store, var }
    }

    /// True only for the missing sentinel.
    pub fn is_missing(&self) -> bool {
        self.var.is_none()
    }

    /// The variable's name, or the empty string for the sentinel.
    pub fn name(&self) -> &str {
        match self.var {
            Some(id) => &self.store.var(id).name,
            None => "",
        }
    }

    /// The variable's raw textual value, or the empty string.
    pub fn raw(&self) -> &str {
        match self.var {
            Some(id) => &self.store.var(id).raw,
            None => "",
        }
    }

    /// Typed interpretation of this variable; zero-valued when absent.
    pub fn value<T: TypedValue>(&self) -> T {
        T::extract(VarView::new(self.store, self.var))
    }

    /// Names registered in this variable's nested scope, insertion order.
    pub fn child_names(&self) -> Vec<String> {
        match self.var.and_then(|id| self.store.children_of(id)) {
            Some(scope) => self.store.scope(scope).entries.keys().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Look up a child in this variable's nested scope.
    pub fn select(self, name: &str) -> Entry<'s> {
        let Entry { store, var } = self;
        let var = var
            .and_then(|id| store.children_of(id))
            .and_then(|scope| store.lookup_in(scope, name));
        Entry { store, var }
    }

    /// Create-once a child in this variable's nested scope. Yields the
    /// sentinel when the name is already taken, or when invoked on the
    /// sentinel itself.
    pub fn create(self, name: &str) -> Entry<'s> {
        let Entry { store, var } = self;
        let var = match var {
            Some(id) => {
                let scope = store.ensure_children(id);
                store.create_in(scope, name)
            }
            None => None,
        };
        Entry { store, var }
    }

    /// Insert a child in this variable's nested scope, overwriting an
    /// existing child's value. No-op on the sentinel.
    pub fn insert(self, name: &str, raw: &str) -> Entry<'s> {
        let Entry { store, var } = self;
        let var = match var {
            Some(id) => {
                let scope = store.ensure_children(id);
                Some(store.insert_in(scope, name, raw))
            }
            None => None,
        };
        Entry { store, var }
    }

    /// Insert a sibling alongside this variable, into the scope recorded
    /// in its owner back-reference. Same coercion rules as `insert`.
    /// No-op on the sentinel.
    pub fn also(self, name: &str, raw: &str) -> Entry<'s> {
        let Entry { store, var } = self;
        let var = match var {
            Some(id) => {
                let owner = store.var(id).owner;
                Some(store.insert_in(owner, name, raw))
            }
            None => None,
        };
        Entry { store, var }
    }
}
