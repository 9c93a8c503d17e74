//! The scope/store core: variable resolution and typed values.
//!
//! Responsibilities:
//! - Own the scope and variable arenas and the root scope.
//! - Parse colon-delimited lines into chains of nested variables.
//! - Serve lookup, creation, sibling-insert, and typed-value queries.
//!
//! Does NOT handle:
//! - Reading lines from disk (see `source` module).
//! - Rendering the tree for debugging (see `render` module).
//!
//! Invariants / Assumptions:
//! - A name is unique within one scope; scopes are insertion-ordered.
//! - No operation here errors. Absence is the missing sentinel, a failed
//!   coercion reads as the type-appropriate zero, and re-creating an
//!   existing name yields the sentinel.
//! - Every mutating operation on the sentinel is an identity no-op.

mod entry;
mod scope;
mod value;
mod variable;

#[cfg(test)]
mod tests;

pub use entry::Entry;
pub use scope::Store;
pub use value::{TypedValue, VarView};

pub(crate) use scope::{ROOT_SCOPE, ScopeId};
