//! Typed-value dispatch.
//!
//! The store keeps up to three typed interpretations per variable and no
//! canonical type tag; callers name the shape they expect through the
//! [`TypedValue`] trait. Interpretations that were never computed read as
//! the type-appropriate zero value, and so does every query against the
//! missing sentinel.

use super::scope::{Store, VarId};

/// Read-only view of a possibly-missing variable.
#[derive(Clone, Copy)]
pub struct VarView<'s> {
    store: &'s Store,
    var: Option<VarId>,
}

impl<'s> VarView<'s> {
    pub(crate) fn new(store: &'s Store, var: Option<VarId>) -> Self {
        Self { store, var }
    }

    pub fn is_missing(&self) -> bool {
        self.var.is_none()
    }

    pub fn name(&self) -> &'s str {
        match self.var {
            Some(id) => &self.store.var(id).name,
            None => "",
        }
    }

    pub fn raw(&self) -> &'s str {
        match self.var {
            Some(id) => &self.store.var(id).raw,
            None => "",
        }
    }

    pub fn value<T: TypedValue>(&self) -> T {
        T::extract(*self)
    }
}

/// Shapes a variable can be read as.
///
/// Implemented for `i64`, `f64`, `bool`, and `String` (the four scalar
/// kinds), and for `Vec<f64>`: the float interpretation of every variable
/// nested under the queried one, in insertion order, with unset floats
/// contributing `0.0`.
pub trait TypedValue: Sized {
    fn extract(view: VarView<'_>) -> Self;
}

impl TypedValue for i64 {
    fn extract(view: VarView<'_>) -> Self {
        view.var
            .and_then(|id| view.store.var(id).as_int)
            .unwrap_or_default()
    }
}

impl TypedValue for f64 {
    fn extract(view: VarView<'_>) -> Self {
        view.var
            .and_then(|id| view.store.var(id).as_float)
            .unwrap_or_default()
    }
}

impl TypedValue for bool {
    fn extract(view: VarView<'_>) -> Self {
        view.var
            .and_then(|id| view.store.var(id).as_bool)
            .unwrap_or_default()
    }
}

impl TypedValue for String {
    fn extract(view: VarView<'_>) -> Self {
        view.raw().to_string()
    }
}

impl TypedValue for Vec<f64> {
    fn extract(view: VarView<'_>) -> Self {
        let Some(scope) = view.var.and_then(|id| view.store.children_of(id)) else {
            return Vec::new();
        };
        view.store
            .scope(scope)
            .entries
            .values()
            .map(|&id| view.store.var(id).as_float.unwrap_or_default())
            .collect()
    }
}
