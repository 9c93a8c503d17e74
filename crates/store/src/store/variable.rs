//! The variable record and its value coercions.
//!
//! Responsibilities:
//! - Hold a variable's name, raw value, typed interpretations, lazy child
//!   scope, and owner-scope back-reference.
//! - Attempt the integer, float, and boolean coercions of the raw value.
//!
//! Invariants:
//! - The three interpretations are independent; a value may hold several
//!   at once (no canonical type tag).
//! - A coercion that fails leaves the previously stored interpretation of
//!   that kind untouched (last-computed semantics).
//! - Replacing the raw value does not itself coerce; the store re-runs
//!   the coercions explicitly after an insert or line parse.

use tracing::warn;

use super::scope::ScopeId;

/// A named node in the configuration tree.
#[derive(Debug)]
pub(crate) struct Variable {
    pub(crate) name: String,
    pub(crate) raw: String,
    pub(crate) as_int: Option<i64>,
    pub(crate) as_float: Option<f64>,
    pub(crate) as_bool: Option<bool>,
    /// Nested scope holding this variable's children, created lazily the
    /// first time the variable is used as an intermediate path segment.
    pub(crate) children: Option<ScopeId>,
    /// The scope this variable was registered in. A handle, not a pointer:
    /// the scope owns its variables, a variable only records where it lives.
    pub(crate) owner: ScopeId,
}

impl Variable {
    pub(crate) fn new(name: &str, owner: ScopeId) -> Self {
        Self {
            name: name.to_string(),
            raw: String::new(),
            as_int: None,
            as_float: None,
            as_bool: None,
            children: None,
            owner,
        }
    }

    /// Replace the raw value. Does not touch the typed interpretations.
    pub(crate) fn set_raw(&mut self, raw: &str) {
        raw.clone_into(&mut self.raw);
    }

    /// Run all three coercions on the current raw value.
    pub(crate) fn coerce_all(&mut self) {
        self.coerce_int();
        self.coerce_float();
        self.coerce_bool();
    }

    /// Integer coercion: every byte an ASCII digit, non-empty. No sign,
    /// no whitespace. Digit strings that do not fit an `i64` leave the
    /// interpretation unset.
    pub(crate) fn coerce_int(&mut self) -> bool {
        if self.raw.is_empty() || !self.raw.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match self.raw.parse::<i64>() {
            Ok(value) => {
                self.as_int = Some(value);
                true
            }
            Err(_) => {
                warn!(name = %self.name, raw = %self.raw, "integer out of range, interpretation left unset");
                false
            }
        }
    }

    /// Float coercion: the entire string must parse as a float literal,
    /// with nothing left over. Whitespace-sensitive.
    pub(crate) fn coerce_float(&mut self) -> bool {
        match self.raw.parse::<f64>() {
            Ok(value) => {
                self.as_float = Some(value);
                true
            }
            Err(_) => false,
        }
    }

    /// Boolean coercion: exactly `TRUE`, `FALSE`, `true`, or `false`.
    pub(crate) fn coerce_bool(&mut self) -> bool {
        let value = match self.raw.as_str() {
            "TRUE" | "true" => true,
            "FALSE" | "false" => false,
            _ => return false,
        };
        self.as_bool = Some(value);
        true
    }
}
