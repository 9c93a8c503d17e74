//! Tree rendering for debugging and CLI output.
//!
//! Responsibilities:
//! - Produce an indented, newline-joined textual rendering of the whole
//!   scope tree (one `name:value` line per variable, one tab per level).
//! - Produce a `Serialize`-able tree of [`TreeNode`]s for structured
//!   output.
//!
//! Invariants:
//! - Entries whose name and value are both empty are skipped, subtree
//!   included.
//! - Neither form is a stable serialization format; round-tripping is
//!   out of scope.

use serde::Serialize;

use crate::store::{ROOT_SCOPE, ScopeId, Store};

/// One variable in the rendered tree.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub value: String,
    pub children: Vec<TreeNode>,
}

impl Store {
    /// Render the whole tree as indented `name:value` lines.
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        self.render_scope(ROOT_SCOPE, 0, &mut out);
        out
    }

    fn render_scope(&self, scope: ScopeId, depth: usize, out: &mut String) {
        for (name, &id) in &self.scope(scope).entries {
            let var = self.var(id);
            if name.is_empty() && var.raw.is_empty() {
                continue;
            }
            for _ in 0..depth {
                out.push('\t');
            }
            out.push_str(name);
            out.push(':');
            out.push_str(&var.raw);
            out.push('\n');
            if let Some(children) = var.children {
                self.render_scope(children, depth + 1, out);
            }
        }
    }

    /// The tree as structured nodes, with the same skip rule as
    /// [`Store::render_tree`].
    pub fn to_tree(&self) -> Vec<TreeNode> {
        self.collect_scope(ROOT_SCOPE)
    }

    fn collect_scope(&self, scope: ScopeId) -> Vec<TreeNode> {
        self.scope(scope)
            .entries
            .iter()
            .filter(|(name, &id)| !(name.is_empty() && self.var(id).raw.is_empty()))
            .map(|(name, &id)| {
                let var = self.var(id);
                TreeNode {
                    name: name.clone(),
                    value: var.raw.clone(),
                    children: match var.children {
                        Some(children) => self.collect_scope(children),
                        None => Vec::new(),
                    },
                }
            })
            .collect()
    }
}
