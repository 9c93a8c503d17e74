//! Hierarchical colon-delimited configuration store.
//!
//! This crate parses a line-oriented text format (`a:b:c:value`) into a
//! tree of named variables, each optionally holding typed interpretations
//! (integer, float, boolean) of its raw textual value, and exposes lookup,
//! creation, and typed-access operations over the tree.

mod error;
pub mod render;
mod source;
mod store;

pub use error::SourceError;
pub use render::TreeNode;
pub use source::{FileSource, LineSource};
pub use store::{Entry, Store, TypedValue, VarView};
