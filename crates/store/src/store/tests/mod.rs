//! Tests for the scope/store core.
//!
//! Responsibilities:
//! - Test line parsing into chains of nested variables.
//! - Test the chainable handle surface and sentinel absorption.
//! - Test typed queries and coercion independence.

pub mod parse_tests;
pub mod typed_tests;
