//! Tests for typed queries, coercion independence, and aggregation.

use crate::Store;

#[test]
fn test_integer_and_float_interpretations_coexist() {
    let mut store = Store::new();
    store.insert("n", "123");

    assert_eq!(store.value_of::<i64>("n"), 123);
    assert_eq!(store.value_of::<f64>("n"), 123.0);
    assert!(!store.value_of::<bool>("n"));
}

#[test]
fn test_boolean_value_leaves_numeric_interpretations_zero() {
    let mut store = Store::new();
    store.insert("flag", "true");

    assert!(store.value_of::<bool>("flag"));
    assert_eq!(store.value_of::<i64>("flag"), 0);
    assert_eq!(store.value_of::<f64>("flag"), 0.0);
    assert_eq!(store.value_of::<String>("flag"), "true");
}

#[test]
fn test_uppercase_boolean_literals_collapse() {
    let mut store = Store::new();
    store.insert("on", "TRUE");
    store.insert("off", "FALSE");

    assert!(store.value_of::<bool>("on"));
    assert!(!store.value_of::<bool>("off"));
}

#[test]
fn test_missing_name_reads_as_zero_values() {
    let store = Store::new();

    assert_eq!(store.value_of::<i64>("absent"), 0);
    assert_eq!(store.value_of::<f64>("absent"), 0.0);
    assert!(!store.value_of::<bool>("absent"));
    assert_eq!(store.value_of::<String>("absent"), "");
    assert!(store.value_of::<Vec<f64>>("absent").is_empty());
}

#[test]
fn test_signed_value_is_float_but_not_integer() {
    let mut store = Store::new();
    store.insert("delta", "-4");

    assert_eq!(store.value_of::<i64>("delta"), 0);
    assert_eq!(store.value_of::<f64>("delta"), -4.0);
}

#[test]
fn test_string_query_returns_raw_text() {
    let mut store = Store::new();
    store.insert("greeting", "hello world");

    assert_eq!(store.value_of::<String>("greeting"), "hello world");
    assert_eq!(store.value_of::<i64>("greeting"), 0);
}

#[test]
fn test_float_children_aggregation_in_insertion_order() {
    let mut store = Store::new();
    store.parse_line("pt:x:1.0");
    store.parse_line("pt:y:2.0");
    store.parse_line("pt:z:3.0");

    // Insertion order is the contract, asserted explicitly.
    assert_eq!(store.value_of::<Vec<f64>>("pt"), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_aggregation_counts_unset_floats_as_zero() {
    let mut store = Store::new();
    store.parse_line("mixed:a:1.5");
    store.parse_line("mixed:b:oops");
    store.parse_line("mixed:c:2.5");

    assert_eq!(store.value_of::<Vec<f64>>("mixed"), vec![1.5, 0.0, 2.5]);
}

#[test]
fn test_aggregation_on_leaf_is_empty() {
    let mut store = Store::new();
    store.insert("leaf", "3.0");

    assert!(store.value_of::<Vec<f64>>("leaf").is_empty());
}

#[test]
fn test_reinsert_failure_keeps_last_computed_interpretation() {
    let mut store = Store::new();
    store.insert("x", "123");
    store.insert("x", "abc");

    // Raw reflects the overwrite; the numeric caches keep the last
    // successfully computed interpretations.
    assert_eq!(store.value_of::<String>("x"), "abc");
    assert_eq!(store.value_of::<i64>("x"), 123);
    assert_eq!(store.value_of::<f64>("x"), 123.0);
}

#[test]
fn test_entry_typed_access_matches_store_query() {
    let mut store = Store::new();
    store.parse_line("server:port:8080");

    let port = store.lookup("server").select("port");
    assert_eq!(port.value::<i64>(), 8080);
    assert_eq!(port.value::<f64>(), 8080.0);
    assert_eq!(port.value::<String>(), "8080");
}

#[test]
fn test_variables_iterates_in_insertion_order() {
    let mut store = Store::new();
    store.insert("b", "2");
    store.insert("a", "1");

    let raws: Vec<String> = store.variables().map(|v| v.raw().to_string()).collect();
    assert_eq!(raws, vec!["2", "1"]);

    let names: Vec<&str> = store.variables().map(|v| v.name()).collect();
    assert_eq!(names, vec!["b", "a"]);
}
