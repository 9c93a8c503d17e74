//! Tests for colon-delimited line parsing.

use crate::Store;

#[test]
fn test_parse_line_builds_nested_chain() {
    let mut store = Store::new();
    store.parse_line("a:b:c:42");

    let deepest = store.lookup("a").select("b").select("c");
    assert!(!deepest.is_missing());
    assert_eq!(deepest.raw(), "42");
    assert_eq!(deepest.value::<i64>(), 42);
}

#[test]
fn test_parse_line_each_segment_is_child_of_previous() {
    let mut store = Store::new();
    store.parse_line("a:b:c:1");

    // c hangs off b, not off a.
    assert!(store.lookup("a").select("c").is_missing());
    assert!(!store.lookup("a").select("b").select("c").is_missing());
}

#[test]
fn test_parse_line_without_delimiter_stores_empty_value() {
    let mut store = Store::new();
    store.parse_line("standalone");

    let var = store.lookup("standalone");
    assert!(!var.is_missing());
    assert_eq!(var.raw(), "");
}

#[test]
fn test_parse_empty_line_stored_under_empty_name() {
    let mut store = Store::new();
    store.parse_line("");

    assert_eq!(store.len(), 1);
    assert!(!store.lookup("").is_missing());
    assert_eq!(store.lookup("").raw(), "");
}

#[test]
fn test_parse_trailing_delimiter_assigns_empty_value() {
    let mut store = Store::new();
    store.parse_line("key:");

    let var = store.lookup("key");
    assert!(!var.is_missing());
    assert_eq!(var.raw(), "");
}

#[test]
fn test_parse_reuses_existing_root_variable() {
    let mut store = Store::new();
    store.parse_line("pt:x:1.0");
    store.parse_line("pt:y:2.0");
    store.parse_line("pt:z:3.0");

    assert_eq!(store.names().collect::<Vec<_>>(), vec!["pt"]);
    assert_eq!(store.lookup("pt").child_names(), vec!["x", "y", "z"]);
}

#[test]
fn test_parse_same_path_twice_overwrites_deepest_value() {
    let mut store = Store::new();
    store.parse_line("a:b:1");
    store.parse_line("a:b:2");

    assert_eq!(store.lookup("a").child_names().len(), 1);
    assert_eq!(store.lookup("a").select("b").raw(), "2");
}

#[test]
fn test_parse_two_segment_line_sets_root_value() {
    let mut store = Store::new();
    store.parse_line("timeout:30");

    assert_eq!(store.lookup("timeout").raw(), "30");
    assert_eq!(store.value_of::<i64>("timeout"), 30);
}

#[test]
fn test_load_from_str_source_preserves_line_order() {
    let mut store = Store::new();
    store
        .load_from("first:1\nsecond:2\nthird:3")
        .unwrap();

    assert_eq!(
        store.names().collect::<Vec<_>>(),
        vec!["first", "second", "third"]
    );
}
