//! JSON supplier contract: what counts as a node, what gets rejected

use std::fs;

use astview::fields::children_of;
use astview::source::{JsonSource, TreeSource};
use astview::AstViewError;

fn read_fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/resources/asts/{}", name)).unwrap()
}

// ============================================================
// Accepted Inputs
// ============================================================

#[test]
fn given_estree_fixture_when_supplying_then_root_kind_is_program() {
    let root = JsonSource.supply(&read_fixture("program_var.json")).unwrap();
    assert_eq!(root.kind(), "Program");
    assert_eq!(children_of(&root).len(), 1);
}

#[test]
fn given_null_child_field_when_supplying_then_field_is_skipped_for_structure() {
    let root = JsonSource
        .supply(r#"{"type": "IfStatement", "alternate": null, "consequent": {"type": "BlockStatement"}}"#)
        .unwrap();

    let kinds: Vec<_> = children_of(&root).iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, ["BlockStatement"]);
}

#[test]
fn given_document_field_order_when_supplying_then_order_is_preserved() {
    let root = JsonSource
        .supply(r#"{"type": "Literal", "raw": "1", "value": 1}"#)
        .unwrap();

    let names: Vec<_> = root.fields().map(|(n, _)| n).collect();
    assert_eq!(names, ["raw", "value"]);
}

#[test]
fn given_nested_object_without_type_when_supplying_then_it_becomes_anonymous_node() {
    let root = JsonSource.supply(&read_fixture("program_var.json")).unwrap();
    let declarator = children_of(&root)[0];

    let id = declarator.field("id").unwrap().as_node().unwrap();
    assert_eq!(id.kind(), "");
    assert_eq!(id.scalar_str("name"), Some("x"));
}

#[test]
fn given_scalar_array_annotation_when_supplying_then_it_is_not_structure_or_label() {
    // esprima emits `range: [0, 10]` style annotations when asked to.
    let root = JsonSource
        .supply(r#"{"type": "Program", "range": [0, 10], "body": [{"type": "EmptyStatement", "range": [0, 10]}]}"#)
        .unwrap();

    let kinds: Vec<_> = children_of(&root).iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, ["EmptyStatement"]);
    assert_eq!(astview::label::label_for(children_of(&root)[0]), "");
}

// ============================================================
// Rejected Inputs
// ============================================================

#[test]
fn given_invalid_json_when_supplying_then_json_error_is_returned() {
    let err = JsonSource.supply("var x = 5;").unwrap_err();
    assert!(matches!(err, AstViewError::Json(_)));
}

#[test]
fn given_non_object_root_when_supplying_then_tree_is_rejected() {
    let err = JsonSource.supply("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, AstViewError::InvalidTree(_)));
}

#[test]
fn given_root_without_type_when_supplying_then_tree_is_rejected() {
    let err = JsonSource
        .supply(&read_fixture("missing_type.json"))
        .unwrap_err();
    assert!(matches!(err, AstViewError::InvalidTree(_)));
}

#[test]
fn given_array_mixing_nodes_and_scalars_when_supplying_then_tree_is_rejected() {
    let err = JsonSource
        .supply(&read_fixture("mixed_array.json"))
        .unwrap_err();
    assert!(matches!(err, AstViewError::InvalidTree(_)));
}

#[test]
fn given_non_string_type_when_supplying_then_tree_is_rejected() {
    let err = JsonSource.supply(r#"{"type": 42}"#).unwrap_err();
    assert!(matches!(err, AstViewError::InvalidTree(_)));
}
