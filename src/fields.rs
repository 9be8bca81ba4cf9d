//! Child-field discovery policy.
//!
//! Structure is discovered from a fixed allow-list of field names, scanned
//! in allow-list order rather than the node's own field order. The order
//! matters: in a while statement the test must come before the body so the
//! diagram reads as control flow.

use crate::node::{AstNode, FieldValue};

/// Candidate child fields, in scan order.
pub const CHILD_FIELDS: [&str; 11] = [
    "test",
    "body",
    "consequent",
    "alternate",
    "init",
    "declarations",
    "left",
    "right",
    "expression",
    "argument",
    "arguments",
];

/// Ordered children of `node`.
///
/// Missing fields, explicit nulls, and empty sequences contribute nothing.
/// Fields off the allow-list are never structure, even when they hold a
/// nested object.
pub fn children_of(node: &AstNode) -> Vec<&AstNode> {
    let mut children = Vec::new();
    for name in CHILD_FIELDS {
        match node.field(name) {
            Some(FieldValue::Node(child)) => children.push(child.as_ref()),
            Some(FieldValue::Nodes(nodes)) => children.extend(nodes.iter()),
            Some(FieldValue::Null) | Some(FieldValue::Scalar(_)) | None => {}
        }
    }
    children
}

/// Number of nodes reachable from `root` via the discovery policy,
/// including `root` itself.
pub fn node_count(root: &AstNode) -> usize {
    1 + children_of(root)
        .into_iter()
        .map(node_count)
        .sum::<usize>()
}
