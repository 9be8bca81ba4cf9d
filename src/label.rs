//! Label content extraction: the short annotation drawn beneath a node's
//! kind text.

use itertools::Itertools;

use crate::node::{AstNode, FieldValue};

/// Annotation text for `node`. Empty string means no label is drawn.
///
/// Call expressions and variable declarators get their target name; every
/// other kind falls back to one `name: value` line per scalar field, in the
/// node's own field order. Object- and sequence-valued fields never appear
/// in label text: they were either consumed as structure or intentionally
/// ignored.
pub fn label_for(node: &AstNode) -> String {
    match node.kind() {
        "CallExpression" => nested_name(node, "callee"),
        "VariableDeclarator" => nested_name(node, "id"),
        _ => node
            .fields()
            .filter_map(|(name, value)| {
                value.as_scalar().map(|s| format!("{}: {}", name, s))
            })
            .join("\n"),
    }
}

fn nested_name(node: &AstNode, field: &str) -> String {
    node.field(field)
        .and_then(FieldValue::as_node)
        .and_then(|inner| inner.scalar_str("name"))
        .unwrap_or_default()
        .to_string()
}
