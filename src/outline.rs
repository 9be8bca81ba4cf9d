//! Textual views of a parsed tree: a terminal outline and indented JSON.

use termtree::Tree;

use crate::errors::AstViewResult;
use crate::fields::children_of;
use crate::label::label_for;
use crate::node::AstNode;

/// Terminal outline of the tree, one entry per node reachable via the
/// child discovery policy, labeled `Kind` or `Kind (label)`.
pub fn outline(node: &AstNode) -> Tree<String> {
    let mut text = node.kind().to_string();
    let detail = label_for(node).replace('\n', ", ");
    if !detail.is_empty() {
        text = format!("{} ({})", text, detail);
    }

    let leaves: Vec<_> = children_of(node).into_iter().map(outline).collect();
    Tree::new(text).with_leaves(leaves)
}

/// Indented JSON view of the raw input, the companion display to the
/// diagram.
pub fn pretty_json(input: &str) -> AstViewResult<String> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{FieldValue, Scalar};

    #[test]
    fn given_labeled_child_when_outlining_then_label_appears_in_parentheses() {
        let id = AstNode::new("")
            .with_field("name", FieldValue::Scalar(Scalar::Str("x".into())));
        let declarator = AstNode::new("VariableDeclarator")
            .with_field("id", FieldValue::Node(Box::new(id)));
        let root = AstNode::new("Program")
            .with_field("body", FieldValue::Nodes(vec![declarator]));

        let rendered = outline(&root).to_string();
        assert!(rendered.starts_with("Program"));
        assert!(rendered.contains("VariableDeclarator (x)"));
    }
}
