//! Tree supplier: turns raw textual input into an [`AstNode`] graph.
//!
//! Parsing source text is out of scope; the supplier consumes the JSON form
//! a parser already produced (ESTree-shaped, every node carrying a `type`
//! string). The engine only requires the discriminator plus whatever fields
//! the discovery policy recognizes.

use serde_json::Value;
use tracing::instrument;

use crate::errors::{AstViewError, AstViewResult};
use crate::node::{AstNode, FieldValue, Scalar};

/// Supplies a tree for one textual input, or signals failure.
pub trait TreeSource {
    fn supply(&self, input: &str) -> AstViewResult<AstNode>;
}

/// ESTree-shaped JSON supplier.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSource;

impl TreeSource for JsonSource {
    #[instrument(level = "debug", skip_all)]
    fn supply(&self, input: &str) -> AstViewResult<AstNode> {
        let value: Value = serde_json::from_str(input)?;
        let Value::Object(map) = value else {
            return Err(AstViewError::InvalidTree(
                "root must be a JSON object".to_string(),
            ));
        };
        let root = convert_object(map)?;
        if root.kind().is_empty() {
            return Err(AstViewError::InvalidTree(
                "root node has no `type` discriminator".to_string(),
            ));
        }
        Ok(root)
    }
}

/// Objects become nodes, preserving field order. A missing `type` yields an
/// anonymous node; those are fine below the root (label carriers like
/// `id: {name: "x"}` have no discriminator).
fn convert_object(map: serde_json::Map<String, Value>) -> AstViewResult<AstNode> {
    let mut kind = String::new();
    let mut fields = Vec::new();
    for (name, value) in map {
        if name == "type" {
            match value {
                Value::String(s) => kind = s,
                other => {
                    return Err(AstViewError::InvalidTree(format!(
                        "`type` must be a string, got: {}",
                        other
                    )))
                }
            }
            continue;
        }
        fields.push((name, convert_value(value)?));
    }

    let mut node = AstNode::new(kind);
    for (name, value) in fields {
        node.push_field(name, value);
    }
    Ok(node)
}

fn convert_value(value: Value) -> AstViewResult<FieldValue> {
    Ok(match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Scalar(Scalar::Bool(b)),
        Value::Number(n) => FieldValue::Scalar(Scalar::Num(n)),
        Value::String(s) => FieldValue::Scalar(Scalar::Str(s)),
        Value::Object(map) => FieldValue::Node(Box::new(convert_object(map)?)),
        Value::Array(items) => {
            // Scalar-only arrays are parser annotations (esprima's
            // `range: [0, 10]` and friends), not structure.
            if !items.is_empty() && items.iter().all(|item| !item.is_object()) {
                return Ok(FieldValue::Null);
            }
            let mut nodes = Vec::with_capacity(items.len());
            for item in items {
                let Value::Object(map) = item else {
                    return Err(AstViewError::InvalidTree(format!(
                        "sequence fields may not mix nodes and scalars, got: {}",
                        item
                    )));
                };
                nodes.push(convert_object(map)?);
            }
            FieldValue::Nodes(nodes)
        }
    })
}
