//! Tree data model: a discriminator plus an ordered field map.
//!
//! The engine never interprets a node beyond two facets: its `kind`
//! discriminator and its named fields. Which fields count as structure is
//! decided by the discovery policy in [`crate::fields`], not by the node.

use std::fmt;

/// Scalar field value (string, number, or boolean).
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Num(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => write!(f, "{}", s),
            Scalar::Num(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Value held by a named field of an [`AstNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Field present but carrying no structure and no label content: an
    /// explicit null, or a scalar-only sequence annotation.
    Null,
    Scalar(Scalar),
    Node(Box<AstNode>),
    Nodes(Vec<AstNode>),
}

impl FieldValue {
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&AstNode> {
        match self {
            FieldValue::Node(n) => Some(n),
            _ => None,
        }
    }
}

/// One node of the tree being visualized.
///
/// Fields keep the order in which they were supplied; child discovery
/// deliberately ignores that order (see [`crate::fields::CHILD_FIELDS`]),
/// while label extraction preserves it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AstNode {
    kind: String,
    fields: Vec<(String, FieldValue)>,
}

impl AstNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style field append, mainly for constructing trees in tests.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.push_field(name, value);
        self
    }

    pub fn push_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.push((name.into(), value));
    }

    /// The `type` discriminator. Empty for anonymous helper objects that
    /// only exist to carry label content (e.g. an `id: {name: "x"}` value).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Fields in supplied order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Scalar string reachable via `field(name)`, e.g. `callee.name`.
    pub fn scalar_str(&self, name: &str) -> Option<&str> {
        match self.field(name)?.as_scalar()? {
            Scalar::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_duplicate_field_names_when_looking_up_then_first_wins() {
        let node = AstNode::new("Literal")
            .with_field("value", FieldValue::Scalar(Scalar::Bool(true)))
            .with_field("value", FieldValue::Scalar(Scalar::Bool(false)));

        assert_eq!(
            node.field("value"),
            Some(&FieldValue::Scalar(Scalar::Bool(true)))
        );
    }

    #[test]
    fn given_nested_object_when_reading_scalar_str_then_returns_inner_string() {
        let id = AstNode::new("").with_field(
            "name",
            FieldValue::Scalar(Scalar::Str("x".into())),
        );
        let node = AstNode::new("VariableDeclarator")
            .with_field("id", FieldValue::Node(Box::new(id)));

        let inner = node.field("id").and_then(FieldValue::as_node).unwrap();
        assert_eq!(inner.scalar_str("name"), Some("x"));
    }
}
