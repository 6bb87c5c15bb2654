//! Generic tag/attributes/children tree
//!
//! [`StructuralNode`] is the renderer-agnostic projection of a parsed document. Consumers that
//! need a target other than HTML walk this tree instead of the grammar nodes. It serializes to
//! JSON as `{"name": .., "props": {..}, "children": [..]}`, with `props` left out when a node has
//! no attributes and text children written as bare strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An element with a tag name, optional attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub children: Vec<Child>,
}

/// A child of a [`StructuralNode`]: either literal text or a nested element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    Text(String),
    Node(StructuralNode),
}

impl StructuralNode {
    /// An element without attributes.
    pub fn new(name: impl Into<String>, children: Vec<Child>) -> Self {
        Self {
            name: name.into(),
            props: None,
            children,
        }
    }

    /// Add an attribute, creating the attribute map on first use.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn prop(&self, key: &str) -> Option<&str> {
        self.props.as_ref()?.get(key).map(String::as_str)
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<StructuralNode> for Child {
    fn from(node: StructuralNode) -> Self {
        Child::Node(node)
    }
}
