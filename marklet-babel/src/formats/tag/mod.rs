//! XML-like document tag serialization
//!
//! Serializes document nodes directly to an XML-like format.
//!
//! ## Format
//!
//! - Node type → tag name (kebab-case)
//! - Header level, link href and title → attributes
//! - Text and link labels → text content
//! - Children → nested tags (no wrapper)
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <header level="1">
//!     <text>Introduction</text>
//!   </header>
//!   <paragraph>
//!     <text>See </text>
//!     <link href="http://example.org">the site</link>
//!   </paragraph>
//! </document>
//! ```

use super::common::Node;
use crate::error::FormatError;
use crate::format::Format;
use marklet_core::Document;

fn format_node(node: Node<'_>, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    let tag = to_tag_name(node.node_type());

    output.push_str(&indent);
    output.push('<');
    output.push_str(&tag);
    for (key, value) in node.attributes() {
        output.push_str(&format!(" {key}=\"{}\"", escape_xml(&value)));
    }
    output.push('>');
    if let Some(text) = node.text() {
        output.push_str(&escape_xml(text));
    }

    let children = node.children();
    if children.is_empty() {
        output.push_str(&format!("</{tag}>\n"));
        return;
    }

    output.push('\n');
    for child in children {
        format_node(child, indent_level + 1, output);
    }
    output.push_str(&format!("{indent}</{tag}>\n"));
}

/// Convert a node type name to a tag name (e.g., "UnorderedList" → "unordered-list")
fn to_tag_name(node_type: &str) -> String {
    let mut tag = String::new();
    for (i, c) in node_type.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            tag.push('-');
        }
        tag.extend(c.to_lowercase());
    }
    tag
}

/// Serialize a document to tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut result = String::from("<document>\n");
    for root in Node::roots(doc) {
        format_node(root, 1, &mut result);
    }
    result.push_str("</document>");
    result
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Format implementation for XML-like tag format
pub struct TagFormat;

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like tag format with hierarchical structure"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tag", "xml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document(doc))
    }
}
