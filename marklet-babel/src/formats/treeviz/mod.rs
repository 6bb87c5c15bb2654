//! Treeviz formatter for document nodes
//!
//! Treeviz is a visual representation of the parsed document, one node per line. It encodes the
//! node structure with box-drawing connectors, two columns per level of nesting.
//!
//! So the format is :
//! <prefix>(per level) <connector> <icon><space><label> (trimmed, then truncated to `max-width` characters)
//!
//! Example:
//!
//! ⧉ Document (3 blocks)
//! ├─ § h1 Lorem ipsum
//! │ └─ ◦ Lorem ipsum
//! ├─ ☰ 2 items
//! │ ├─ • Ut enim ad minim veniam,
//! │ │ └─ ◦ Ut enim ad minim veniam,
//! │ └─ • quis nostrud
//! │   └─ ◦ quis nostrud
//! └─ ¶ eu fugiat. Excepteur sint occ…
//!   ├─ ◦ eu
//!   ├─ ⊕ fugiat → nulla
//!   └─ ◦ . Excepteur
//!
//! Parameters
//!
//!     max-width   Label width before truncation with `…`. Defaults to 30, `0` disables it.

use super::common::{truncate, Node};
use super::icons::get_icon;
use crate::error::FormatError;
use crate::format::{reject_unknown, Format};
use marklet_core::Document;
use std::collections::HashMap;

/// Default label width.
pub const DEFAULT_MAX_WIDTH: usize = 30;

fn format_node(
    node: Node<'_>,
    prefix: &str,
    is_last: bool,
    max_width: usize,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let icon = get_icon(node.node_type());
    let label = truncate(node.display_label().trim(), max_width);
    output.push_str(&format!("{prefix}{connector} {icon} {label}\n"));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(&node.children(), &child_prefix, max_width, output);
}

fn format_children(children: &[Node<'_>], prefix: &str, max_width: usize, output: &mut String) {
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        format_node(*child, prefix, i + 1 == child_count, max_width, output);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_width(doc, DEFAULT_MAX_WIDTH)
}

/// Render `doc`, truncating labels to `max_width` characters (`0` for no limit).
pub fn to_treeviz_str_with_width(doc: &Document, max_width: usize) -> String {
    let blocks = doc.blocks.len();
    let mut output = format!(
        "{} Document ({} block{})\n",
        get_icon("Document"),
        blocks,
        if blocks == 1 { "" } else { "s" }
    );
    format_children(&Node::roots(doc), "", max_width, &mut output);
    output
}

/// Convert a document to treeviz string with optional parameters
pub fn to_treeviz_str_with_params(
    doc: &Document,
    params: &HashMap<String, String>,
) -> Result<String, FormatError> {
    reject_unknown("treeviz", params, &["max-width"])?;
    let max_width = match params.get("max-width") {
        Some(value) => value.parse().map_err(|_| {
            FormatError::SerializationError(format!(
                "max-width must be a non-negative integer, got '{value}'"
            ))
        })?,
        None => DEFAULT_MAX_WIDTH,
    };
    Ok(to_treeviz_str_with_width(doc, max_width))
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        to_treeviz_str_with_params(doc, options)
    }
}
