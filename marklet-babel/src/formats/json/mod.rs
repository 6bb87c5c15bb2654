//! JSON format: the structural tree as JSON
//!
//! Each block becomes `{"name": .., "props": {..}, "children": [..]}`, text children are bare
//! strings and `props` only appears on nodes that have attributes. The document is the top-level
//! array of block nodes.
//!
//! Parameters
//!
//!     pretty   Indent the output (default `true`). `false` writes a single line.

use crate::error::FormatError;
use crate::format::{flag, reject_unknown, Format};
use marklet_core::Document;
use std::collections::HashMap;

/// Serialize the structural tree of `doc`.
pub fn serialize_to_json(doc: &Document, pretty: bool) -> Result<String, FormatError> {
    let tree = doc.to_structural();
    let json = if pretty {
        serde_json::to_string_pretty(&tree)?
    } else {
        serde_json::to_string(&tree)?
    };
    Ok(json)
}

/// Format implementation for structural JSON
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Structural tree (name, props, children) as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serialize_to_json(doc, true)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        reject_unknown(self.name(), options, &["pretty"])?;
        serialize_to_json(doc, flag(options, "pretty").unwrap_or(true))
    }
}
