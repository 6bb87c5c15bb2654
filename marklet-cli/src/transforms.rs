//! Views printed by `marklet inspect`.
//!
//! A transform names a stage and a format:
//!
//! - `ast-*` show the parsed document (`treeviz`, `tag`, or the node model as `json`)
//! - `tree-json` shows the structural tree (name, props, children)
//! - `html` shows the final projection
//!
//! Transforms rendered by a registry format take that format's `--extra-<name>` parameters,
//! e.g. `marklet inspect notes.md ast-treeviz --extra-max-width 0`. `ast-json` takes none.

use crate::cli::Transform;
use marklet_babel::{FormatError, FormatRegistry};
use marklet_core::parse_document;
use std::collections::HashMap;

impl Transform {
    /// The registry format that renders this view, used to find its configured defaults.
    pub fn format(self) -> Option<&'static str> {
        match self {
            Transform::AstTreeviz => Some("treeviz"),
            Transform::AstTag => Some("tag"),
            Transform::TreeJson => Some("json"),
            Transform::Html => Some("html"),
            Transform::AstJson => None,
        }
    }
}

/// Parse `source` and render it as `transform`.
pub fn execute_transform(
    source: &str,
    transform: Transform,
    params: &HashMap<String, String>,
) -> Result<String, FormatError> {
    let doc = parse_document(source);
    tracing::debug!(?transform, blocks = doc.blocks.len(), "inspect");

    match transform.format() {
        Some(format) => FormatRegistry::default().write(&doc, format, params),
        None => {
            if let Some(key) = params.keys().next() {
                return Err(FormatError::NotSupported(format!(
                    "ast-json takes no parameters, got '{key}'"
                )));
            }
            Ok(serde_json::to_string_pretty(&doc)?)
        }
    }
}
