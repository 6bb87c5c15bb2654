//! Shared helpers for format tests.

use marklet_babel::format::Format;
use marklet_babel::formats::markdown::MarkdownFormat;
use marklet_core::Document;
use std::collections::HashMap;
use std::path::PathBuf;

/// Read a file from `tests/fixtures`.
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// Parse Markdown source through the format layer.
pub fn md(source: &str) -> Document {
    MarkdownFormat.parse(source).expect("Should parse markdown")
}

/// Build a parameter map.
pub fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
