//! Markdown parsing (Markdown → document)

use crate::error::FormatError;
use marklet_core::{parse_document, Document};

/// Parse a Markdown string into a document.
///
/// The grammar never rejects input: text it cannot place ends up as plain paragraph text.
pub fn parse_from_markdown(source: &str) -> Result<Document, FormatError> {
    Ok(parse_document(source))
}
