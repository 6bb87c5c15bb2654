//! Markdown format implementation
//!
//! This module implements conversion between the compact Markdown dialect and the document tree.
//! Parsing is done by `marklet-core`'s combinator grammar; serialization writes the same dialect
//! back out, so a parse of the serialized text yields the same document.
//!
//! # Element Mapping Table
//!
//! | Node          | Markdown                         | Notes                                     |
//! |---------------|----------------------------------|-------------------------------------------|
//! | Header        | `#` * level, space, content      | Single line                               |
//! | UnorderedList | `* item` lines                   | Any number of spaces after the marker     |
//! | OrderedList   | `N. item` lines                  | Numbers ignored on import, `1.`.. on export |
//! | Paragraph     | Inline content                   | Ends at a blank line                      |
//! | Text          | Plain text                       | No escaping                               |
//! | Bold          | `**bold**`                       |                                           |
//! | Italic        | `*italic*`                       |                                           |
//! | Link          | `[label](href "hint")`           | Unquoted hints run to the closing paren   |
//!
//! # Lossy Conversions
//!
//! - Ordered list numbering is regenerated from 1.
//! - Spacing after list markers and header hashes collapses to a single space.
//! - Runs of blank lines between blocks collapse to one.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use marklet_core::Document;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Compact Markdown: headers, lists, paragraphs, bold, italic and links"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_from_markdown(source)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_markdown(doc))
    }
}
