//! HTML format implementation
//!
//! Serializes documents to HTML. The body is the document's own HTML projection: one element per
//! block, concatenated with no separator, text emitted as-is.
//!
//! # Element Mapping Table
//!
//! | Node          | HTML                                      |
//! |---------------|-------------------------------------------|
//! | Header        | `<hN>`                                    |
//! | UnorderedList | `<ul>` with `<li>` items                  |
//! | OrderedList   | `<ol>` with `<li>` items                  |
//! | Paragraph     | `<p>`                                     |
//! | Bold          | `<b>`                                     |
//! | Italic        | `<i>`                                     |
//! | Link          | `<a href=".." title="..">`, title only with a hint |
//!
//! # Output Format
//!
//! By default the output is the bare fragment. With `standalone` it is wrapped in a complete
//! HTML5 document:
//! - `<title>` from the `title` parameter (escaped)
//! - Embedded CSS from `css/baseline.css`
//! - Body wrapped in `<div class="marklet-document">`
//!
//! Parameters
//!
//!     standalone   Wrap in a complete HTML5 document (default `false`).
//!     title        Document title when standalone (default `Document`).

mod serializer;

pub use serializer::{get_default_css, serialize_to_html, HtmlOptions, DEFAULT_TITLE};

use crate::error::FormatError;
use crate::format::{flag, reject_unknown, Format};
use marklet_core::Document;
use std::collections::HashMap;

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// HTML format producing complete documents
    pub fn standalone() -> Self {
        Self::new(HtmlOptions {
            standalone: true,
            ..HtmlOptions::default()
        })
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment, or a standalone HTML5 document with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_html(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        reject_unknown(self.name(), options, &["standalone", "title"])?;
        let mut html_options = self.options.clone();
        if let Some(standalone) = flag(options, "standalone") {
            html_options.standalone = standalone;
        }
        if let Some(title) = options.get("title") {
            html_options.title = title.clone();
        }
        Ok(serialize_to_html(doc, &html_options))
    }
}
