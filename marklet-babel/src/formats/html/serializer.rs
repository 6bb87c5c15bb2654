//! HTML serialization (document → HTML)

use marklet_core::Document;

/// Title used for standalone output when none is given.
pub const DEFAULT_TITLE: &str = "Document";

/// Stylesheet embedded in standalone output.
const BASELINE_CSS: &str = include_str!("../../../css/baseline.css");

/// The CSS embedded in standalone documents, as a starting point for custom styling.
pub fn get_default_css() -> &'static str {
    BASELINE_CSS
}

/// Options for HTML serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Wrap the fragment in a complete HTML5 document
    pub standalone: bool,
    /// `<title>` of the standalone document
    pub title: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            standalone: false,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Serialize a document to HTML
pub fn serialize_to_html(doc: &Document, options: &HtmlOptions) -> String {
    let body = doc.to_html();
    if options.standalone {
        wrap_in_document(&body, &options.title)
    } else {
        body
    }
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(body_html: &str, title: &str) -> String {
    let baseline_css = BASELINE_CSS;
    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="marklet">
  <title>{escaped_title}</title>
  <style>
{baseline_css}  </style>
</head>
<body>
<div class="marklet-document">
{body_html}
</div>
</body>
</html>
"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
