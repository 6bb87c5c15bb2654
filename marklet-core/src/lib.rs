//! Combinator-based parsing for a compact Markdown dialect
//!
//!     Turns Markdown text into a document tree and, from there, into a generic structural tree
//!     or HTML. Only a small subset of Markdown is understood: headers, unordered and ordered
//!     lists, paragraphs, and inline bold, italic and links. Anything the grammar can't place
//!     stays plain text.
//!
//! Architecture
//!
//!     .
//!     ├── combinator.rs   # Parser trait, primitives and combinators
//!     ├── lines.rs        # Line breaks and paragraph boundaries
//!     ├── inline.rs       # Text, links, bold, italic
//!     ├── block.rs        # Headers, lists, paragraphs, block sequence
//!     ├── ast.rs          # Document node types and their HTML projection
//!     └── structural.rs   # Generic name/props/children tree
//!
//!     Grammars are plain values built from the combinators; nothing is generated and nothing
//!     is shared between calls. Failure is a `None` with no diagnostics: an unterminated
//!     construct looks exactly like an absent one and falls through to the next alternative or
//!     to plain text.
//!
//! Entry points
//!
//!     - [`parse_document`]: the parsed [`Document`].
//!     - [`parse_to_tree`]: one [`StructuralNode`] per block.
//!     - [`parse_to_html`]: block HTML concatenated with no separator.
//!
//!     All three trim the input first. When the blocks don't account for the whole trimmed text,
//!     the text is returned as a single literal paragraph.

pub mod ast;
pub mod block;
pub mod combinator;
pub mod inline;
pub mod lines;
pub mod structural;

pub use ast::{Block, Document, Header, Inline, Link, ListItem};
pub use combinator::{ParseResult, Parser, Success};
pub use structural::{Child, StructuralNode};

/// Parse Markdown text into its blocks.
///
/// Blank input gives an empty document.
pub fn parse_document(text: &str) -> Document {
    let text = text.trim();
    if text.is_empty() {
        return Document::default();
    }

    finish(text, block::blocks().parse(text))
}

/// The document for `text` given what the block grammar made of it.
///
/// The literal fallback can't be reached through [`block::blocks`] today: every block rest
/// starts past its line breaks, and a paragraph consumes anything else.
fn finish(text: &str, parsed: ParseResult<'_, Vec<Block>>) -> Document {
    match parsed {
        Some(Success { value, rest }) if rest.is_empty() => {
            tracing::debug!(blocks = value.len(), "parsed document");
            Document::new(value)
        }
        other => {
            tracing::debug!(
                unparsed = other.map_or(text.len(), |success| success.rest.len()),
                "blocks left input unconsumed, falling back to a literal paragraph"
            );
            Document::literal(text)
        }
    }
}

/// Parse into structural nodes, one per block. `None` and blank input give an empty list.
pub fn parse_to_tree<'a>(text: impl Into<Option<&'a str>>) -> Vec<StructuralNode> {
    text.into()
        .map(parse_document)
        .map(|document| document.to_structural())
        .unwrap_or_default()
}

/// Parse into HTML. `None` and blank input give an empty string.
pub fn parse_to_html<'a>(text: impl Into<Option<&'a str>>) -> String {
    text.into()
        .map(parse_document)
        .map(|document| document.to_html())
        .unwrap_or_default()
}
