//! Common utilities for AST-based formats
//!
//! This module provides shared functionality for formats that dump document nodes,
//! particularly the diagnostic formats treeviz and tag. [`Node`] gives every block, list item
//! and inline a uniform view: a type name, a label, attributes and children.

use marklet_core::{Block, Document, Inline, ListItem};

/// A borrowed view over any node below the document root.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Block(&'a Block),
    Item(&'a ListItem),
    Inline(&'a Inline),
}

impl<'a> Node<'a> {
    /// Top-level nodes of a document.
    pub fn roots(doc: &'a Document) -> Vec<Node<'a>> {
        doc.blocks.iter().map(Node::Block).collect()
    }

    pub fn node_type(&self) -> &'static str {
        match *self {
            Node::Block(Block::Header(_)) => "Header",
            Node::Block(Block::UnorderedList(_)) => "UnorderedList",
            Node::Block(Block::OrderedList(_)) => "OrderedList",
            Node::Block(Block::Paragraph(_)) => "Paragraph",
            Node::Item(_) => "ListItem",
            Node::Inline(Inline::Text(_)) => "Text",
            Node::Inline(Inline::Bold(_)) => "Bold",
            Node::Inline(Inline::Italic(_)) => "Italic",
            Node::Inline(Inline::Link(_)) => "Link",
        }
    }

    /// Literal text carried by the node itself (not by its children).
    pub fn text(&self) -> Option<&'a str> {
        match *self {
            Node::Inline(Inline::Text(text)) => Some(text),
            Node::Inline(Inline::Link(link)) => Some(&link.label),
            _ => None,
        }
    }

    /// A one-line summary for tree views.
    pub fn display_label(&self) -> String {
        match *self {
            Node::Block(Block::Header(header)) => {
                format!("h{} {}", header.level, plain_text(&header.content))
            }
            Node::Block(Block::UnorderedList(items)) | Node::Block(Block::OrderedList(items)) => {
                match items.len() {
                    1 => "1 item".to_string(),
                    n => format!("{n} items"),
                }
            }
            Node::Block(Block::Paragraph(content)) => plain_text(content),
            Node::Item(item) => plain_text(&item.content),
            Node::Inline(Inline::Bold(content)) | Node::Inline(Inline::Italic(content)) => {
                plain_text(content)
            }
            Node::Inline(Inline::Text(text)) => text.clone(),
            Node::Inline(Inline::Link(link)) => format!("{} → {}", link.label, link.href),
        }
    }

    /// Attributes in a stable order.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match *self {
            Node::Block(Block::Header(header)) => vec![("level", header.level.to_string())],
            Node::Inline(Inline::Link(link)) => {
                let mut attrs = vec![("href", link.href.clone())];
                if let Some(hint) = &link.hint {
                    attrs.push(("title", hint.clone()));
                }
                attrs
            }
            _ => Vec::new(),
        }
    }

    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Block(Block::Header(header)) => inline_nodes(&header.content),
            Node::Block(Block::UnorderedList(items)) | Node::Block(Block::OrderedList(items)) => {
                items.iter().map(Node::Item).collect()
            }
            Node::Block(Block::Paragraph(content)) => inline_nodes(content),
            Node::Item(item) => inline_nodes(&item.content),
            Node::Inline(Inline::Bold(content)) | Node::Inline(Inline::Italic(content)) => {
                inline_nodes(content)
            }
            Node::Inline(Inline::Text(_)) | Node::Inline(Inline::Link(_)) => Vec::new(),
        }
    }
}

fn inline_nodes(content: &[Inline]) -> Vec<Node<'_>> {
    content.iter().map(Node::Inline).collect()
}

/// Visible text of inline content with the markup stripped. Line breaks become spaces.
pub fn plain_text(content: &[Inline]) -> String {
    let mut out = String::new();
    collect_text(content, &mut out);
    out.replace("\r\n", " ").replace('\n', " ")
}

fn collect_text(content: &[Inline], out: &mut String) {
    for inline in content {
        match inline {
            Inline::Text(text) => out.push_str(text),
            Inline::Bold(inner) | Inline::Italic(inner) => collect_text(inner, out),
            Inline::Link(link) => out.push_str(&link.label),
        }
    }
}

/// Cut `label` to at most `max_width` characters, marking the cut with `…`.
///
/// A `max_width` of zero disables truncation.
pub fn truncate(label: &str, max_width: usize) -> String {
    if max_width == 0 || label.chars().count() <= max_width {
        return label.to_string();
    }
    let mut cut: String = label.chars().take(max_width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
