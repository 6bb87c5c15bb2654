//! Document node types
//!
//!     The grammar produces these values directly; nothing mutates them afterwards. Inline and
//!     block nodes are closed enums, and both projections dispatch with a `match`:
//!
//!     | Node          | Structural | HTML                                   |
//!     |---------------|------------|----------------------------------------|
//!     | Text          | bare text  | literal text                           |
//!     | Bold          | b          | `<b>..</b>`                            |
//!     | Italic        | i          | `<i>..</i>`                            |
//!     | Link          | a          | `<a href=".." title="..">label</a>`    |
//!     | Header        | h{level}   | `<h{level}>..</h{level}>`              |
//!     | ListItem      | li         | `<li>..</li>`                          |
//!     | OrderedList   | ol         | `<ol>..</ol>`                          |
//!     | UnorderedList | ul         | `<ul>..</ul>`                          |
//!     | Paragraph     | p          | `<p>..</p>`                            |
//!
//!     Text is emitted as-is in both projections.

use crate::structural::{Child, StructuralNode};
use serde::{Deserialize, Serialize};

/// Text-level content inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
    Link(Link),
}

/// `[label](href hint)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub label: String,
    /// Tooltip. Never `Some("")`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>, label: impl Into<String>, hint: Option<&str>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            hint: hint.filter(|h| !h.is_empty()).map(str::to_string),
        }
    }
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    pub fn to_structural(&self) -> Child {
        match self {
            Inline::Text(text) => Child::Text(text.clone()),
            Inline::Bold(content) => StructuralNode::new("b", structural_children(content)).into(),
            Inline::Italic(content) => {
                StructuralNode::new("i", structural_children(content)).into()
            }
            Inline::Link(link) => {
                let node = StructuralNode::new("a", vec![Child::Text(link.label.clone())])
                    .with_prop("href", link.href.clone());
                match &link.hint {
                    Some(hint) => node.with_prop("title", hint.clone()).into(),
                    None => node.into(),
                }
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Inline::Text(text) => out.push_str(text),
            Inline::Bold(content) => write_element(out, "b", content),
            Inline::Italic(content) => write_element(out, "i", content),
            Inline::Link(link) => {
                out.push_str("<a href=\"");
                out.push_str(&link.href);
                out.push('"');
                if let Some(hint) = &link.hint {
                    out.push_str(" title=\"");
                    out.push_str(hint);
                    out.push('"');
                }
                out.push('>');
                out.push_str(&link.label);
                out.push_str("</a>");
            }
        }
    }
}

/// `#` * level, then inline content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub level: usize,
    pub content: Vec<Inline>,
}

impl Header {
    pub fn new(level: usize, content: Vec<Inline>) -> Self {
        Self { level, content }
    }

    fn tag(&self) -> String {
        format!("h{}", self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub content: Vec<Inline>,
}

impl ListItem {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }

    pub fn to_structural(&self) -> StructuralNode {
        StructuralNode::new("li", structural_children(&self.content))
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, "li", &self.content);
        out
    }
}

/// A top-level structural unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Header(Header),
    UnorderedList(Vec<ListItem>),
    OrderedList(Vec<ListItem>),
    Paragraph(Vec<Inline>),
}

impl Block {
    /// Short name of the block type, used in logs and inspection output.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Header(_) => "header",
            Block::UnorderedList(_) => "unordered-list",
            Block::OrderedList(_) => "ordered-list",
            Block::Paragraph(_) => "paragraph",
        }
    }

    pub fn to_structural(&self) -> StructuralNode {
        match self {
            Block::Header(header) => {
                StructuralNode::new(header.tag(), structural_children(&header.content))
            }
            Block::UnorderedList(items) => StructuralNode::new("ul", list_children(items)),
            Block::OrderedList(items) => StructuralNode::new("ol", list_children(items)),
            Block::Paragraph(content) => StructuralNode::new("p", structural_children(content)),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        match self {
            Block::Header(header) => write_element(&mut out, &header.tag(), &header.content),
            Block::UnorderedList(items) => write_list(&mut out, "ul", items),
            Block::OrderedList(items) => write_list(&mut out, "ol", items),
            Block::Paragraph(content) => write_element(&mut out, "p", content),
        }
        out
    }
}

/// The ordered sequence of blocks a source text decomposes into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// The whole text as one literal paragraph.
    pub fn literal(text: &str) -> Self {
        Self::new(vec![Block::Paragraph(vec![Inline::text(text)])])
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn to_structural(&self) -> Vec<StructuralNode> {
        self.blocks.iter().map(Block::to_structural).collect()
    }

    /// Block HTML concatenated with no separator.
    pub fn to_html(&self) -> String {
        self.blocks.iter().map(Block::to_html).collect()
    }
}

fn structural_children(content: &[Inline]) -> Vec<Child> {
    content.iter().map(Inline::to_structural).collect()
}

fn list_children(items: &[ListItem]) -> Vec<Child> {
    items
        .iter()
        .map(|item| Child::Node(item.to_structural()))
        .collect()
}

fn write_element(out: &mut String, tag: &str, content: &[Inline]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    for inline in content {
        inline.write_html(out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_list(out: &mut String, tag: &str, items: &[ListItem]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    for item in items {
        write_element(out, "li", &item.content);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
