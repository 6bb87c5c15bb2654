//! Import tests for Markdown format (Markdown → document)

use crate::common::{fixture, md};
use marklet_core::{Block, Header, Inline, Link, ListItem};

fn kinds(source: &str) -> Vec<&'static str> {
    md(source).blocks.iter().map(Block::kind).collect()
}

#[test]
fn test_lorem_decomposes_into_seven_blocks() {
    assert_eq!(
        kinds(&fixture("lorem.md")),
        vec![
            "header",
            "paragraph",
            "paragraph",
            "unordered-list",
            "ordered-list",
            "paragraph",
            "paragraph",
        ]
    );
}

#[test]
fn test_lorem_mixed_paragraph() {
    let doc = md(&fixture("lorem.md"));
    assert_eq!(
        doc.blocks[5],
        Block::Paragraph(vec![
            Inline::text("eu "),
            Inline::Link(Link::new("nulla", "fugiat", Some("pariatur"))),
            Inline::text(". Excepteur "),
            Inline::Italic(vec![Inline::text("sint")]),
            Inline::text(" occaecat cupidatat "),
            Inline::Bold(vec![Inline::text("non proident")]),
            Inline::text(","),
        ])
    );
}

#[test]
fn test_kitchensink_headers() {
    let doc = md(&fixture("kitchensink.md"));
    let headers: Vec<_> = doc
        .blocks
        .iter()
        .filter_map(|block| match block {
            Block::Header(Header { level, .. }) => Some(*level),
            _ => None,
        })
        .collect();
    assert_eq!(headers, vec![1, 2, 3]);
}

#[test]
fn test_kitchensink_links() {
    let doc = md(&fixture("kitchensink.md"));
    let Block::Paragraph(content) = &doc.blocks[2] else {
        panic!("expected the inline spans paragraph, got {:?}", doc.blocks[2]);
    };
    let links: Vec<_> = content
        .iter()
        .filter_map(|inline| match inline {
            Inline::Link(link) => Some(link.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        links,
        vec![
            Link::new("http://example.org", "link", None),
            Link::new("http://example.org/docs", "hinted link", Some("The docs")),
            Link::new("http://example.org/faq", "loose hint", Some("frequently asked")),
        ]
    );
}

#[test]
fn test_kitchensink_ordered_numbers_ignored() {
    let doc = md(&fixture("kitchensink.md"));
    assert_eq!(
        doc.blocks[5],
        Block::OrderedList(vec![
            ListItem::new(vec![Inline::text("one")]),
            ListItem::new(vec![Inline::text("two")]),
            ListItem::new(vec![Inline::Bold(vec![Inline::text("three")])]),
        ])
    );
}

#[test]
fn test_unclosed_markers_stay_text() {
    let doc = md(&fixture("kitchensink.md"));
    assert_eq!(
        doc.blocks.last(),
        Some(&Block::Paragraph(vec![Inline::text(
            "Unclosed *markers and [brackets stay text."
        )]))
    );
}

#[test]
fn test_crlf_line_endings() {
    let unix = md("# T\n\n* a\n* b\n\ntext");
    let windows = md("# T\r\n\r\n* a\r\n* b\r\n\r\ntext");
    assert_eq!(unix, windows);
}
