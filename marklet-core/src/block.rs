//! Block grammar: headers, lists and paragraphs
//!
//! Blocks are tried in the order header, unordered list, ordered list, paragraph. The paragraph
//! rule accepts any non-empty inline content, so it has to come last. Each block may be followed
//! by any number of line breaks, which belong to no block.
//!
//! List items run to the end of their line. After an item, one line break is consumed unless it
//! opens a paragraph boundary, so consecutive item lines form one list and a blank line ends it.

use crate::ast::{Block, Header, ListItem};
use crate::combinator::{char, many, many_while, map, or, pass, peek, sat, seq, within, Parser, Success};
use crate::inline::content;
use crate::lines::{is_not_paragraph_boundary, line_break, soft_line_break, until_line_break};

/// `#` repeated `level` times, at least one space, then the rest of the line.
pub fn header<'a>() -> impl Parser<'a, Block> {
    |input: &'a str| {
        let Success {
            value: hashes,
            rest,
        } = many(char('#'), 1, 0).parse(input)?;
        let Success { rest, .. } = many(char(' '), 1, 0).parse(rest)?;
        let Success {
            value: inlines,
            rest,
        } = within(until_line_break(), content()).parse(rest)?;
        Some(Success::new(
            Block::Header(Header::new(hashes.len(), inlines)),
            rest,
        ))
    }
}

/// `marker`, at least one space, the rest of the line and a soft line break.
fn list_item<'a, M, P>(marker: P) -> impl Parser<'a, ListItem>
where
    P: Parser<'a, M>,
{
    let line = pass(until_line_break(), soft_line_break());
    let item = seq(pass(marker, many(char(' '), 1, 0)), line);
    map(within(item, content()), ListItem::new)
}

/// Consecutive items of one list, up to the next paragraph boundary.
fn list_items<'a, M, P>(marker: P) -> impl Parser<'a, Vec<ListItem>>
where
    P: Parser<'a, M>,
{
    many_while(list_item(marker), 1, 0, is_not_paragraph_boundary)
}

pub fn unordered_list<'a>() -> impl Parser<'a, Block> {
    let start = peek(|text: &str| text.starts_with("* "));
    map(seq(start, list_items(char('*'))), Block::UnorderedList)
}

pub fn ordered_list<'a>() -> impl Parser<'a, Block> {
    let marker = pass(many(sat(|c| c.is_ascii_digit()), 1, 0), char('.'));
    map(
        seq(peek(starts_with_ordered_marker), list_items(marker)),
        Block::OrderedList,
    )
}

/// Digits, `.` and a space. The number itself carries no meaning.
fn starts_with_ordered_marker(text: &str) -> bool {
    let after_digits = text.trim_start_matches(|c: char| c.is_ascii_digit());
    after_digits.len() < text.len() && after_digits.starts_with(". ")
}

/// Inline content up to the next paragraph boundary. Fails unless it consumes something.
pub fn paragraph<'a>() -> impl Parser<'a, Block> {
    let inlines = content();
    move |input: &'a str| {
        let Success { value, rest } = inlines.parse(input)?;
        if rest.len() == input.len() {
            return None;
        }
        Some(Success::new(Block::Paragraph(value), rest))
    }
}

/// Any one block.
pub fn block<'a>() -> impl Parser<'a, Block> {
    let alternatives = or(or(or(header(), unordered_list()), ordered_list()), paragraph());
    move |input: &'a str| {
        let success = alternatives.parse(input)?;
        tracing::trace!(
            kind = success.value.kind(),
            consumed = input.len() - success.rest.len(),
            "block"
        );
        Some(success)
    }
}

/// Every block in order, each followed by any line breaks.
pub fn blocks<'a>() -> impl Parser<'a, Vec<Block>> {
    many(pass(block(), many(line_break(), 0, 0)), 0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Inline, Link};

    fn text(value: &str) -> Inline {
        Inline::text(value)
    }

    fn item(content: Vec<Inline>) -> ListItem {
        ListItem::new(content)
    }

    #[test]
    fn test_header_levels() {
        assert_eq!(
            header().parse("# Header1"),
            Some(Success::new(
                Block::Header(Header::new(1, vec![text("Header1")])),
                ""
            ))
        );
        assert_eq!(
            header().parse("## Header2"),
            Some(Success::new(
                Block::Header(Header::new(2, vec![text("Header2")])),
                ""
            ))
        );
    }

    #[test]
    fn test_header_stops_at_line_break() {
        assert_eq!(
            header().parse("# Header1\n\ngo on"),
            Some(Success::new(
                Block::Header(Header::new(1, vec![text("Header1")])),
                "\n\ngo on"
            ))
        );
    }

    #[test]
    fn test_header_with_inline_content() {
        let parsed = header().parse("### A *fine* [day](href)").unwrap();
        assert_eq!(
            parsed.value,
            Block::Header(Header::new(
                3,
                vec![
                    text("A "),
                    Inline::Italic(vec![text("fine")]),
                    text(" "),
                    Inline::Link(Link::new("href", "day", None)),
                ]
            ))
        );
    }

    #[test]
    fn test_header_rejections() {
        assert!(header().parse("Defected Header").is_none());
        assert!(header().parse("#NoSpace").is_none());
        assert!(header().parse("#  \nnext").is_none());
    }

    #[test]
    fn test_unordered_list_items() {
        let parsed = unordered_list()
            .parse("* First\n*   Second\n* *Third* item")
            .unwrap();
        assert_eq!(
            parsed.value,
            Block::UnorderedList(vec![
                item(vec![text("First")]),
                item(vec![text("Second")]),
                item(vec![Inline::Italic(vec![text("Third")]), text(" item")]),
            ])
        );
        assert_eq!(parsed.rest, "");
    }

    #[test]
    fn test_unordered_list_requires_marker_space() {
        assert!(unordered_list().parse("*emphasis*").is_none());
        assert!(unordered_list().parse("plain").is_none());
    }

    #[test]
    fn test_unordered_list_ends_at_paragraph_boundary() {
        let parsed = unordered_list().parse("* one\n* two\n\n* three").unwrap();
        assert_eq!(
            parsed.value,
            Block::UnorderedList(vec![item(vec![text("one")]), item(vec![text("two")])])
        );
        assert_eq!(parsed.rest, "\n\n* three");
    }

    #[test]
    fn test_ordered_list_ignores_numbers() {
        let parsed = ordered_list()
            .parse("1. First\n11111.   Second\n2. *Third* item")
            .unwrap();
        assert_eq!(
            parsed.value,
            Block::OrderedList(vec![
                item(vec![text("First")]),
                item(vec![text("Second")]),
                item(vec![Inline::Italic(vec![text("Third")]), text(" item")]),
            ])
        );
        assert_eq!(parsed.rest, "");
    }

    #[test]
    fn test_ordered_list_requires_marker_space() {
        assert!(ordered_list().parse("1.5 percent").is_none());
        assert!(ordered_list().parse(". item").is_none());
        assert!(ordered_list().parse("2024 was a year").is_none());
    }

    #[test]
    fn test_ordered_marker_lookahead() {
        assert!(starts_with_ordered_marker("1. x"));
        assert!(starts_with_ordered_marker("42. x"));
        assert!(!starts_with_ordered_marker("1.x"));
        assert!(!starts_with_ordered_marker(". x"));
    }

    #[test]
    fn test_paragraph_keeps_soft_line_break() {
        assert_eq!(
            paragraph().parse("a\nb"),
            Some(Success::new(Block::Paragraph(vec![text("a\nb")]), ""))
        );
    }

    #[test]
    fn test_paragraph_must_consume() {
        assert!(paragraph().parse("").is_none());
        assert!(paragraph().parse("\n\nnext").is_none());
    }

    #[test]
    fn test_block_order_prefers_lists_over_paragraphs() {
        let parsed = block().parse("* item").unwrap();
        assert_eq!(parsed.value.kind(), "unordered-list");
        let parsed = block().parse("*item*").unwrap();
        assert_eq!(parsed.value.kind(), "paragraph");
    }

    #[test]
    fn test_blocks_split_on_blank_lines() {
        let parsed = blocks().parse("a\n\nb").unwrap();
        assert_eq!(
            parsed.value,
            vec![
                Block::Paragraph(vec![text("a")]),
                Block::Paragraph(vec![text("b")]),
            ]
        );
        assert_eq!(parsed.rest, "");
    }

    #[test]
    fn test_blocks_accept_crlf() {
        let parsed = blocks().parse("# Title\r\n\r\n* one\r\n* two").unwrap();
        assert_eq!(
            parsed.value,
            vec![
                Block::Header(Header::new(1, vec![text("Title")])),
                Block::UnorderedList(vec![item(vec![text("one")]), item(vec![text("two")])]),
            ]
        );
        assert_eq!(parsed.rest, "");
    }

    #[test]
    fn test_unclosed_spans_end_at_blank_line() {
        let parsed = blocks().parse("*a\n\nb*").unwrap();
        assert_eq!(
            parsed.value,
            vec![
                Block::Paragraph(vec![text("*a")]),
                Block::Paragraph(vec![text("b*")]),
            ]
        );

        let parsed = blocks().parse("[a\n\nb](c)").unwrap();
        assert_eq!(
            parsed.value,
            vec![
                Block::Paragraph(vec![text("[a")]),
                Block::Paragraph(vec![text("b](c)")]),
            ]
        );
    }

    #[test]
    fn test_text_after_unclosed_span_is_kept() {
        let parsed = blocks().parse("x *a [l](h)\n\nlost text* y").unwrap();
        assert_eq!(
            parsed.value,
            vec![
                Block::Paragraph(vec![
                    text("x *a "),
                    Inline::Link(Link::new("h", "l", None)),
                ]),
                Block::Paragraph(vec![text("lost text* y")]),
            ]
        );
        assert_eq!(parsed.rest, "");

        let parsed = blocks().parse("**a\n\nb**").unwrap();
        assert_eq!(parsed.value.len(), 2);
        assert_eq!(parsed.rest, "");
        assert!(matches!(
            &parsed.value[1],
            Block::Paragraph(inlines) if inlines.contains(&text("b"))
        ));
    }
}
