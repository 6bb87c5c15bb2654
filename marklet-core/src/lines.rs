//! Line breaks and paragraph boundaries.
//!
//! A line break is `\n` or `\r\n`. Two consecutive line breaks end a block's inline content.

use crate::combinator::{
    item, many_while, or, or_value, peek, recognize, seq, string, Parser,
};

pub fn is_paragraph_boundary(text: &str) -> bool {
    text.starts_with("\n\n") || text.starts_with("\r\n\r\n")
}

pub fn is_not_paragraph_boundary(text: &str) -> bool {
    !is_paragraph_boundary(text)
}

pub fn is_line_break(text: &str) -> bool {
    text.starts_with('\n') || text.starts_with("\r\n")
}

/// A single `\n` or `\r\n`.
pub fn line_break<'a>() -> impl Parser<'a, &'a str> {
    or(string("\n"), string("\r\n"))
}

/// The rest of the current line, at least one character, excluding the line break.
pub fn until_line_break<'a>() -> impl Parser<'a, &'a str> {
    recognize(many_while(item(), 1, 0, |text: &str| !is_line_break(text)))
}

/// Consume one line break unless it opens a paragraph boundary. Always succeeds.
pub fn soft_line_break<'a>() -> impl Parser<'a, &'a str> {
    or_value(seq(peek(is_not_paragraph_boundary), line_break()), "")
}
