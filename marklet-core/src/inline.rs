//! Inline grammar: links, bold, italic, and the plain text between them
//!
//! Precedence
//!
//!     Inline alternatives are tried in the order link, bold, italic. Bold has to run before
//!     italic: a leading `**` read by the italic rule would open an empty italic span and leave a
//!     stray `*` behind. The delimiter scans below are the other half of the disambiguation.
//!     While collecting italic content, a `*` only closes the span when it is not the start of
//!     `**`; while collecting bold content, `**` only closes the span when it is not the start
//!     of `***`. So `**bold *italic***` closes the italic on the first star of the final run and
//!     the bold on the last two.
//!
//! Nesting
//!
//!     Delimited content is captured first and then re-parsed: bold content over link-or-italic,
//!     italic content over links only. Bold never nests inside bold.
//!
//! Links
//!
//!     `[label](target)`, where the target is a run of non-space characters (the href),
//!     optional spaces, and then a hint: either a `"quoted hint"` or the entire remainder of the
//!     target. The label is taken verbatim.

use crate::ast::{Inline, Link};
use crate::combinator::{
    all, char, item, many, many_while, map, or, pair, pass, quoted, recognize, repeat, sat, seq,
    string, within, Parser, Success,
};
use crate::lines::is_not_paragraph_boundary;

/// Inline content up to the next paragraph boundary: link, bold and italic spans with the
/// characters in between accumulated into text nodes.
pub fn content<'a>() -> impl Parser<'a, Vec<Inline>> {
    content_of(or(or(link(), bold()), italic()))
}

/// Mixed content over the given span parser.
fn content_of<'a, P>(span: P) -> impl Parser<'a, Vec<Inline>>
where
    P: Parser<'a, Inline>,
{
    repeat(span, Inline::text, is_not_paragraph_boundary)
}

pub fn link<'a>() -> impl Parser<'a, Inline> {
    |input: &'a str| {
        let Success { value: label, rest } = bracketed('[', ']').parse(input)?;
        let Success {
            value: target,
            rest,
        } = bracketed('(', ')').parse(rest)?;
        let Success {
            value: (href, hint),
            ..
        } = link_target().parse(target)?;
        Some(Success::new(
            Inline::Link(Link::new(href, label, Some(hint))),
            rest,
        ))
    }
}

/// `open`, the text up to the first `close`, then `close`. Fails at a paragraph boundary.
fn bracketed<'a>(open: char, close: char) -> impl Parser<'a, &'a str> {
    let body = recognize(many_while(
        sat(move |c| c != close),
        0,
        0,
        is_not_paragraph_boundary,
    ));
    pass(seq(char(open), body), char(close))
}

/// `href`, then `hint` (possibly empty).
fn link_target<'a>() -> impl Parser<'a, (&'a str, &'a str)> {
    let href = recognize(many(sat(|c| c != ' '), 0, 0));
    let hint = seq(many(char(' '), 0, 0), or(quoted('"'), all()));
    pair(href, hint)
}

pub fn italic<'a>() -> impl Parser<'a, Inline> {
    map(
        within(delimited("*", "**"), content_of(link())),
        Inline::Italic,
    )
}

pub fn bold<'a>() -> impl Parser<'a, Inline> {
    map(
        within(delimited("**", "***"), content_of(or(link(), italic()))),
        Inline::Bold,
    )
}

/// `delimiter`, the raw text up to the closing `delimiter`, then the closing `delimiter`.
///
/// A position starting with `longer` never closes the span; that run belongs to the content.
/// Spans do not cross a paragraph boundary.
fn delimited<'a>(delimiter: &'static str, longer: &'static str) -> impl Parser<'a, &'a str> {
    let inside = move |text: &str| {
        is_not_paragraph_boundary(text) && (!text.starts_with(delimiter) || text.starts_with(longer))
    };
    let body = recognize(many_while(item(), 0, 0, inside));
    pass(seq(string(delimiter), body), string(delimiter))
}
