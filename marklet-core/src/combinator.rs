//! Parser combinators over string slices
//!
//!     A parser is anything implementing [`Parser`]: a pure function from the remaining input to
//!     either a [`Success`] (the produced value plus the unconsumed suffix) or `None`. Any closure
//!     `Fn(&'a str) -> ParseResult<'a, T>` is a parser, so grammars are built by composing the free
//!     functions in this module (or their fluent counterparts on the trait).
//!
//!     The cursor is the input slice itself. A successful parse hands back a suffix of the slice it
//!     received, and backtracking is just re-running a parser on the slice it started from, so no
//!     combinator allocates to move around the input.
//!
//!     Failure carries no information. There is exactly one way to fail (the rule did not match at
//!     this position), and every alternative recovers from it by retrying against the original
//!     input.
//!
//! Primitives
//!
//!     char, string, item, sat, all, quoted, brackets
//!
//! Combinators
//!
//!     seq, pass, pair, or, map, peek, or_value, many, many_while, recognize, within, repeat

/// A successful parse: the produced value and the input left unconsumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success<'a, T> {
    pub value: T,
    pub rest: &'a str,
}

impl<'a, T> Success<'a, T> {
    pub fn new(value: T, rest: &'a str) -> Self {
        Self { value, rest }
    }

    /// Transform the value, keeping the remaining input.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<'a, U> {
        Success {
            value: f(self.value),
            rest: self.rest,
        }
    }
}

/// `None` means the parser did not match at this position.
pub type ParseResult<'a, T> = Option<Success<'a, T>>;

/// A text-consuming rule producing values of type `T`.
///
/// Implementations must be referentially transparent: parsing the same input twice yields the
/// same result, and `rest` is always a suffix of the input.
pub trait Parser<'a, T> {
    fn parse(&self, input: &'a str) -> ParseResult<'a, T>;

    /// Fluent form of [`map`].
    fn map<U, F>(self, f: F) -> impl Parser<'a, U>
    where
        Self: Sized,
        F: Fn(T) -> U,
    {
        map(self, f)
    }

    /// Fluent form of [`seq`].
    fn seq<U, P>(self, next: P) -> impl Parser<'a, U>
    where
        Self: Sized,
        P: Parser<'a, U>,
    {
        seq(self, next)
    }

    /// Fluent form of [`pass`].
    fn pass<U, P>(self, next: P) -> impl Parser<'a, T>
    where
        Self: Sized,
        P: Parser<'a, U>,
    {
        pass(self, next)
    }

    /// Fluent form of [`or`].
    fn or<P>(self, other: P) -> impl Parser<'a, T>
    where
        Self: Sized,
        P: Parser<'a, T>,
    {
        or(self, other)
    }

    /// Fluent form of [`or_value`].
    fn or_value(self, value: T) -> impl Parser<'a, T>
    where
        Self: Sized,
        T: Clone,
    {
        or_value(self, value)
    }
}

impl<'a, T, F> Parser<'a, T> for F
where
    F: Fn(&'a str) -> ParseResult<'a, T>,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, T> {
        self(input)
    }
}

/// The prefix of `from` that was consumed to reach `to`.
///
/// `to` must be a suffix of `from`, which holds for any `rest` a parser returns.
fn consumed<'a>(from: &'a str, to: &'a str) -> &'a str {
    &from[..from.len() - to.len()]
}

/// Split off the first character, if any.
fn split_first_char(input: &str) -> Option<(char, &str)> {
    let mut chars = input.chars();
    let c = chars.next()?;
    Some((c, chars.as_str()))
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

/// Exactly one character equal to `expected`.
pub fn char<'a>(expected: char) -> impl Parser<'a, char> {
    move |input: &'a str| match split_first_char(input) {
        Some((c, rest)) if c == expected => Some(Success::new(c, rest)),
        _ => None,
    }
}

/// The literal prefix `expected`.
pub fn string<'a>(expected: &'static str) -> impl Parser<'a, &'a str> {
    move |input: &'a str| {
        input
            .strip_prefix(expected)
            .map(|rest| Success::new(consumed(input, rest), rest))
    }
}

/// Any single character.
pub fn item<'a>() -> impl Parser<'a, char> {
    |input: &'a str| split_first_char(input).map(|(c, rest)| Success::new(c, rest))
}

/// One character satisfying `predicate`.
pub fn sat<'a, F>(predicate: F) -> impl Parser<'a, char>
where
    F: Fn(char) -> bool,
{
    move |input: &'a str| match split_first_char(input) {
        Some((c, rest)) if predicate(c) => Some(Success::new(c, rest)),
        _ => None,
    }
}

/// The whole remaining input. Never fails.
pub fn all<'a>() -> impl Parser<'a, &'a str> {
    |input: &'a str| Some(Success::new(input, &input[input.len()..]))
}

/// A run delimited by `quote` on both sides, yielding the text between the quotes.
pub fn quoted<'a>(quote: char) -> impl Parser<'a, &'a str> {
    brackets(quote, quote)
}

/// `open`, everything up to the first `close`, then `close`. Yields the enclosed text and fails
/// when the run is unterminated.
pub fn brackets<'a>(open: char, close: char) -> impl Parser<'a, &'a str> {
    move |input: &'a str| {
        let body = input.strip_prefix(open)?;
        let end = body.find(close)?;
        Some(Success::new(&body[..end], &body[end + close.len_utf8()..]))
    }
}

// ---------------------------------------------------------------------------
// Combinators
// ---------------------------------------------------------------------------

/// Run `first` then `second`, keeping the value of `second`.
pub fn seq<'a, A, B, PA, PB>(first: PA, second: PB) -> impl Parser<'a, B>
where
    PA: Parser<'a, A>,
    PB: Parser<'a, B>,
{
    move |input: &'a str| {
        let Success { rest, .. } = first.parse(input)?;
        second.parse(rest)
    }
}

/// Run `first` then `second`, keeping the value of `first`.
pub fn pass<'a, A, B, PA, PB>(first: PA, second: PB) -> impl Parser<'a, A>
where
    PA: Parser<'a, A>,
    PB: Parser<'a, B>,
{
    move |input: &'a str| {
        let Success { value, rest } = first.parse(input)?;
        let Success { rest, .. } = second.parse(rest)?;
        Some(Success::new(value, rest))
    }
}

/// Run `first` then `second`, keeping both values.
pub fn pair<'a, A, B, PA, PB>(first: PA, second: PB) -> impl Parser<'a, (A, B)>
where
    PA: Parser<'a, A>,
    PB: Parser<'a, B>,
{
    move |input: &'a str| {
        let Success { value: a, rest } = first.parse(input)?;
        let Success { value: b, rest } = second.parse(rest)?;
        Some(Success::new((a, b), rest))
    }
}

/// Ordered choice. `second` runs against the original input when `first` fails, so whatever
/// `first` consumed before failing is discarded.
pub fn or<'a, T, PA, PB>(first: PA, second: PB) -> impl Parser<'a, T>
where
    PA: Parser<'a, T>,
    PB: Parser<'a, T>,
{
    move |input: &'a str| first.parse(input).or_else(|| second.parse(input))
}

/// Transform a successful value.
pub fn map<'a, A, B, P, F>(parser: P, f: F) -> impl Parser<'a, B>
where
    P: Parser<'a, A>,
    F: Fn(A) -> B,
{
    move |input: &'a str| parser.parse(input).map(|success| success.map(&f))
}

/// Zero-width assertion: succeeds without consuming iff `predicate` holds for the input.
pub fn peek<'a, F>(predicate: F) -> impl Parser<'a, ()>
where
    F: Fn(&str) -> bool,
{
    move |input: &'a str| predicate(input).then(|| Success::new((), input))
}

/// On failure, succeed with `value` without consuming anything.
pub fn or_value<'a, T, P>(parser: P, value: T) -> impl Parser<'a, T>
where
    P: Parser<'a, T>,
    T: Clone,
{
    move |input: &'a str| {
        parser
            .parse(input)
            .or_else(|| Some(Success::new(value.clone(), input)))
    }
}

/// [`many_while`] without a stop condition.
pub fn many<'a, T, P>(parser: P, min: usize, max: usize) -> impl Parser<'a, Vec<T>>
where
    P: Parser<'a, T>,
{
    many_while(parser, min, max, |_: &str| true)
}

/// Apply `parser` repeatedly while it matches and `condition` holds for the remaining input
/// (checked before every attempt).
///
/// Succeeds when the number of matches is within `min..=max`, where `0` leaves that end
/// unbounded. A match that consumes nothing is kept but ends the repetition.
pub fn many_while<'a, T, P, C>(parser: P, min: usize, max: usize, condition: C) -> impl Parser<'a, Vec<T>>
where
    P: Parser<'a, T>,
    C: Fn(&str) -> bool,
{
    move |input: &'a str| {
        let mut values = Vec::new();
        let mut rest = input;
        while (max == 0 || values.len() < max) && condition(rest) {
            let Some(Success { value, rest: next }) = parser.parse(rest) else {
                break;
            };
            values.push(value);
            let stalled = next.len() == rest.len();
            rest = next;
            if stalled {
                break;
            }
        }
        if values.len() < min {
            return None;
        }
        Some(Success::new(values, rest))
    }
}

/// The slice of input consumed by `parser`, discarding its value.
pub fn recognize<'a, T, P>(parser: P) -> impl Parser<'a, &'a str>
where
    P: Parser<'a, T>,
{
    move |input: &'a str| {
        let Success { rest, .. } = parser.parse(input)?;
        Some(Success::new(consumed(input, rest), rest))
    }
}

/// Run `inner` over the text captured by `outer`.
///
/// The result carries `inner`'s value and `outer`'s remaining input. `inner` does not have to
/// consume the whole capture.
pub fn within<'a, T, PO, PI>(outer: PO, inner: PI) -> impl Parser<'a, T>
where
    PO: Parser<'a, &'a str>,
    PI: Parser<'a, T>,
{
    move |input: &'a str| {
        let Success {
            value: captured,
            rest,
        } = outer.parse(input)?;
        let Success { value, .. } = inner.parse(captured)?;
        Some(Success::new(value, rest))
    }
}

/// Mixed content: `parser` matches where it can and everything in between becomes text.
///
/// While input remains and `condition` holds, `parser` is tried; when it fails, one character
/// joins the pending text run. Pending text is turned into a value with `wrap_text` before each
/// match and once more at the end. Never fails; the result may be empty.
pub fn repeat<'a, T, P, W, C>(parser: P, wrap_text: W, condition: C) -> impl Parser<'a, Vec<T>>
where
    P: Parser<'a, T>,
    W: Fn(&'a str) -> T,
    C: Fn(&str) -> bool,
{
    move |input: &'a str| {
        let mut values = Vec::new();
        let mut text_start = input;
        let mut rest = input;

        while !rest.is_empty() && condition(rest) {
            match parser.parse(rest) {
                Some(Success { value, rest: next }) if next.len() < rest.len() => {
                    let text = consumed(text_start, rest);
                    if !text.is_empty() {
                        values.push(wrap_text(text));
                    }
                    values.push(value);
                    rest = next;
                    text_start = next;
                }
                _ => {
                    // Not a match here: the character is plain text.
                    rest = split_first_char(rest).map_or(rest, |(_, tail)| tail);
                }
            }
        }

        let text = consumed(text_start, rest);
        if !text.is_empty() {
            values.push(wrap_text(text));
        }
        Some(Success::new(values, rest))
    }
}
