//! Markdown format tests
//!
//! Import goes through the combinator grammar, export writes the same dialect back.

mod export;
mod import;
