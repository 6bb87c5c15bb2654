//! Format implementations
//!
//! This module contains all format implementations that convert between
//! text representations and the parsed document.

pub mod common;
pub mod html;
pub mod icons;
pub mod json;
pub mod markdown;
pub mod tag;
pub mod treeviz;

pub use html::{get_default_css, HtmlFormat, HtmlOptions};
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use tag::TagFormat;
pub use treeviz::TreevizFormat;
