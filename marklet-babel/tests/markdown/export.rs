//! Export tests for Markdown format (document → Markdown)

use crate::common::{fixture, md};
use insta::assert_snapshot;
use marklet_babel::format::Format;
use marklet_babel::formats::markdown::MarkdownFormat;
use proptest::prelude::*;

fn to_md(source: &str) -> String {
    MarkdownFormat
        .serialize(&md(source))
        .expect("Should serialize markdown")
}

#[test]
fn test_kitchensink_normalized() {
    assert_snapshot!(to_md(&fixture("kitchensink.md")), @r#"
    # Kitchen sink

    ## Inline spans

    Plain text with **bold**, *italic*, **bold *and italic***, and a [link](http://example.org).
    A [hinted link](http://example.org/docs "The docs") and a [loose hint](http://example.org/faq "frequently asked").

    ### Lists

    * first item
    * second item with *emphasis*
    * third item with [a link](http://example.org)

    1. one
    2. two
    3. **three**

    Unclosed *markers and [brackets stay text.
    "#);
}

#[test]
fn test_fixtures_survive_reparse() {
    for name in ["lorem.md", "kitchensink.md"] {
        let source = fixture(name);
        let doc = md(&source);
        assert_eq!(md(&to_md(&source)), doc, "{name} changed after a round trip");
    }
}

proptest! {
    #[test]
    fn reparse_is_stable(source in "[a-z ]{1,8}(\n(\\* |1\\. |# )?[a-z *]{1,12}){0,6}") {
        let doc = md(&source);
        let again = md(&to_md(&source));
        prop_assert_eq!(again, doc);
    }
}
