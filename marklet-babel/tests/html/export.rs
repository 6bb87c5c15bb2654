//! Export tests for HTML format (document → HTML)

use crate::common::{fixture, md, params};
use marklet_babel::format::Format;
use marklet_babel::formats::html::HtmlFormat;
use marklet_babel::FormatRegistry;

#[test]
fn test_lorem_fragment() {
    let html = HtmlFormat::default()
        .serialize(&md(&fixture("lorem.md")))
        .unwrap();
    assert_eq!(
        html,
        concat!(
            "<h1>Lorem ipsum</h1>",
            "<p>Lorem ipsum dolor sit amet, consectetur adipiscing elit,</p>",
            "<p>sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.</p>",
            "<ul><li>Ut enim ad minim veniam,</li><li>quis nostrud exercitation ullamco</li></ul>",
            "<ol><li>laboris nisi ut aliquip ex ea commodo consequat.</li>",
            "<li>Duis aute irure dolor in reprehenderit</li>",
            "<li>in voluptate velit esse cillum dolore</li></ol>",
            "<p>eu <a href=\"nulla\" title=\"pariatur\">fugiat</a>. Excepteur <i>sint</i> ",
            "occaecat cupidatat <b>non proident</b>,</p>",
            "<p>sunt in culpa qui officia deserunt mollit anim id est laborum.</p>",
        )
    );
}

#[test]
fn test_fragment_matches_core_projection() {
    let source = fixture("kitchensink.md");
    let html = HtmlFormat::default().serialize(&md(&source)).unwrap();
    assert_eq!(html, marklet_core::parse_to_html(source.as_str()));
}

#[test]
fn test_link_title_only_with_hint() {
    let html = HtmlFormat::default()
        .serialize(&md(&fixture("kitchensink.md")))
        .unwrap();
    assert!(html.contains("<a href=\"http://example.org\">link</a>"));
    assert!(html.contains("<a href=\"http://example.org/docs\" title=\"The docs\">hinted link</a>"));
    assert!(html.contains(
        "<a href=\"http://example.org/faq\" title=\"frequently asked\">loose hint</a>"
    ));
}

#[test]
fn test_standalone_through_registry() {
    let registry = FormatRegistry::default();
    let doc = md("# Notes\n\nbody");
    let html = registry
        .write(
            &doc,
            "html",
            &params(&[("standalone", "true"), ("title", "My <notes>")]),
        )
        .unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>My &lt;notes&gt;</title>"));
    assert!(html.contains("<h1>Notes</h1><p>body</p>"));
}

#[test]
fn test_text_is_not_escaped() {
    let html = HtmlFormat::default().serialize(&md("a < b & c")).unwrap();
    assert_eq!(html, "<p>a < b & c</p>");
}
