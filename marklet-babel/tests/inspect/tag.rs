use crate::common::md;
use insta::assert_snapshot;
use marklet_babel::formats::tag::serialize_document;

#[test]
fn test_tag_mixed_document() {
    let doc = md("## Intro *now*\n\n* one\n* [two](http://x.y \"hint\")\n\nend **bold**");
    assert_snapshot!(serialize_document(&doc), @r#"
    <document>
      <header level="2">
        <text>Intro </text>
        <italic>
          <text>now</text>
        </italic>
      </header>
      <unordered-list>
        <list-item>
          <text>one</text>
        </list-item>
        <list-item>
          <link href="http://x.y" title="hint">two</link>
        </list-item>
      </unordered-list>
      <paragraph>
        <text>end </text>
        <bold>
          <text>bold</text>
        </bold>
      </paragraph>
    </document>
    "#);
}

#[test]
fn test_tag_ordered_list() {
    let doc = md("3. a\n4. b");
    assert_snapshot!(serialize_document(&doc), @r#"
    <document>
      <ordered-list>
        <list-item>
          <text>a</text>
        </list-item>
        <list-item>
          <text>b</text>
        </list-item>
      </ordered-list>
    </document>
    "#);
}
