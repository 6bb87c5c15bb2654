use crate::common::{fixture, md, params};
use insta::assert_snapshot;
use marklet_babel::FormatRegistry;
use marklet_core::StructuralNode;

#[test]
fn test_json_matches_core_tree() {
    let source = fixture("lorem.md");
    let registry = FormatRegistry::default();
    let json = registry.write(&md(&source), "json", &params(&[])).unwrap();

    let nodes: Vec<StructuralNode> = serde_json::from_str(&json).unwrap();
    assert_eq!(nodes, marklet_core::parse_to_tree(source.as_str()));
}

#[test]
fn test_json_pretty_layout() {
    let registry = FormatRegistry::default();
    let json = registry
        .write(&md("# A [b](c)"), "json", &params(&[("pretty", "true")]))
        .unwrap();
    assert_snapshot!(json, @r#"
    [
      {
        "name": "h1",
        "children": [
          "A ",
          {
            "name": "a",
            "props": {
              "href": "c"
            },
            "children": [
              "b"
            ]
          }
        ]
      }
    ]
    "#);
}
