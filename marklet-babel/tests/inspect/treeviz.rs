use crate::common::{fixture, md, params};
use insta::assert_snapshot;
use marklet_babel::format::Format;
use marklet_babel::formats::treeviz::{to_treeviz_str, to_treeviz_str_with_width, TreevizFormat};

#[test]
fn test_treeviz_lorem() {
    let doc = md(&fixture("lorem.md"));
    assert_snapshot!(to_treeviz_str_with_width(&doc, 0).trim_end(), @r#"
    ⧉ Document (7 blocks)
    ├─ § h1 Lorem ipsum
    │ └─ ◦ Lorem ipsum
    ├─ ¶ Lorem ipsum dolor sit amet, consectetur adipiscing elit,
    │ └─ ◦ Lorem ipsum dolor sit amet, consectetur adipiscing elit,
    ├─ ¶ sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.
    │ └─ ◦ sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.
    ├─ ☰ 2 items
    │ ├─ • Ut enim ad minim veniam,
    │ │ └─ ◦ Ut enim ad minim veniam,
    │ └─ • quis nostrud exercitation ullamco
    │   └─ ◦ quis nostrud exercitation ullamco
    ├─ № 3 items
    │ ├─ • laboris nisi ut aliquip ex ea commodo consequat.
    │ │ └─ ◦ laboris nisi ut aliquip ex ea commodo consequat.
    │ ├─ • Duis aute irure dolor in reprehenderit
    │ │ └─ ◦ Duis aute irure dolor in reprehenderit
    │ └─ • in voluptate velit esse cillum dolore
    │   └─ ◦ in voluptate velit esse cillum dolore
    ├─ ¶ eu fugiat. Excepteur sint occaecat cupidatat non proident,
    │ ├─ ◦ eu
    │ ├─ ⊕ fugiat → nulla
    │ ├─ ◦ . Excepteur
    │ ├─ 𝐼 sint
    │ │ └─ ◦ sint
    │ ├─ ◦ occaecat cupidatat
    │ ├─ 𝐁 non proident
    │ │ └─ ◦ non proident
    │ └─ ◦ ,
    └─ ¶ sunt in culpa qui officia deserunt mollit anim id est laborum.
      └─ ◦ sunt in culpa qui officia deserunt mollit anim id est laborum.
    "#);
}

#[test]
fn test_treeviz_default_width_truncates() {
    let doc = md(&fixture("lorem.md"));
    let output = to_treeviz_str(&doc);
    assert!(output.contains("├─ ¶ eu fugiat. Excepteur sint occ…\n"));
    assert!(output.contains("│ └─ • quis nostrud exercitation ull…\n"));
}

#[test]
fn test_treeviz_max_width_parameter() {
    let doc = md("* a rather long list item");
    let output = TreevizFormat
        .serialize_with_options(&doc, &params(&[("max-width", "0")]))
        .unwrap();
    assert!(output.contains("• a rather long list item\n"));

    let output = TreevizFormat
        .serialize_with_options(&doc, &params(&[("max-width", "5")]))
        .unwrap();
    assert!(output.contains("• a ra…\n"));
}
