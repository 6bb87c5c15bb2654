//! Markdown serialization (document → Markdown)

use marklet_core::{Block, Document, Inline, ListItem};

/// Serialize a document to Markdown, blocks separated by one blank line.
pub fn serialize_to_markdown(doc: &Document) -> String {
    let blocks: Vec<String> = doc.blocks.iter().map(serialize_block).collect();
    blocks.join("\n\n")
}

fn serialize_block(block: &Block) -> String {
    match block {
        Block::Header(header) => format!(
            "{} {}",
            "#".repeat(header.level),
            serialize_inlines(&header.content)
        ),
        Block::UnorderedList(items) => serialize_list(items, |_| "*".to_string()),
        Block::OrderedList(items) => serialize_list(items, |index| format!("{}.", index + 1)),
        Block::Paragraph(content) => serialize_inlines(content),
    }
}

fn serialize_list(items: &[ListItem], marker: impl Fn(usize) -> String) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{} {}", marker(index), serialize_inlines(&item.content)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn serialize_inlines(content: &[Inline]) -> String {
    let mut out = String::new();
    for inline in content {
        write_inline(inline, &mut out);
    }
    out
}

fn write_inline(inline: &Inline, out: &mut String) {
    match inline {
        Inline::Text(text) => out.push_str(text),
        Inline::Bold(content) => {
            out.push_str("**");
            content.iter().for_each(|inner| write_inline(inner, out));
            out.push_str("**");
        }
        Inline::Italic(content) => {
            out.push('*');
            content.iter().for_each(|inner| write_inline(inner, out));
            out.push('*');
        }
        Inline::Link(link) => {
            out.push('[');
            out.push_str(&link.label);
            out.push_str("](");
            out.push_str(&link.href);
            match &link.hint {
                Some(hint) if hint.contains('"') => {
                    out.push(' ');
                    out.push_str(hint);
                }
                Some(hint) => {
                    out.push_str(" \"");
                    out.push_str(hint);
                    out.push('"');
                }
                None => {}
            }
            out.push(')');
        }
    }
}
