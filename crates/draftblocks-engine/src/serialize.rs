//! Serialization of a block sequence into the comment-delimited document
//! format the host CMS persists.
//!
//! Each block becomes a `<!-- wp:NAME ATTRS -->` / `<!-- /wp:NAME -->` pair
//! wrapping its rendered HTML. Paragraphs and tables carry no attribute
//! object; headings carry their level and ordered lists carry
//! `{"ordered":true}`.

use serde_json::json;

use crate::blocks::Block;

/// Serializes a block sequence, blocks separated by one blank line.
pub fn serialize_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(serialize_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn serialize_block(block: &Block) -> String {
    let (name, attrs) = match block {
        Block::Heading { level, .. } => ("heading", Some(json!({ "level": level.as_u8() }))),
        Block::Paragraph { .. } => ("paragraph", None),
        Block::Table { .. } => ("table", None),
        Block::OrderedList { .. } => ("list", Some(json!({ "ordered": true }))),
    };

    let html = block.html();
    match attrs {
        Some(attrs) => format!("<!-- wp:{name} {attrs} -->\n{html}\n<!-- /wp:{name} -->"),
        None => format!("<!-- wp:{name} -->\n{html}\n<!-- /wp:{name} -->"),
    }
}
