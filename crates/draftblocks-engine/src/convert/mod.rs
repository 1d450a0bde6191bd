//! The content-to-blocks pipeline.
//!
//! A single pass over raw draft text: level-2 headings are stripped (the
//! assembly layer supplies chapter titles itself), the remainder is split
//! into blank-line-delimited chunks, and each chunk is classified and routed
//! to the matching builder. The whole pass is a pure transform; malformed
//! input degrades to best-effort output, never to an error.

pub mod classify;
pub mod inline;
pub mod list;
pub mod table;

use log::debug;
use regex::Regex;
use std::sync::OnceLock;

use crate::blocks::Block;
use classify::{ChunkClassifier, ChunkKind};
use inline::apply_inline_formatting;
use list::build_list_block;
use table::build_table_block;

fn level2_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^## .+$").expect("invalid level-2 heading regex"))
}

fn chunk_separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // One or more blank (or whitespace-only) lines collapse into a single
    // chunk separator.
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("invalid chunk separator regex"))
}

/// Converts raw draft text into an ordered sequence of typed blocks.
///
/// Chunk order in the output always matches input order. Empty and
/// whitespace-only input produce an empty sequence. A tabular chunk with no
/// surviving data rows produces no block at all; every other chunk produces
/// exactly one.
pub fn convert_content_to_blocks(text: &str) -> Vec<Block> {
    let classifier = ChunkClassifier;
    let stripped = level2_heading_re().replace_all(text, "");

    let mut blocks = Vec::new();
    for chunk in chunk_separator_re().split(stripped.trim()) {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }

        match classifier.classify(chunk) {
            ChunkKind::Table => {
                if let Some(block) = build_table_block(chunk) {
                    blocks.push(block);
                }
            }
            ChunkKind::OrderedList => blocks.push(build_list_block(chunk)),
            ChunkKind::Heading(level) => {
                if let Some((_, text)) = classify::parse_heading(chunk) {
                    blocks.push(Block::heading(level, text));
                }
            }
            ChunkKind::Plain => blocks.push(Block::paragraph(apply_inline_formatting(chunk))),
        }
    }

    debug!("converted {} bytes of draft text into {} blocks", text.len(), blocks.len());
    blocks
}
