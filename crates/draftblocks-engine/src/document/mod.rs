//! Document-level helpers around the conversion core: outline metadata,
//! chapter-title extraction, and assembly of a full article body from its
//! lead, chapter and summary sources.
//!
//! Everything here is a pure transform over already-loaded text. Locating
//! and naming the source files is the caller's concern.

use log::debug;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::blocks::{Block, HeadingLevel};
use crate::convert::convert_content_to_blocks;

fn outline_title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^# (.+)$").expect("invalid outline title regex"))
}

fn meta_description_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"meta_description:\s*(.+)$").expect("invalid meta regex"))
}

fn chapter_title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^## (.+)$").expect("invalid chapter title regex"))
}

/// Article-level metadata parsed from an outline draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleOutline {
    pub title: String,
    pub meta_description: String,
}

impl ArticleOutline {
    /// Parses outline text: the title comes from a `# ` line, the meta
    /// description from a `meta_description:` line with surrounding double
    /// quotes trimmed. When the same field appears twice the later line
    /// wins. Missing fields stay empty; parsing is total.
    pub fn parse(text: &str) -> Self {
        let mut title = String::new();
        let mut meta_description = String::new();

        for line in text.lines() {
            if let Some(caps) = outline_title_re().captures(line) {
                title = caps[1].trim().to_string();
            } else if let Some(caps) = meta_description_re().captures(line) {
                meta_description = caps[1].trim().trim_matches('"').to_string();
            }
        }

        Self {
            title,
            meta_description,
        }
    }
}

/// Extracts a chapter's title: the first `## ` line of its draft.
pub fn extract_chapter_title(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| chapter_title_re().captures(line))
        .map(|caps| caps[1].trim().to_string())
}

/// One chapter's input to article assembly: an externally supplied title
/// plus the raw draft body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSource {
    pub title: String,
    pub body: String,
}

/// Assembles a full article body: lead blocks, then for each chapter a
/// level-2 title heading followed by the chapter's converted body, then
/// summary blocks. Empty lead or summary text contributes nothing; block
/// order is call order throughout.
pub fn assemble_article(lead: &str, chapters: &[ChapterSource], summary: &str) -> Vec<Block> {
    let mut blocks = convert_content_to_blocks(lead);

    for chapter in chapters {
        blocks.push(Block::heading(HeadingLevel::H2, chapter.title.clone()));
        blocks.extend(convert_content_to_blocks(&chapter.body));
    }

    blocks.extend(convert_content_to_blocks(summary));

    debug!("assembled article with {} chapters into {} blocks", chapters.len(), blocks.len());
    blocks
}
