//! Chunk classification: decides which builder a blank-line-delimited chunk
//! of source text is routed to.

use regex::Regex;
use std::sync::OnceLock;

use crate::blocks::HeadingLevel;

/// Minimum number of pipe-bearing lines before a chunk counts as a table.
///
/// A single `|` is common in ordinary prose ("option A|B"), so a second
/// corroborating line is required before the table builder runs.
pub const TABLE_MIN_PIPE_LINES: usize = 2;

/// Minimum number of `N. text` lines before a chunk counts as an ordered
/// list. Same tradeoff as [`TABLE_MIN_PIPE_LINES`]: "1. is the first item"
/// can open a perfectly normal sentence.
pub const LIST_MIN_NUMBERED_LINES: usize = 2;

/// Classification of a single chunk. Exactly one kind applies; `Plain` is
/// the total fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Table,
    OrderedList,
    Heading(HeadingLevel),
    Plain,
}

fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(#{3,4})[ \t]+(.+)$").expect("invalid heading regex"))
}

pub(crate) fn numbered_item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s+(.+)$").expect("invalid numbered item regex"))
}

/// Classifies chunks by an ordered list of predicates, first match wins.
pub struct ChunkClassifier;

impl ChunkClassifier {
    /// Decision order: table, ordered list, heading, plain paragraph.
    /// The predicates are mutually exclusive by construction, and `Plain`
    /// makes the classification total.
    pub fn classify(&self, chunk: &str) -> ChunkKind {
        if pipe_line_count(chunk) >= TABLE_MIN_PIPE_LINES {
            return ChunkKind::Table;
        }
        if numbered_line_count(chunk) >= LIST_MIN_NUMBERED_LINES {
            return ChunkKind::OrderedList;
        }
        if let Some((level, _)) = parse_heading(chunk) {
            return ChunkKind::Heading(level);
        }
        ChunkKind::Plain
    }
}

fn pipe_line_count(chunk: &str) -> usize {
    chunk.lines().filter(|line| line.contains('|')).count()
}

fn numbered_line_count(chunk: &str) -> usize {
    chunk
        .lines()
        .filter(|line| numbered_item_re().is_match(line.trim()))
        .count()
}

/// Parses a chunk that consists entirely of one `###`/`####` heading line.
///
/// Multi-line chunks never match: a paragraph that merely *starts* with a
/// heading marker keeps all of its text and falls through to `Plain`.
/// Level-2 headings are stripped from content before chunking and never
/// reach this point.
pub(crate) fn parse_heading(chunk: &str) -> Option<(HeadingLevel, String)> {
    let caps = heading_re().captures(chunk.trim())?;
    let level = HeadingLevel::from_hash_count(caps[1].len())?;
    Some((level, caps[2].trim().to_string()))
}
