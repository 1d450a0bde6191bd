//! Builds table blocks from chunks the classifier marked as tabular.

use regex::Regex;
use std::sync::OnceLock;

use crate::blocks::Block;

fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\|\s*[-:]+\s*\|").expect("invalid separator regex"))
}

/// Parses a tabular chunk into header/body rows and renders a table block.
///
/// Lines without a pipe are discarded. A `|---|---|` separator line marks
/// the table as having a header row but contributes no data itself; when one
/// was seen, the first collected row is lifted out as the header. All empty
/// cells are dropped, so leading and trailing pipes produce no phantom
/// columns.
///
/// Returns `None` when no data rows survive — the pipeline emits nothing
/// for the chunk in that case.
pub fn build_table_block(chunk: &str) -> Option<Block> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut has_header = false;

    for line in chunk.lines() {
        let line = line.trim();
        if line.is_empty() || !line.contains('|') {
            continue;
        }
        if separator_re().is_match(line) {
            has_header = true;
            continue;
        }

        let cells: Vec<String> = line
            .split('|')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(String::from)
            .collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    if rows.is_empty() {
        return None;
    }

    let header = if has_header { Some(rows.remove(0)) } else { None };
    Some(Block::table(header, rows))
}
