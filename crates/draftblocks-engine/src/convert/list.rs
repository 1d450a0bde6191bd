//! Builds ordered-list blocks from chunks the classifier marked as
//! numbered lists.

use crate::blocks::Block;
use crate::convert::classify::numbered_item_re;
use crate::convert::inline::apply_inline_formatting;

/// Collects every `N. text` line into one inline-formatted `<li>` item and
/// renders a single `<ol>` block.
///
/// The classifier already guaranteed at least two matching lines, so the
/// zero-items case is unreachable in the pipeline; it still degrades to an
/// empty list block rather than failing.
pub fn build_list_block(chunk: &str) -> Block {
    let items: Vec<String> = chunk
        .lines()
        .filter_map(|line| numbered_item_re().captures(line.trim()))
        .map(|caps| apply_inline_formatting(caps[1].trim()))
        .collect();

    Block::ordered_list(items)
}
