//! Inline text-decoration rules for paragraph and list-item content.
//!
//! Rules are independent substitutions applied in a fixed order, not a
//! recursive parser. Later rules must not re-match text produced by earlier
//! ones: `**bold**` runs before the single-`*` underline rule, which in turn
//! refuses to touch a `*` adjacent to another `*`. Unbalanced or absent
//! markers pass through as literal text; this function never fails.

use regex::Regex;
use std::sync::OnceLock;

fn strong_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("invalid strong regex"))
}

fn mark_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"==([^=]+)==").expect("invalid mark regex"))
}

fn underline_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*[^*]+\*").expect("invalid underline regex"))
}

fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("invalid code regex"))
}

/// Applies the inline decoration rules, in order:
///
/// 1. `**X**` → `<strong>X</strong>`
/// 2. `==X==` → `<mark>X</mark>`
/// 3. `*X*` → `<u>X</u>` (only when neither `*` touches another `*`)
/// 4. `` `X` `` → `<code>X</code>`
/// 5. newline → `<br>`
///
/// No HTML escaping happens here; escaping is the rendering boundary's
/// concern and applies only to heading text and table cells.
pub fn apply_inline_formatting(text: &str) -> String {
    let text = strong_re().replace_all(text, "<strong>$1</strong>");
    let text = mark_re().replace_all(&text, "<mark>$1</mark>");
    let text = apply_underline(&text);
    let text = code_re().replace_all(&text, "<code>$1</code>");
    text.replace('\n', "<br>")
}

/// Single-`*` underline substitution.
///
/// The original rule is written with negative lookaround on both sides;
/// `regex` has no lookaround, so candidate `*X*` matches are checked against
/// their neighbouring bytes by hand. A candidate touching another `*` is
/// left alone.
fn apply_underline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in underline_re().find_iter(text) {
        if text[..m.start()].ends_with('*') || text[m.end()..].starts_with('*') {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        out.push_str("<u>");
        out.push_str(&text[m.start() + 1..m.end() - 1]);
        out.push_str("</u>");
        last = m.end();
    }

    out.push_str(&text[last..]);
    out
}
