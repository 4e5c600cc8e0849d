//! Plain-text extraction from entry HTML.
//!
//! Entry bodies arrive as HTML fragments of wildly varying quality. The
//! cleaner strips all markup and collapses whitespace; truncation is
//! character-based because the configured feeds are mostly CJK text where
//! byte budgets would split codepoints.

use scraper::Html;

/// Character budget for the card summary.
pub const SUMMARY_CHARS: usize = 100;
/// Character budget for the extended extract kept for downstream use.
pub const EXTRACT_CHARS: usize = 500;

/// Strip all markup from an HTML fragment, returning trimmed plain text.
///
/// Whitespace runs (including newlines introduced by block elements) are
/// collapsed to single spaces. Empty input yields an empty string.
pub fn clean_html(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    let fragment = Html::parse_fragment(html);
    let text = fragment.root_element().text().collect::<Vec<_>>().join(" ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to at most `budget` characters, appending an ellipsis when
/// anything was cut.
pub fn truncate_chars(s: &str, budget: usize) -> String {
    if s.chars().count() <= budget {
        return s.to_string();
    }
    let mut out: String = s.chars().take(budget).collect();
    out.push('…');
    out
}
