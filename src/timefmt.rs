//! Publication time normalization.
//!
//! Every article needs an epoch timestamp for sorting and a short display
//! string for the card. Feeds disagree about which of published/updated
//! they populate (and some populate neither), so the policy is: published,
//! else updated, else the current wall clock with a "刚刚" placeholder.
//! Display times are shifted to UTC+8, the timezone of the page's readers.

use chrono::{DateTime, FixedOffset, Utc};

/// Placeholder shown when an entry carries no resolvable time.
pub const FALLBACK_DISPLAY: &str = "刚刚";

const DISPLAY_FORMAT: &str = "%m-%d %H:%M";
const TARGET_OFFSET_HOURS: i32 = 8;

/// Normalize an entry's optional times into `(epoch_seconds, display)`.
///
/// Prefers `published`, falls back to `updated`, and finally to now. The
/// epoch value is taken from the chosen instant and is what the aggregator
/// sorts on; the display string is the instant shifted to UTC+8 and
/// formatted as month-day hour-minute, or [`FALLBACK_DISPLAY`] when
/// neither time was present. Never fails.
pub fn normalize(
    published: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
) -> (i64, String) {
    match published.or(updated) {
        Some(instant) => (instant.timestamp(), format_display(instant)),
        None => (Utc::now().timestamp(), FALLBACK_DISPLAY.to_string()),
    }
}

/// Generation timestamp for the page header, footer, and JSON sidecar,
/// in the same UTC+8 timezone the article dates use.
pub fn generated_at() -> String {
    let offset = FixedOffset::east_opt(TARGET_OFFSET_HOURS * 3600).unwrap();
    Utc::now()
        .with_timezone(&offset)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

fn format_display(instant: DateTime<Utc>) -> String {
    // Offset is a compile-time-known constant; east_opt only fails out of range.
    let offset = FixedOffset::east_opt(TARGET_OFFSET_HOURS * 3600).unwrap();
    instant
        .with_timezone(&offset)
        .format(DISPLAY_FORMAT)
        .to_string()
}
