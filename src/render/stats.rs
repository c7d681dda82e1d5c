//! Analytics stats bar: totals for the selected board.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::{Date, OffsetDateTime};

use crate::net::types::Thumbnail;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    /// Created in the same calendar month and year as `today`.
    pub this_month: usize,
    pub favorites: usize,
}

/// Count totals over a board's cached thumbnails. Entries with a missing or
/// unparseable `created_at` never count toward `this_month`.
#[must_use]
pub fn compute(thumbnails: &[Thumbnail], today: Date) -> Stats {
    let this_month = thumbnails
        .iter()
        .filter_map(|t| t.created_at.as_deref().and_then(parse_created_at))
        .filter(|created| created.year() == today.year() && created.month() == today.month())
        .count();
    Stats {
        total: thumbnails.len(),
        this_month,
        favorites: thumbnails.iter().filter(|t| t.favorite).count(),
    }
}

/// Parse a backend timestamp: RFC 3339, RFC 3339 without offset (taken as
/// UTC), or RFC 1123 with a `GMT` zone.
#[must_use]
pub fn parse_created_at(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc2822) {
        return Some(parsed);
    }
    if let Some(head) = raw.strip_suffix(" GMT") {
        return OffsetDateTime::parse(&format!("{head} +0000"), &Rfc2822).ok();
    }
    OffsetDateTime::parse(&format!("{raw}Z"), &Rfc3339).ok()
}

/// Today's date (UTC).
#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Stats bar markup. Only numbers and fixed labels; nothing to escape.
#[must_use]
pub fn stats_bar(stats: &Stats) -> String {
    let item = |value: usize, label: &str| {
        format!(r#"<div class="stat"><span class="stat-value">{value}</span><span class="stat-label">{label}</span></div>"#)
    };
    [
        item(stats.total, "Total Thumbnails"),
        item(stats.this_month, "This Month"),
        item(stats.favorites, "Favorites"),
    ]
    .concat()
}
