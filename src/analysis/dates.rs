//! Canonicalization of heterogeneous publication dates to `dd/mm/yyyy`.

use chrono::NaiveDate;

/// Output format for every successfully parsed date.
pub const CANONICAL_FORMAT: &str = "%d/%m/%Y";

/// Result of canonicalizing one date string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalDate {
    pub display: String,
    pub missing: bool,
}

type DateStrategy = fn(&str) -> Option<NaiveDate>;

/// Parse attempts in priority order; the first success wins.
const STRATEGIES: &[DateStrategy] = &[parse_iso, parse_slashed, parse_dashed];

/// `2025-01-28` or `2025-01-28T10:00:00+00:00`.
fn parse_iso(s: &str) -> Option<NaiveDate> {
    let date_part = s.split('T').next().unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn parse_slashed(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}

fn parse_dashed(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d-%m-%Y").ok()
}

/// Parse `raw` with the first matching strategy.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    STRATEGIES.iter().find_map(|strategy| strategy(s))
}

/// Render `raw` as `dd/mm/yyyy`, or `no_date_label` with `missing` set.
pub fn canonicalize_date(raw: &str, no_date_label: &str) -> CanonicalDate {
    match parse_date(raw) {
        Some(date) => CanonicalDate {
            display: date.format(CANONICAL_FORMAT).to_string(),
            missing: false,
        },
        None => CanonicalDate {
            display: no_date_label.to_string(),
            missing: true,
        },
    }
}
