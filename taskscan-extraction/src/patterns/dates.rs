//! Due-date patterns and the resolution policy.
//!
//! An ordered pattern list is scanned until one matches. Once any pattern
//! matches, the literal relative-date checks run in their own fixed priority
//! order regardless of which pattern produced the match; only when none of
//! the literals is present does the matching pattern's capture get parsed
//! into a calendar date. A missing or unparseable capture moves on to the
//! next pattern instead of aborting.
//!
//! Two consequences of that policy are deliberate: the weekday pattern has
//! no capture group, so it can only resolve through a literal also being
//! present; and "in N days/weeks" captures a bare number that never parses,
//! so numeric offsets match without producing a date.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use regex::Regex;
use std::sync::LazyLock;

/// A compiled due-date pattern.
pub struct DatePattern {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! date_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Relative-day keywords ──────────────────────────────────────────────────
date_pattern!(
    RE_RELATIVE,
    r"(?:tomorrow|today|next week|next month|this weekend|this week|this month)"
);

// ── Explicit dates with month names, either ordering ──────────────────────
date_pattern!(
    RE_MONTH_NAME,
    r"(?:in|on|by|before|after)\s+((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+\d{1,2}(?:st|nd|rd|th)?,?\s+\d{4}|\d{1,2}(?:st|nd|rd|th)?\s+(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+\d{4})"
);

// ── Numeric dates M/D/YYYY ─────────────────────────────────────────────────
date_pattern!(RE_NUMERIC, r"(?:in|on|by|before|after)\s+(\d{1,2}/\d{1,2}/\d{4})");

// ── Days of the week (no capture group) ────────────────────────────────────
date_pattern!(
    RE_WEEKDAY,
    r"(?:on|this|next)\s+(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)"
);

// ── Numeric offsets (captures only the number) ─────────────────────────────
date_pattern!(RE_OFFSET, r"(?:in|after)\s+(\d+)\s+(?:days?|weeks?|months?|years?)");

// Ordinal suffix on a day number: "15th" -> "15".
static RE_ORDINAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})(?:st|nd|rd|th)\b").ok());

/// All date patterns in evaluation order.
pub fn all_patterns() -> Vec<DatePattern> {
    vec![
        DatePattern {
            name: "relative_day",
            regex: &RE_RELATIVE,
        },
        DatePattern {
            name: "month_name",
            regex: &RE_MONTH_NAME,
        },
        DatePattern {
            name: "numeric",
            regex: &RE_NUMERIC,
        },
        DatePattern {
            name: "weekday",
            regex: &RE_WEEKDAY,
        },
        DatePattern {
            name: "offset",
            regex: &RE_OFFSET,
        },
    ]
}

/// Resolve a due date from the normalized text, relative to `today`.
/// Returns `None` when no pattern resolves to a calendar date.
pub fn resolve_due_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    for pattern in all_patterns() {
        let Some(re) = pattern.regex.as_ref() else {
            continue;
        };
        let Some(caps) = re.captures(text) else {
            continue;
        };

        // Literal checks in fixed priority order, independent of which
        // pattern matched.
        if text.contains("tomorrow") {
            return today.checked_add_days(Days::new(1));
        }
        if text.contains("today") {
            return Some(today);
        }
        if text.contains("next week") {
            return today.checked_add_days(Days::new(7));
        }
        if text.contains("next month") {
            // Day-of-month clamps at the shorter month's end.
            return today.checked_add_months(Months::new(1));
        }
        if text.contains("this weekend") {
            return Some(next_saturday(today));
        }

        // Fall back to parsing this pattern's capture.
        match caps.get(1).and_then(|m| parse_explicit(m.as_str())) {
            Some(date) => return Some(date),
            None => continue,
        }
    }
    None
}

/// The upcoming Saturday. On a Sunday that is six days out; on a Saturday
/// it is the same day.
fn next_saturday(today: NaiveDate) -> NaiveDate {
    let days_until = match today.weekday() {
        Weekday::Sun => 6,
        weekday => 6 - weekday.num_days_from_sunday(),
    };
    today
        .checked_add_days(Days::new(u64::from(days_until)))
        .unwrap_or(today)
}

/// Parse a captured explicit date: month-name forms in either ordering
/// (ordinal suffix and comma tolerated) or M/D/YYYY.
fn parse_explicit(raw: &str) -> Option<NaiveDate> {
    let without_commas = raw.replace(',', " ");
    let cleaned = match RE_ORDINAL.as_ref() {
        Some(re) => re.replace_all(&without_commas, "$1").into_owned(),
        None => without_commas,
    };
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    const FORMATS: &[&str] = &["%m/%d/%Y", "%B %d %Y", "%b %d %Y", "%d %B %Y", "%d %b %Y"];
    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
}
