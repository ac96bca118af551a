// ==========================================
// Stockwatch - Flexible Date Normalizer
// ==========================================
// Best-effort parsing of heterogeneous, possibly mixed, textual
// date representations into a canonical timestamp. Failure is an
// explicit None marker, never an error and never a substitution.
// Convention: ambiguous day/month resolves month-first (03/04/2026
// is March 4th), matching US-style inputs.
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};

/// Datetime formats tried first, in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Date-only formats tried next; they resolve to midnight.
/// Slash/dash forms with a leading day are intentionally absent:
/// the ambiguity convention is month-first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%m/%d/%y",
    "%Y%m%d",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

pub struct DateParser;

impl DateParser {
    /// Parse one raw date cell. Whitespace is trimmed first.
    pub fn parse_flexible(value: &str) -> Option<NaiveDateTime> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }

        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
                return Some(dt);
            }
        }

        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
                return date.and_hms_opt(0, 0, 0);
            }
        }

        None
    }

    /// Normalize a whole column of raw date strings. Output is
    /// parallel to the input; unparseable entries stay visible as
    /// None so callers can count and sample them.
    pub fn parse_column(values: &[String]) -> Vec<Option<NaiveDateTime>> {
        values.iter().map(|v| Self::parse_flexible(v)).collect()
    }
}
