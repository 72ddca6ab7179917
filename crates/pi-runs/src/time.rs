//! Timestamp parsing for run records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Naive layouts accepted when a timestamp carries no offset (read as UTC).
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a run timestamp. Returns `None` for anything unrecognized.
///
/// RFC 3339 is tried first; naive date-times and bare dates are accepted as
/// UTC so that hand-written fixtures behave like API exports.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Milliseconds since the Unix epoch, or `None` if unparseable.
pub fn parse_millis(raw: &str) -> Option<i64> {
    parse_timestamp(raw).map(|dt| dt.timestamp_millis())
}
