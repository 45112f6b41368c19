//! Parsing of textual instants.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::RutilsError;

const DATE_TIME_PATTERNS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

const DATE_PATTERNS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y"];

/// Parse an instant from text.
///
/// Accepts a Unix timestamp in seconds, RFC 3339, or a date with optional
/// time (`2024-05-10 12:30`, `10.05.2024`). Values without an offset are
/// taken as UTC.
///
/// ```
/// use rutils::parse_instant;
///
/// let instant = parse_instant("2024-05-10 12:30").unwrap();
/// assert_eq!(instant.to_rfc3339(), "2024-05-10T12:30:00+00:00");
/// assert!(parse_instant("").is_err());
/// ```
pub fn parse_instant(text: &str) -> Result<DateTime<FixedOffset>, RutilsError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RutilsError::invalid("date/time is empty"));
    }

    if let Ok(timestamp) = text.parse::<i64>() {
        return DateTime::from_timestamp(timestamp, 0)
            .map(|instant| instant.fixed_offset())
            .ok_or_else(|| RutilsError::invalid(format!("timestamp {timestamp} is out of range")));
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant);
    }
    if let Some(naive) = DATE_TIME_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(text, pattern).ok())
    {
        return Ok(naive.and_utc().fixed_offset());
    }
    if let Some(date) = DATE_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(text, pattern).ok())
    {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }

    Err(RutilsError::invalid(format!(
        "cannot parse date/time '{text}'"
    )))
}
