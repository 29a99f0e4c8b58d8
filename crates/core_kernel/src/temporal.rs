//! Timestamp parsing with a UTC-only policy
//!
//! Source systems submit timestamps in several shapes: full RFC 3339, naive
//! datetimes, and bare dates. Values without an explicit offset are assumed
//! to be UTC so that every parsed timestamp carries one.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemporalError {
    #[error("unparsable timestamp: {0}")]
    Unparsable(String),
}

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parses a submitted-at value into a UTC timestamp.
///
/// Accepts RFC 3339 timestamps, offset-less datetimes (`T` or space
/// separated, with optional fractional seconds), and bare dates. Naive
/// values are assumed UTC; bare dates resolve to midnight.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, TemporalError> {
    let text = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Space-separated timestamps with an explicit offset
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%z") {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            let midnight = date.and_hms_opt(0, 0, 0).unwrap();
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    Err(TemporalError::Unparsable(value.to_string()))
}
