//! Time related utils.
//!
//! Signing timestamps always have second precision and are rendered in UTC.

use crate::{Error, Result};
use chrono::{NaiveDateTime, Timelike, Utc};

/// DateTime is the UTC timestamp used across urlsign.
pub type DateTime = chrono::DateTime<Utc>;

/// Date format: "20240101"
const DATE: &str = "%Y%m%d";

/// Time format for ISO 8601 basic format: "20240101T000000Z"
const ISO8601: &str = "%Y%m%dT%H%M%SZ";

/// Create a new DateTime for now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Drop the sub-second part of the given time.
pub fn truncate_to_seconds(t: DateTime) -> DateTime {
    t.with_nanosecond(0).unwrap_or(t)
}

/// Format time into date: `20240101`
pub fn format_date(t: DateTime) -> String {
    t.format(DATE).to_string()
}

/// Format time into ISO 8601 basic format: `20240101T000000Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format(ISO8601).to_string()
}

/// Parse time from ISO 8601 basic format: `20240101T000000Z`
pub fn parse_iso8601(s: &str) -> Result<DateTime> {
    NaiveDateTime::parse_from_str(s, ISO8601)
        .map(|t| t.and_utc())
        .map_err(|e| {
            Error::unexpected(format!("parse '{s}' into iso8601 time failed")).with_source(e)
        })
}

/// Parse time from RFC 3339: `2024-01-01T00:00:00Z`
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            Error::unexpected(format!("parse '{s}' into rfc3339 time failed")).with_source(e)
        })
}
