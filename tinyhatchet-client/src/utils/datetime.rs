//! 日期时间工具
//!
//! The log API speaks RFC 3339 in both directions: search bounds are sent as
//! RFC 3339 strings and every entry carries an RFC 3339 `timestamp`.

use chrono::{DateTime, SecondsFormat, Utc};

/// Parse an RFC 3339 timestamp (any offset) into UTC.
pub fn parse_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Whether `s` is a valid RFC 3339 timestamp.
pub fn is_rfc3339(s: &str) -> bool {
    parse_rfc3339(s).is_some()
}

/// Format a timestamp the way the server documents it (`2021-06-01T11:22:33Z`).
pub fn format_rfc3339(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
