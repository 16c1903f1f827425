//! Renders one instant in the formats returned by the time operation.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::fmt::Display;

use crate::domain::output::TimeResult;

/// Formats `now` as unix seconds, ISO-8601, an RFC 7231 UTC string, a long
/// local string and a short `m/d/yyyy, h:mm:ss AM` string.
///
/// `tz` is the zone used for the two local representations.
pub fn describe_instant<Tz>(now: DateTime<Utc>, tz: &Tz) -> TimeResult
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = now.with_timezone(tz);

    TimeResult {
        unix: now.timestamp(),
        iso: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        utc: now.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        local: local.format("%a %b %d %Y %H:%M:%S GMT%z").to_string(),
        formatted: local.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
    }
}
