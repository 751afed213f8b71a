use crate::error::TimestampError;
use chrono::{DateTime, Datelike, NaiveDateTime, SecondsFormat, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an ISO-8601 timestamp. Values without an offset are taken as UTC.
///
/// The UTC year must fall in 0000-9999, the range [`to_storage`] can encode.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let parsed = parse_any_year(raw.trim())?;
    let year = parsed.year();
    if !(0..=9999).contains(&year) {
        return Err(TimestampError::YearOutOfRange(year));
    }
    Ok(parsed)
}

fn parse_any_year(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(rfc_err) => {
            for format in NAIVE_FORMATS {
                if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                    return Ok(naive.and_utc());
                }
            }
            Err(rfc_err)
        }
    }
}

/// Fixed-width text form used in the `listings` table.
///
/// For years 0000-9999 every value has the same length and is in UTC, so
/// comparing two encoded strings gives the same answer as comparing the
/// instants. [`parse_timestamp`] never yields a year outside that range.
pub fn to_storage(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
