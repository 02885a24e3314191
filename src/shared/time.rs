//! UTC calendar helpers.
//!
//! Every function here is stateless and works in UTC only; callers pass the
//! instants (including "now") they want compared.

use crate::error::PoolviewError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use std::fmt::Write;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// UTC calendar date of an epoch-seconds timestamp.
pub fn date_utc(epoch_secs: i64) -> Result<NaiveDate, PoolviewError> {
    DateTime::<Utc>::from_timestamp(epoch_secs, 0)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| PoolviewError::invalid(format!("timestamp out of range: {epoch_secs}")))
}

/// Week of the year, counted from 1, with weeks starting on Sunday and week 1
/// holding January 1st.
///
/// This is `ceil((days_since_jan1 + weekday_of_jan1 + 1) / 7)`, not ISO-8601:
/// the last days of December and the first days of January belong to
/// different weeks, and week numbers repeat every year.
pub fn week_number(date: NaiveDate) -> u32 {
    let ordinal0 = date.ordinal0();
    let weekday = date.weekday().num_days_from_sunday();
    let jan1_weekday = (weekday + 7 - ordinal0 % 7) % 7;
    (ordinal0 + jan1_weekday + 1).div_ceil(7)
}

/// Zero-based month of the year.
pub fn month_index(date: NaiveDate) -> u32 {
    date.month0()
}

/// Parse a backend timestamp. RFC 3339 strings keep their offset; naive
/// strings are taken as UTC.
pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Render `dt` with a strftime pattern.
pub fn format_utc(dt: &DateTime<Utc>, pattern: &str) -> Result<String, PoolviewError> {
    let mut out = String::new();
    write!(out, "{}", dt.format(pattern))
        .map_err(|_| PoolviewError::invalid(format!("invalid time format: {pattern}")))?;
    Ok(out)
}

/// Human-readable distance between `then` and `now`, e.g. `"3 hours ago"`.
pub fn time_ago(then: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(*then).num_seconds();
    let phrase = relative_phrase(secs.unsigned_abs());
    if secs < 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

fn relative_phrase(secs: u64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 3_600;
    const DAY: u64 = 86_400;
    const MONTH: u64 = 2_629_800;
    const YEAR: u64 = 31_557_600;

    let round = |unit: u64| (secs + unit / 2) / unit;

    if secs <= 44 {
        "a few seconds".to_string()
    } else if secs <= 89 {
        "a minute".to_string()
    } else if round(MINUTE) <= 44 {
        format!("{} minutes", round(MINUTE))
    } else if round(MINUTE) <= 89 {
        "an hour".to_string()
    } else if round(HOUR) <= 21 {
        format!("{} hours", round(HOUR))
    } else if round(HOUR) <= 35 {
        "a day".to_string()
    } else if round(DAY) <= 25 {
        format!("{} days", round(DAY))
    } else if round(DAY) <= 45 {
        "a month".to_string()
    } else if round(MONTH) <= 10 {
        format!("{} months", round(MONTH))
    } else if round(MONTH) <= 17 {
        "a year".to_string()
    } else {
        format!("{} years", round(YEAR).max(2))
    }
}
