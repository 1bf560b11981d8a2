//! Try-parse helpers: every conversion yields a value or `None`, never an error.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

/// Zone markers MediaInfo puts around encoded dates ("UTC 2010-03-20 ...").
static ZONE_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)utc |z ").expect("zone marker pattern is valid"));

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f %z", "%Y-%m-%dT%H:%M:%S%.f%z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
];

/// Parse a trimmed value with `FromStr`.
pub fn parse<T: FromStr>(value: Option<&str>) -> Option<T> {
    value?.trim().parse().ok()
}

/// Integer fields (bit depth, channels, sampling rate, dimensions, frame count).
pub fn parse_int(value: Option<&str>) -> Option<u32> {
    parse(value)
}

/// Long integer fields (bit rates, file size).
pub fn parse_long(value: Option<&str>) -> Option<u64> {
    parse(value)
}

/// Floating point fields (frame rate). Non-finite values are rejected.
pub fn parse_double(value: Option<&str>) -> Option<f64> {
    parse::<f64>(value).filter(|v| v.is_finite())
}

/// A millisecond count, integral or fractional.
///
/// Values too large for a [`Duration`] are `None`.
pub fn parse_millis(value: Option<&str>) -> Option<Duration> {
    let value = value?.trim();
    if let Ok(ms) = value.parse::<u64>() {
        return Some(Duration::from_millis(ms));
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|ms| ms.is_finite() && *ms >= 0.0)
        .and_then(|ms| Duration::try_from_secs_f64(ms / 1000.0).ok())
}

/// An encoded/tagged date as MediaInfo reports it.
///
/// `"UTC "` and `"Z "` markers are removed before parsing. Times without an
/// offset are taken as UTC.
pub fn parse_encoded_date(value: Option<&str>) -> Option<DateTime<FixedOffset>> {
    let value = value?;
    if value.trim().is_empty() {
        return None;
    }

    let cleaned = ZONE_MARKERS.replace_all(value, "");
    let mut cleaned = cleaned.trim();
    if let Some(stripped) = strip_suffix_ignore_case(cleaned, "utc") {
        cleaned = stripped.trim_end();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(cleaned) {
        return Some(dt);
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(cleaned, format) {
            return Some(dt);
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(cleaned, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    NaiveDate::parse_from_str(cleaned, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    let split = value.len().checked_sub(suffix.len())?;
    if !value.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = value.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
