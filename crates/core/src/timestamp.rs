// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical temporal frame.
//!
//! Every timestamp entering the pipeline is converted here, once, into a
//! timezone-free UTC [`NaiveDateTime`]. Offset-aware inputs are shifted to
//! UTC and the offset dropped; naive inputs are taken to already be UTC.
//! Filtering, bucketing and range reporting all work in this frame only.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde_json::Value;

/// Offset-aware layouts tried after RFC 3339.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

/// Naive layouts, interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Converts an offset-aware timestamp into the canonical frame.
pub fn canonicalize<Tz: TimeZone>(dt: &DateTime<Tz>) -> NaiveDateTime {
    dt.naive_utc()
}

/// Parses a raw `created_date` value into the canonical frame.
///
/// Strings may be RFC 3339, ISO-8601 with or without an offset, or a bare
/// `YYYY-MM-DD` date (midnight). JSON numbers are Unix epoch seconds.
/// Returns `None` for anything else; callers treat that as a malformed
/// record and drop it.
pub fn parse_created(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_str(s),
        Value::Number(n) => {
            if let Some(secs) = n.as_i64() {
                return DateTime::from_timestamp(secs, 0).map(|dt| canonicalize(&dt));
            }
            n.as_f64().and_then(from_float_seconds)
        }
        _ => None,
    }
}

/// Parses a timestamp string into the canonical frame.
pub fn parse_str(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(canonicalize(&dt));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Some(canonicalize(&dt));
        }
    }

    // A trailing `Z` outside RFC 3339 layouts (e.g. "2023-01-10 08:00:00Z")
    let naive = s.strip_suffix(&['Z', 'z'][..]).unwrap_or(s);
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(naive, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn from_float_seconds(secs: f64) -> Option<NaiveDateTime> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos).map(|dt| canonicalize(&dt))
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
