// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::{FixedOffset, NaiveDate};
use yare::parameterized;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[parameterized(
    rfc3339_z = { "2023-01-10T08:30:00Z", at(2023, 1, 10, 8, 30, 0) },
    rfc3339_fraction = { "2023-01-10T08:30:00.250Z", at(2023, 1, 10, 8, 30, 0) + chrono::Duration::milliseconds(250) },
    rfc3339_positive_offset = { "2023-01-10T08:30:00+02:00", at(2023, 1, 10, 6, 30, 0) },
    rfc3339_negative_offset = { "2023-01-10T20:00:00-05:00", at(2023, 1, 11, 1, 0, 0) },
    space_offset = { "2023-01-10 08:30:00+0100", at(2023, 1, 10, 7, 30, 0) },
    space_z = { "2023-01-10 08:30:00Z", at(2023, 1, 10, 8, 30, 0) },
    naive_t = { "2023-01-10T08:30:00", at(2023, 1, 10, 8, 30, 0) },
    naive_space = { "2023-01-10 08:30:00", at(2023, 1, 10, 8, 30, 0) },
    naive_minutes = { "2023-01-10 08:30", at(2023, 1, 10, 8, 30, 0) },
    date_only = { "2023-01-10", at(2023, 1, 10, 0, 0, 0) },
    padded = { "  2023-01-10  ", at(2023, 1, 10, 0, 0, 0) },
)]
fn parses_supported_strings(input: &str, expected: NaiveDateTime) {
    assert_eq!(parse_str(input), Some(expected));
}

#[parameterized(
    empty = { "" },
    whitespace = { "   " },
    garbage = { "not a date" },
    bad_month = { "2023-13-01" },
    bad_day = { "2023-02-30" },
    partial = { "2023-01" },
)]
fn rejects_unparsable_strings(input: &str) {
    assert_eq!(parse_str(input), None);
}

#[test]
fn offset_crossing_new_year_moves_year_in_canonical_frame() {
    // 23:30 on Dec 31 at -05:00 is already Jan 1 in UTC
    let parsed = parse_str("2022-12-31T23:30:00-05:00").unwrap();
    assert_eq!(parsed, at(2023, 1, 1, 4, 30, 0));
}

#[test]
fn integer_epoch_seconds() {
    let parsed = parse_created(&Value::from(1_673_337_600_i64)).unwrap();
    assert_eq!(parsed, at(2023, 1, 10, 8, 0, 0));
}

#[test]
fn float_epoch_seconds() {
    let parsed = parse_created(&Value::from(1_673_337_600.5_f64)).unwrap();
    assert_eq!(parsed, at(2023, 1, 10, 8, 0, 0) + chrono::Duration::milliseconds(500));
}

#[parameterized(
    null = { Value::Null },
    boolean = { Value::Bool(true) },
    array = { serde_json::json!(["2023-01-10"]) },
    object = { serde_json::json!({"date": "2023-01-10"}) },
)]
fn rejects_non_timestamp_values(value: Value) {
    assert_eq!(parse_created(&value), None);
}

#[test]
fn canonicalize_drops_offset_after_utc_conversion() {
    let tz = FixedOffset::east_opt(9 * 3600).unwrap();
    let dt = tz.with_ymd_and_hms(2023, 3, 1, 3, 0, 0).unwrap();
    assert_eq!(canonicalize(&dt), at(2023, 2, 28, 18, 0, 0));
}
