// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use chrono::NaiveDate;
use yare::parameterized;

// Helper to parse CLI args
fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_trend_default() {
    let cli = parse(&["trend", "trend"]).unwrap();
    match cli.command {
        Command::Trend {
            year,
            range,
            output,
        } => {
            assert_eq!(year, None);
            assert!(range.range().is_unbounded());
            assert_eq!(output, OutputFormat::Text);
        }
        _ => panic!("Expected Trend command"),
    }
}

#[parameterized(
    long = { &["trend", "trend", "--year", "2023"] },
    short = { &["trend", "trend", "-y", "2023"] },
)]
fn test_trend_with_year(args: &[&str]) {
    let cli = parse(args).unwrap();
    match cli.command {
        Command::Trend { year, .. } => assert_eq!(year, Some(2023)),
        _ => panic!("Expected Trend command"),
    }
}

#[parameterized(
    not_a_number = { "twenty" },
    zero = { "0" },
    too_large = { "10000" },
    negative = { "-5" },
)]
fn test_trend_rejects_bad_year(year: &str) {
    assert!(parse(&["trend", "trend", "--year", year]).is_err());
}

#[test]
fn test_trend_with_range_and_json() {
    let cli = parse(&[
        "trend", "trend", "--from", "2022-01-01", "--to", "2022-12-31", "-o", "json",
    ])
    .unwrap();
    match cli.command {
        Command::Trend { range, output, .. } => {
            assert_eq!(range.from, NaiveDate::from_ymd_opt(2022, 1, 1));
            assert_eq!(range.to, NaiveDate::from_ymd_opt(2022, 12, 31));
            assert_eq!(output, OutputFormat::Json);
        }
        _ => panic!("Expected Trend command"),
    }
}

#[parameterized(
    wrong_order = { "01-02-2023" },
    slashes = { "2023/02/01" },
    impossible = { "2023-02-30" },
    empty = { "" },
)]
fn test_trend_rejects_bad_date(date: &str) {
    assert!(parse(&["trend", "trend", "--from", date]).is_err());
}
