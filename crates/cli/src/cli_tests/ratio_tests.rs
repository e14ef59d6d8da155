// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use chrono::NaiveDate;

// Helper to parse CLI args
fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_ratio_default() {
    let cli = parse(&["trend", "ratio"]).unwrap();
    match cli.command {
        Command::Ratio {
            range,
            export,
            output_dir,
            output,
        } => {
            assert!(range.range().is_unbounded());
            assert!(!export);
            assert_eq!(output_dir, None);
            assert_eq!(output, OutputFormat::Text);
        }
        _ => panic!("Expected Ratio command"),
    }
}

#[test]
fn test_ratio_with_range() {
    let cli = parse(&["trend", "ratio", "--from", "2023-02-01", "--to", "2023-02-28"]).unwrap();
    match cli.command {
        Command::Ratio { range, .. } => {
            let range = range.range();
            assert_eq!(range.start, NaiveDate::from_ymd_opt(2023, 2, 1));
            assert_eq!(range.end, NaiveDate::from_ymd_opt(2023, 2, 28));
        }
        _ => panic!("Expected Ratio command"),
    }
}

#[test]
fn test_ratio_inverted_range_is_accepted() {
    // start > end is a valid (empty) selection, not a parse error
    assert!(parse(&["trend", "ratio", "--from", "2023-03-01", "--to", "2023-01-01"]).is_ok());
}

#[test]
fn test_ratio_export_with_dir() {
    let cli = parse(&["trend", "ratio", "--export", "--output-dir", "out"]).unwrap();
    match cli.command {
        Command::Ratio {
            export, output_dir, ..
        } => {
            assert!(export);
            assert_eq!(output_dir, Some(PathBuf::from("out")));
        }
        _ => panic!("Expected Ratio command"),
    }
}

#[test]
fn test_ratio_output_dir_requires_export() {
    assert!(parse(&["trend", "ratio", "--output-dir", "out"]).is_err());
}

#[test]
fn test_ratio_rejects_year() {
    assert!(parse(&["trend", "ratio", "--year", "2023"]).is_err());
}
