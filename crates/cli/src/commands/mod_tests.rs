// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_records_json_array() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("issues.json");
    fs::write(
        &path,
        r#"[{"number": 1, "created_date": "2023-01-05T10:00:00Z", "state": "open", "events": []}]"#,
    )
    .unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].number, 1);
}

#[test]
fn test_load_records_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.json");

    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, Error::InputNotFound(p) if p.ends_with("missing.json")));
}

#[test]
fn test_load_records_directory_is_not_input() {
    let temp = TempDir::new().unwrap();
    assert!(matches!(
        load_records(temp.path()),
        Err(Error::InputNotFound(_))
    ));
}

#[test]
fn test_load_records_malformed_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("issues.jsonl");
    fs::write(&path, "{\"number\": 1}\nnot json\n").unwrap();

    assert!(matches!(load_records(&path), Err(Error::Core(_))));
}

#[test]
fn test_write_empty_text() {
    let mut out = Vec::new();
    write_empty(
        &mut out,
        EmptyReason::NoIssuesInYear { year: 2019 },
        OutputFormat::Text,
    )
    .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "No issues found for year 2019.\n");
}

#[test]
fn test_write_empty_json() {
    let mut out = Vec::new();
    write_empty(&mut out, EmptyReason::NoIssuesInRange, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["reason"], "no_issues_in_range");
}
