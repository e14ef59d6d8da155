// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::NaiveDate;

fn records() -> Vec<IssueRecord> {
    vec![
        IssueRecord::new(1, "2023-01-05T10:00:00Z", "open"),
        IssueRecord::new(2, "2023-01-20T10:00:00Z", "closed"),
        IssueRecord::new(3, "2023-03-02T10:00:00Z", "open"),
        IssueRecord::new(4, "2022-11-11T10:00:00Z", "closed"),
    ]
}

fn render(params: Params, output: OutputFormat) -> String {
    let mut out = Vec::new();
    run_impl(&mut out, &records(), &params, output, ChartStyle::plain(10)).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_monthly_text() {
    let text = render(Params::default().with_year(Some(2023)), OutputFormat::Text);
    assert!(text.starts_with("Issue Creation Trend in 2023\n"));
    assert!(text.contains("January  "));
    assert!(text.contains("March  "));
    assert!(!text.contains("February"));
    assert!(text.contains("Total issues created: 3"));
    assert!(text.contains("Average issues per month: 1.50"));
    assert!(text.contains("Most active month: January (2 issues)"));
}

#[test]
fn test_yearly_text() {
    let text = render(Params::default(), OutputFormat::Text);
    assert!(text.starts_with("Issue Creation Trend by Year\n"));
    assert!(text.contains("Total issues analyzed: 4"));
    assert!(text.contains("Years with recorded issues: 2"));
    assert!(text.contains("Most active year: 2023 (3 issues)"));
    assert!(text.contains("Issue data range: 2022-11-11 → 2023-03-02"));
}

#[test]
fn test_year_without_issues_prints_notice() {
    let text = render(Params::default().with_year(Some(2019)), OutputFormat::Text);
    assert_eq!(text, "No issues found for year 2019.\n");
}

#[test]
fn test_range_without_issues_prints_notice() {
    let range = DateRange::new(NaiveDate::from_ymd_opt(2030, 1, 1), None);
    let text = render(Params::default().with_range(range), OutputFormat::Text);
    assert_eq!(text, "No issues found in this range.\n");
}

#[test]
fn test_json_output() {
    let json = render(Params::default().with_year(Some(2023)), OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["mode"]["mode"], "monthly");
    assert_eq!(value["mode"]["year"], 2023);
    assert_eq!(value["summary"]["total"], 3);
    assert_eq!(value["buckets"][0]["key"], "January");
    assert_eq!(value["buckets"][0]["count"], 2);
    assert_eq!(value["excluded"], 0);
}

#[test]
fn test_unparseable_dates_are_excluded() {
    let mut records = records();
    records.push(IssueRecord::new(5, "not a date", "open"));
    let mut out = Vec::new();
    run_impl(
        &mut out,
        &records,
        &Params::default(),
        OutputFormat::Json,
        ChartStyle::plain(10),
    )
    .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["excluded"], 1);
    assert_eq!(value["summary"]["total"], 4);
}
