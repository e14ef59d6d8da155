// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of trend and status reports.
//!
//! Charts are horizontal bar charts, one row per bucket. Summaries mirror
//! the wording users see in the analysis output: totals, averages with two
//! decimals, the most active bucket, and the observed date range.

use trend_core::{Bucket, DateSpan, StatusReport, TrendMode, TrendReport};

use crate::colors;
use crate::config::Config;

/// Horizontal rule framing summary blocks.
const RULE_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

/// Rendering options injected from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    /// Width of a bar representing the full scale.
    pub bar_width: usize,
    pub color: bool,
}

impl ChartStyle {
    pub fn from_config(config: &Config) -> Self {
        ChartStyle {
            bar_width: config.bar_width,
            color: colors::should_colorize(),
        }
    }

    pub fn plain(bar_width: usize) -> Self {
        ChartStyle {
            bar_width,
            color: false,
        }
    }

    fn header(&self, text: &str) -> String {
        if self.color {
            colors::header(text)
        } else {
            text.to_string()
        }
    }

    fn bar(&self, len: usize) -> String {
        let bar = String::from(BAR_CHAR).repeat(len);
        if self.color && len > 0 {
            colors::bar(&bar)
        } else {
            bar
        }
    }
}

/// Title for a trend chart.
pub fn trend_title(mode: TrendMode) -> String {
    match mode {
        TrendMode::Monthly { year } => format!("Issue Creation Trend in {year}"),
        TrendMode::Yearly => "Issue Creation Trend by Year".to_string(),
    }
}

/// Bar chart of issues created per month or year.
pub fn trend_chart(report: &TrendReport, style: ChartStyle) -> String {
    let max = report.buckets.iter().map(|b| b.count).max().unwrap_or(0);
    let label_width = label_width(&report.buckets);

    let mut lines = vec![style.header(&trend_title(report.mode)), String::new()];
    for bucket in &report.buckets {
        let len = bar_length(bucket.count, max, style.bar_width);
        lines.push(format!(
            "{:<label_width$}  {} {}",
            bucket.key,
            style.bar(len),
            bucket.count
        ));
    }
    join_lines(lines)
}

/// Summary block for a trend report.
pub fn trend_summary(report: &TrendReport) -> String {
    let summary = &report.summary;
    let unit = report.mode.unit();

    let mut lines = match report.mode {
        TrendMode::Monthly { year } => vec![
            format!("Summary for {year}"),
            rule(),
            format!("Total issues created: {}", summary.total),
            format!("Average issues per month: {:.2}", summary.average),
            format!(
                "Number of months with issue activity: {}",
                summary.active_count
            ),
        ],
        TrendMode::Yearly => vec![
            "Overall Summary (All Years)".to_string(),
            rule(),
            format!("Total issues analyzed: {}", summary.total),
            format!("Average issues per year: {:.2}", summary.average),
            format!("Years with recorded issues: {}", summary.active_count),
        ],
    };

    if let Some(bucket) = &summary.most_active {
        lines.push(format!(
            "Most active {unit}: {} ({} {})",
            bucket.key,
            bucket.count,
            issues_word(bucket.count)
        ));
    }
    if let Some(span) = summary.date_range {
        lines.push(format!("Issue data range: {}", format_span(span)));
    }
    lines.push(rule());
    join_lines(lines)
}

/// Bar chart of status shares; bars are scaled to the total.
pub fn ratio_chart(report: &StatusReport, style: ChartStyle) -> String {
    let total = report.summary.total;
    let label_width = label_width(&report.buckets);

    let mut lines = vec![
        style.header("Issue Status Ratio (Open / Closed / Reopened)"),
        String::new(),
    ];
    for share in &report.summary.shares {
        let len = bar_length(share.count, total, style.bar_width);
        lines.push(format!(
            "{:<label_width$}  {} {} ({:.1}%)",
            share.status.as_str(),
            style.bar(len),
            share.count,
            share.share * 100.0
        ));
    }
    join_lines(lines)
}

/// Summary block for a status report.
pub fn ratio_summary(report: &StatusReport) -> String {
    let mut lines = vec!["Issue Status Summary".to_string(), rule()];
    for share in &report.summary.shares {
        lines.push(format!(
            "{}: {} {} ({:.2}%)",
            share.status,
            share.count,
            issues_word(share.count),
            share.share * 100.0
        ));
    }
    if let Some(span) = report.summary.date_range {
        lines.push(String::new());
        lines.push(format!("Issue data range: {}", format_span(span)));
    }
    lines.push(rule());
    join_lines(lines)
}

/// Format a date span as `YYYY-MM-DD → YYYY-MM-DD`.
pub fn format_span(span: DateSpan) -> String {
    format!(
        "{} → {}",
        span.start.format("%Y-%m-%d"),
        span.end.format("%Y-%m-%d")
    )
}

/// Scale `count` against `scale` onto `width` characters.
///
/// Non-zero counts always get at least one character.
pub fn bar_length(count: usize, scale: usize, width: usize) -> usize {
    if count == 0 || scale == 0 {
        return 0;
    }
    let len = (count as f64 / scale as f64 * width as f64).round() as usize;
    len.clamp(1, width.max(1))
}

fn label_width(buckets: &[Bucket]) -> usize {
    buckets.iter().map(|b| b.key.chars().count()).max().unwrap_or(0)
}

fn issues_word(count: usize) -> &'static str {
    if count == 1 {
        "issue"
    } else {
        "issues"
    }
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Joins rendered lines, each terminated by a newline.
fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
