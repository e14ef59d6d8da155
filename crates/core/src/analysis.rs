// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline entry points.
//!
//! Raw records flow through one path: date-range filter, then either
//! period bucketing or status classification, then summary statistics.

use serde::{Deserialize, Serialize};

use crate::aggregate::{by_period, by_status, Bucket, TrendMode};
use crate::filter::{DateRange, Filtered};
use crate::outcome::{EmptyReason, Outcome};
use crate::record::IssueRecord;
use crate::summary::{DateSpan, StatusSummary, TrendSummary};

/// Caller-supplied analysis parameters, already parsed and typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Selects monthly mode for this year; yearly mode when absent.
    pub year: Option<i32>,
    pub range: DateRange,
}

impl Params {
    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }
}

/// Creation trend table and its statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub mode: TrendMode,
    pub buckets: Vec<Bucket>,
    pub summary: TrendSummary,
    /// Records dropped for an unparsable `created_date`.
    pub excluded: usize,
}

/// Status distribution table and its statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub buckets: Vec<Bucket>,
    pub summary: StatusSummary,
    /// Records dropped for an unparsable `created_date`.
    pub excluded: usize,
}

/// Builds the monthly or yearly creation trend.
///
/// `date_range` spans every issue that passed the date filter, including
/// issues outside the target year in monthly mode.
pub fn analyze_trend(records: &[IssueRecord], params: &Params) -> Outcome<TrendReport> {
    let filtered = match filter(records, params) {
        Outcome::Populated(filtered) => filtered,
        Outcome::Empty(reason) => return Outcome::Empty(reason),
    };
    let mode = TrendMode::from_year(params.year);
    let date_range = filtered.span().map(DateSpan::from);

    by_period(&filtered.issues, mode).map(|buckets| TrendReport {
        mode,
        summary: TrendSummary::from_buckets(&buckets, date_range),
        buckets,
        excluded: filtered.malformed,
    })
}

pub fn analyze_status(records: &[IssueRecord], params: &Params) -> Outcome<StatusReport> {
    filter(records, params).map(|filtered| {
        let counts = by_status(&filtered.issues);
        let buckets = counts
            .iter()
            .map(|(status, count)| Bucket::new(status.as_str(), *count))
            .collect();
        StatusReport {
            buckets,
            summary: StatusSummary::from_counts(&counts, filtered.span().map(DateSpan::from)),
            excluded: filtered.malformed,
        }
    })
}

fn filter<'a>(records: &'a [IssueRecord], params: &Params) -> Outcome<Filtered<'a>> {
    let filtered = params.range.apply(records);
    if !filtered.is_empty() {
        return Outcome::Populated(filtered);
    }
    // Nothing usable at all is reported differently from an empty window
    let usable = records.len() - filtered.malformed;
    if usable == 0 || params.range.is_unbounded() {
        Outcome::Empty(EmptyReason::NoIssues)
    } else {
        Outcome::Empty(EmptyReason::NoIssuesInRange)
    }
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
