// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Summary statistics over bucket tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::Bucket;
use crate::status::Status;

/// Earliest and latest creation dates of the filtered issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl From<(NaiveDate, NaiveDate)> for DateSpan {
    fn from((start, end): (NaiveDate, NaiveDate)) -> Self {
        DateSpan { start, end }
    }
}

/// Statistics for a month or year table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Sum of all bucket counts.
    pub total: usize,
    /// `total` divided by the number of buckets present; 0 for no buckets.
    pub average: f64,
    /// Buckets with a non-zero count.
    pub active_count: usize,
    /// Highest-count bucket, earliest in canonical order on ties.
    pub most_active: Option<Bucket>,
    pub date_range: Option<DateSpan>,
}

impl TrendSummary {
    pub fn from_buckets(buckets: &[Bucket], date_range: Option<DateSpan>) -> Self {
        let total = buckets.iter().map(|b| b.count).sum();
        TrendSummary {
            total,
            average: average(total, buckets.len()),
            active_count: buckets.iter().filter(|b| b.count > 0).count(),
            most_active: most_active(buckets).cloned(),
            date_range,
        }
    }
}

/// One row of a status table with its share of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusShare {
    pub status: Status,
    pub count: usize,
    /// `count / total`, in `[0, 1]`.
    pub share: f64,
}

/// Statistics for a status table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub total: usize,
    pub average: f64,
    pub active_count: usize,
    pub most_active: Option<Bucket>,
    /// Per-status counts and shares, in canonical status order.
    pub shares: Vec<StatusShare>,
    pub date_range: Option<DateSpan>,
}

impl StatusSummary {
    pub fn from_counts(counts: &[(Status, usize)], date_range: Option<DateSpan>) -> Self {
        let buckets: Vec<Bucket> = counts
            .iter()
            .map(|(status, count)| Bucket::new(status.as_str(), *count))
            .collect();
        let base = TrendSummary::from_buckets(&buckets, date_range);

        let shares = counts
            .iter()
            .map(|&(status, count)| StatusShare {
                status,
                count,
                share: ratio(count, base.total),
            })
            .collect();

        StatusSummary {
            total: base.total,
            average: base.average,
            active_count: base.active_count,
            most_active: base.most_active,
            shares,
            date_range,
        }
    }
}

fn average(total: usize, buckets: usize) -> f64 {
    ratio(total, buckets)
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// First bucket holding the maximum count.
fn most_active(buckets: &[Bucket]) -> Option<&Bucket> {
    buckets.iter().fold(None, |best: Option<&Bucket>, bucket| match best {
        Some(b) if b.count >= bucket.count => Some(b),
        _ => Some(bucket),
    })
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
