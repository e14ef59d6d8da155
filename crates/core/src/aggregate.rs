// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bucketing of filtered issues into ordered count tables.
//!
//! Buckets exist only for keys with at least one issue; there is no
//! zero-filling. Ordering is canonical: January through December for
//! months, ascending for years, [`Status::ALL`] order for statuses.

use chrono::Month;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::issue::Issue;
use crate::outcome::{EmptyReason, Outcome};
use crate::status::Status;

/// One `(key, count)` row of an aggregation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub key: String,
    pub count: usize,
}

impl Bucket {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Bucket {
            key: key.into(),
            count,
        }
    }
}

/// Time unit used to bucket creation dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TrendMode {
    /// Months within one year.
    Monthly { year: i32 },
    /// Calendar years across the whole collection.
    Yearly,
}

impl TrendMode {
    /// Monthly when a year is given, yearly otherwise.
    pub fn from_year(year: Option<i32>) -> Self {
        match year {
            Some(year) => TrendMode::Monthly { year },
            None => TrendMode::Yearly,
        }
    }

    /// Singular name of the bucket unit ("month" or "year").
    pub fn unit(&self) -> &'static str {
        match self {
            TrendMode::Monthly { .. } => "month",
            TrendMode::Yearly => "year",
        }
    }
}

/// Buckets issues by creation month or year.
///
/// In monthly mode only issues created in the target year are counted;
/// if none are, the result is [`EmptyReason::NoIssuesInYear`].
pub fn by_period(issues: &[Issue<'_>], mode: TrendMode) -> Outcome<Vec<Bucket>> {
    let (counted, buckets): (usize, Vec<Bucket>) = match mode {
        TrendMode::Monthly { year } => {
            let scoped: Vec<Issue<'_>> =
                issues.iter().copied().filter(|i| i.year() == year).collect();
            if scoped.is_empty() {
                return Outcome::Empty(EmptyReason::NoIssuesInYear { year });
            }
            let buckets = tally(&scoped, |i| i.month().number_from_month())
                .into_iter()
                .map(|(number, count)| Bucket::new(month_name(number), count))
                .collect();
            (scoped.len(), buckets)
        }
        TrendMode::Yearly => {
            if issues.is_empty() {
                return Outcome::Empty(EmptyReason::NoIssues);
            }
            let buckets = tally(issues, |i| i.year())
                .into_iter()
                .map(|(year, count)| Bucket::new(year.to_string(), count))
                .collect();
            (issues.len(), buckets)
        }
    };

    tracing::debug!(
        unit = mode.unit(),
        buckets = buckets.len(),
        issues = counted,
        "bucketed issues"
    );
    Outcome::Populated(buckets)
}

pub fn by_status(issues: &[Issue<'_>]) -> Vec<(Status, usize)> {
    tally(issues, |i| i.status()).into_iter().collect()
}

/// Groups by an ordered key. `BTreeMap` iteration gives the canonical order.
fn tally<'a, K, F>(issues: &[Issue<'a>], key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&Issue<'a>) -> K,
{
    let mut counts = BTreeMap::new();
    for issue in issues {
        *counts.entry(key(issue)).or_insert(0) += 1;
    }
    counts
}

fn month_name(number: u32) -> &'static str {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map_or("Unknown", |m| m.name())
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
