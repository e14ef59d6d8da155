// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date-range filtering over raw records.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::issue::Issue;
use crate::record::IssueRecord;

/// Optional inclusive calendar-date bounds on `created_date`.
///
/// Bounds cover whole days: an issue created at any time on `end` is kept.
/// `start > end` is not special-cased and simply matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        DateRange { start, end }
    }

    /// An unbounded range.
    pub fn all() -> Self {
        DateRange::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Check if a canonical timestamp falls within the bounds.
    pub fn contains(&self, created: NaiveDateTime) -> bool {
        let day = created.date();
        self.start.is_none_or(|start| day >= start) && self.end.is_none_or(|end| day <= end)
    }

    /// Normalizes and filters records.
    ///
    /// Records with a missing or unparsable `created_date` are dropped and
    /// counted in [`Filtered::malformed`]; they are never an error.
    pub fn apply<'a>(&self, records: &'a [IssueRecord]) -> Filtered<'a> {
        let mut issues = Vec::with_capacity(records.len());
        let mut malformed = 0;

        for record in records {
            let Some(issue) = Issue::from_record(record) else {
                tracing::debug!(number = record.number, "dropping issue with unparsable created_date");
                malformed += 1;
                continue;
            };
            if self.contains(issue.created()) {
                issues.push(issue);
            }
        }

        tracing::debug!(
            total = records.len(),
            retained = issues.len(),
            malformed,
            "applied date range"
        );

        Filtered { issues, malformed }
    }
}

/// Issues retained by a [`DateRange`].
#[derive(Debug, Clone, Default)]
pub struct Filtered<'a> {
    pub issues: Vec<Issue<'a>>,
    /// Records excluded because `created_date` did not parse.
    pub malformed: usize,
}

impl Filtered<'_> {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Creation timestamps of the retained issues.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.issues.iter().map(Issue::created)
    }

    /// Earliest and latest retained creation dates.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.dates().min()?;
        let last = self.dates().max()?;
        Some((first.date(), last.date()))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
