// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issues in the canonical frame.

use chrono::{Datelike, Month, NaiveDateTime};

use crate::record::{EventRecord, IssueRecord};
use crate::status::{classify, Status};
use crate::timestamp::parse_created;

/// A record whose `created_date` parsed successfully.
///
/// Borrows the raw record; the pipeline never mutates or copies its input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Issue<'a> {
    record: &'a IssueRecord,
    created: NaiveDateTime,
}

impl<'a> Issue<'a> {
    /// Returns `None` when `created_date` is missing or unparsable.
    pub fn from_record(record: &'a IssueRecord) -> Option<Self> {
        parse_created(&record.created_date).map(|created| Issue { record, created })
    }

    pub fn number(&self) -> i64 {
        self.record.number
    }

    pub fn state(&self) -> &'a str {
        &self.record.state
    }

    pub fn events(&self) -> &'a [EventRecord] {
        &self.record.events
    }

    /// Creation time in the canonical frame.
    pub fn created(&self) -> NaiveDateTime {
        self.created
    }

    pub fn year(&self) -> i32 {
        self.created.year()
    }

    pub fn month(&self) -> Month {
        // month() is always 1..=12
        Month::try_from(self.created.month() as u8).unwrap_or(Month::January)
    }

    pub fn status(&self) -> Status {
        classify(self.state(), self.events())
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
