// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The explicit "no data" signal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of an analysis that may legitimately have nothing to show.
///
/// `Empty` is a terminal signal: callers print the reason and stop
/// before rendering. It is distinct from a populated table.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Populated(T),
    Empty(EmptyReason),
}

impl<T> Outcome<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty(_))
    }

    /// Returns the populated value, discarding the empty reason.
    pub fn populated(self) -> Option<T> {
        match self {
            Outcome::Populated(value) => Some(value),
            Outcome::Empty(_) => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Populated(value) => Outcome::Populated(f(value)),
            Outcome::Empty(reason) => Outcome::Empty(reason),
        }
    }
}

/// Why an analysis produced no table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum EmptyReason {
    /// The input collection had no usable issues at all.
    NoIssues,
    /// Issues exist but none fall within the requested date range.
    NoIssuesInRange,
    /// No issue was created in the requested year.
    NoIssuesInYear { year: i32 },
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReason::NoIssues => write!(f, "No issues loaded."),
            EmptyReason::NoIssuesInRange => write!(f, "No issues found in this range."),
            EmptyReason::NoIssuesInYear { year } => write!(f, "No issues found for year {year}."),
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
