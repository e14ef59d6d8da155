// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::EventRecord;

/// Event type that marks an issue as having been reopened.
const REOPENED_EVENT: &str = "reopened";

/// Derived classification of an issue.
///
/// Computed from the tracker state and event history only, never from
/// timestamps or filter bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    /// State is `open`.
    Open,
    /// State is `closed` and the issue was never reopened.
    Closed,
    /// State is `closed` and at least one `reopened` event exists.
    Reopened,
    /// Any other state value.
    Unknown,
}

impl Status {
    /// Canonical ordering used for status tables.
    pub const ALL: [Status; 4] = [Status::Open, Status::Closed, Status::Reopened, Status::Unknown];

    /// Returns the label used in tables and charts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::Closed => "Closed",
            Status::Reopened => "Reopened",
            Status::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies an issue from its state and event history.
///
/// A closed issue counts as [`Status::Reopened`] if any event was a reopen,
/// regardless of what happened afterwards; event order is not consulted.
pub fn classify(state: &str, events: &[EventRecord]) -> Status {
    match state.trim().to_lowercase().as_str() {
        "open" => Status::Open,
        "closed" if events.iter().any(is_reopen) => Status::Reopened,
        "closed" => Status::Closed,
        _ => Status::Unknown,
    }
}

fn is_reopen(event: &EventRecord) -> bool {
    event.event_type.trim().eq_ignore_ascii_case(REOPENED_EVENT)
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
