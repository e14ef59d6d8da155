// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw issue and event records as supplied by the record source.
//!
//! Every field is tolerant: missing, null, or wrongly-typed values become a
//! neutral default instead of failing the whole load. Records are built from
//! a [`Value`], so a non-object element or a record carrying both spellings
//! of a key is still a record; one without a usable creation time is
//! excluded later. `created_date` is kept as the raw JSON value and only
//! interpreted by [`crate::timestamp::parse_created`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Accepted spellings of the creation-time key, most preferred first.
const CREATED_KEYS: [&str; 2] = ["created_date", "created_at"];
/// Accepted spellings of the event-type key, most preferred first.
const EVENT_TYPE_KEYS: [&str; 2] = ["event_type", "event"];

/// One tracked item as read from storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct IssueRecord {
    /// Display identifier. Not required to be unique.
    pub number: i64,
    /// Creation time in any supported form, or anything else when malformed.
    pub created_date: Value,
    /// Tracker state, compared case-insensitively (`open` / `closed`).
    pub state: String,
    /// State-change history, oldest first.
    pub events: Vec<EventRecord>,
}

/// One state-change record attached to an issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct EventRecord {
    pub event_type: String,
    pub created_date: Value,
}

impl IssueRecord {
    /// Creates a record with no events.
    pub fn new(number: i64, created_date: impl Into<Value>, state: &str) -> Self {
        IssueRecord {
            number,
            created_date: created_date.into(),
            state: state.to_string(),
            events: Vec::new(),
        }
    }

    /// Appends an event of the given type (builder pattern).
    pub fn with_event(mut self, event_type: &str) -> Self {
        self.events.push(EventRecord::new(event_type));
        self
    }
}

impl EventRecord {
    pub fn new(event_type: &str) -> Self {
        EventRecord {
            event_type: event_type.to_string(),
            created_date: Value::Null,
        }
    }
}

impl From<Value> for IssueRecord {
    fn from(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return IssueRecord::default();
        };
        IssueRecord {
            number: fields.get("number").map_or(0, lenient_number),
            created_date: take_first(&mut fields, &CREATED_KEYS),
            state: fields.get("state").map(lenient_string).unwrap_or_default(),
            events: fields
                .get_mut("events")
                .map(Value::take)
                .map(lenient_events)
                .unwrap_or_default(),
        }
    }
}

impl From<Value> for EventRecord {
    fn from(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return EventRecord::default();
        };
        let event_type = EVENT_TYPE_KEYS
            .iter()
            .filter_map(|key| fields.get(*key))
            .map(lenient_string)
            .find(|s| !s.is_empty())
            .unwrap_or_default();
        EventRecord {
            event_type,
            created_date: take_first(&mut fields, &CREATED_KEYS),
        }
    }
}

/// Takes the first non-null value among `keys`, or `Null`.
fn take_first(fields: &mut Map<String, Value>, keys: &[&str]) -> Value {
    keys.iter()
        .filter_map(|key| fields.remove(*key))
        .find(|value| !value.is_null())
        .unwrap_or(Value::Null)
}

fn lenient_number(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}

fn lenient_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        _ => String::new(),
    }
}

/// Non-object entries are dropped; every object yields an event.
fn lenient_events(value: Value) -> Vec<EventRecord> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .map(EventRecord::from)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
