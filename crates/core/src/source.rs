// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading issue records from disk.
//!
//! Accepts either a JSON array of issues or JSON Lines with one issue per
//! line. The format is detected from the first non-whitespace byte.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::jsonl;
use crate::record::IssueRecord;

/// Loads all issue records from `path`.
pub fn load(path: &Path) -> Result<Vec<IssueRecord>> {
    let content = fs::read_to_string(path)?;
    let records = parse(&content)?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded issue records");
    Ok(records)
}

/// Parses issue records from a JSON array or JSON Lines document.
pub fn parse(content: &str) -> Result<Vec<IssueRecord>> {
    if content.trim_start().starts_with('[') {
        Ok(serde_json::from_str(content)?)
    } else {
        jsonl::read_from(content.as_bytes())
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
