// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod export;
pub mod ratio;
pub mod trend;

use std::io::Write;
use std::path::Path;

use trend_core::{EmptyReason, IssueRecord};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

/// Load issue records from a JSON array or JSON Lines file.
pub fn load_records(path: &Path) -> Result<Vec<IssueRecord>> {
    if !path.is_file() {
        return Err(Error::InputNotFound(path.display().to_string()));
    }
    Ok(trend_core::source::load(path)?)
}

/// Report an empty analysis result instead of a chart.
pub(crate) fn write_empty<W: Write>(
    out: &mut W,
    reason: EmptyReason,
    output: OutputFormat,
) -> Result<()> {
    tracing::info!(%reason, "nothing to chart");
    match output {
        OutputFormat::Text => writeln!(out, "{reason}")?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&reason)?)?,
    }
    Ok(())
}

pub(crate) fn warn_excluded(excluded: usize) {
    if excluded > 0 {
        tracing::warn!(excluded, "skipped records with unparseable creation dates");
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
