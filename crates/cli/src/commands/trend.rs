// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::Path;

use trend_core::{analyze_trend, DateRange, IssueRecord, Outcome, Params};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::{self, ChartStyle};
use crate::error::Result;

use super::{load_records, warn_excluded, write_empty};

pub fn run(
    config: &Config,
    input: &Path,
    year: Option<i32>,
    range: DateRange,
    output: OutputFormat,
) -> Result<()> {
    let records = load_records(input)?;
    let params = Params::default().with_year(year).with_range(range);
    let style = ChartStyle::from_config(config);
    run_impl(&mut io::stdout().lock(), &records, &params, output, style)
}

/// Internal implementation that accepts records and a writer for testing.
pub(crate) fn run_impl<W: Write>(
    out: &mut W,
    records: &[IssueRecord],
    params: &Params,
    output: OutputFormat,
    style: ChartStyle,
) -> Result<()> {
    let report = match analyze_trend(records, params) {
        Outcome::Populated(report) => report,
        Outcome::Empty(reason) => return write_empty(out, reason, output),
    };
    warn_excluded(report.excluded);

    match output {
        OutputFormat::Text => {
            write!(out, "{}", display::trend_chart(&report, style))?;
            writeln!(out)?;
            write!(out, "{}", display::trend_summary(&report))?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "trend_tests.rs"]
mod tests;
