// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use trend_core::{analyze_status, DateRange, IssueRecord, Outcome, Params};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::{self, ChartStyle};
use crate::error::Result;

use super::{export, load_records, warn_excluded, write_empty};

pub fn run(
    config: &Config,
    input: &Path,
    range: DateRange,
    export_dir: Option<PathBuf>,
    output: OutputFormat,
) -> Result<()> {
    let records = load_records(input)?;
    let params = Params::default().with_range(range);
    let style = ChartStyle::from_config(config);
    run_impl(
        &mut io::stdout().lock(),
        &records,
        &params,
        output,
        style,
        export_dir.as_deref(),
    )
}

/// Internal implementation that accepts records and a writer for testing.
///
/// With `export_dir` set, the chart and report are also written to disk.
/// Nothing is exported when the selection is empty.
pub(crate) fn run_impl<W: Write>(
    out: &mut W,
    records: &[IssueRecord],
    params: &Params,
    output: OutputFormat,
    style: ChartStyle,
    export_dir: Option<&Path>,
) -> Result<()> {
    let report = match analyze_status(records, params) {
        Outcome::Populated(report) => report,
        Outcome::Empty(reason) => return write_empty(out, reason, output),
    };
    warn_excluded(report.excluded);

    match output {
        OutputFormat::Text => {
            write!(out, "{}", display::ratio_chart(&report, style))?;
            writeln!(out)?;
            write!(out, "{}", display::ratio_summary(&report))?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }

    if let Some(dir) = export_dir {
        let exported = export::write_ratio(dir, &report, style.bar_width)?;
        if output == OutputFormat::Text {
            writeln!(out, "Chart saved to {}", exported.chart.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "ratio_tests.rs"]
mod tests;
