// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use trend_core::StatusReport;

use crate::display::{self, ChartStyle};
use crate::error::Result;

pub const CHART_FILE: &str = "issue_status_ratio.txt";
pub const REPORT_FILE: &str = "issue_status_ratio.json";

/// Files written by [`write_ratio`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exported {
    pub chart: PathBuf,
    pub report: PathBuf,
}

/// Write the status chart (uncolored) and the JSON report into `dir`,
/// creating it if needed. Existing files are overwritten.
pub fn write_ratio(dir: &Path, report: &StatusReport, bar_width: usize) -> Result<Exported> {
    fs::create_dir_all(dir)?;

    let chart = dir.join(CHART_FILE);
    let mut writer = BufWriter::new(File::create(&chart)?);
    write!(
        writer,
        "{}",
        display::ratio_chart(report, ChartStyle::plain(bar_width))
    )?;
    writeln!(writer)?;
    write!(writer, "{}", display::ratio_summary(report))?;
    writer.flush()?;

    let json = dir.join(REPORT_FILE);
    let mut writer = BufWriter::new(File::create(&json)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;

    tracing::info!(dir = %dir.display(), "exported status ratio");
    Ok(Exported {
        chart,
        report: json,
    })
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
