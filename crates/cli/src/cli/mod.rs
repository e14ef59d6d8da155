// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

pub use args::RangeArgs;

/// Output format for analysis commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "trend")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Issue creation trends and status ratios from issue-tracker exports")]
#[command(
    long_about = "Issue creation trends and status ratios from issue-tracker exports.\n\n\
    Reads a JSON array or JSON Lines file of issues with nested events and prints\n\
    text charts and summary statistics."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Issue file (JSON array or JSON Lines)
    #[arg(short, long, global = true, env = "TREND_INPUT", value_name = "path")]
    pub input: Option<PathBuf>,

    /// Configuration file (default: ./trend.toml, then user config dir)
    #[arg(short, long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show issue creation trend per month (with --year) or per year
    #[command(after_help = colors::examples("\
Examples:
  trend trend                          Issues created per year
  trend trend --year 2023              Issues created per month in 2023
  trend trend --from 2022-01-01        Yearly trend since 2022
  trend trend -y 2023 -o json          Monthly trend as JSON"))]
    Trend {
        /// Year to break down by month (omit for all years)
        #[arg(long, short, value_parser = clap::value_parser!(i32).range(1..=9999))]
        year: Option<i32>,

        #[command(flatten)]
        range: RangeArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the open / closed / reopened status ratio
    #[command(after_help = colors::examples("\
Examples:
  trend ratio                                    Ratio over all issues
  trend ratio --from 2023-02-01 --to 2023-02-28  Ratio for February 2023
  trend ratio --export                           Also save chart and report
  trend ratio --export --output-dir out          Save into ./out"))]
    Ratio {
        #[command(flatten)]
        range: RangeArgs,

        /// Save the rendered chart and JSON report to the output directory
        #[arg(long)]
        export: bool,

        /// Directory for exported files (overrides `output_dir` in config)
        #[arg(long, value_name = "DIR", requires = "export")]
        output_dir: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
