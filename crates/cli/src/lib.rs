// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! trendrs - Issue creation trends and status ratios for the `trend` CLI.
//!
//! This crate wires the analysis core ([`trend_core`]) to the command line:
//! argument parsing, configuration discovery, text charts, and export.
//!
//! # Main Components
//!
//! - [`Cli`] - Parsed command line
//! - [`Config`] - Presentation settings (input file, export directory, bar width)
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//! use trendrs::Cli;
//!
//! let cli = Cli::parse_from(["trend", "--input", "issues.json", "trend", "--year", "2023"]);
//! trendrs::run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod config;
mod display;
pub mod env;
pub mod error;
pub mod help;

pub use cli::{Cli, Command, OutputFormat, RangeArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        config,
        command,
    } = cli;

    match command {
        Command::Trend {
            year,
            range,
            output,
        } => {
            let config = Config::discover(config.as_deref())?;
            let input = config.input_path(input)?;
            commands::trend::run(&config, &input, year, range.range(), output)
        }
        Command::Ratio {
            range,
            export,
            output_dir,
            output,
        } => {
            let config = Config::discover(config.as_deref())?;
            let input = config.input_path(input)?;
            let export_dir = if export {
                Some(config.export_dir(output_dir)?)
            } else {
                None
            };
            commands::ratio::run(&config, &input, range.range(), export_dir, output)
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "trend", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
