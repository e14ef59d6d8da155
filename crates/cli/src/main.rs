// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use tracing_subscriber::EnvFilter;
use trendrs::Cli;

fn main() {
    setup_logging();

    let cli = Cli::parse();
    if let Err(e) = trendrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so that chart and JSON output stay clean on stdout.
fn setup_logging() {
    let filter = EnvFilter::try_new(trendrs::env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(trendrs::env::DEFAULT_LOG));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!trendrs::env::no_color())
        .init();
}
