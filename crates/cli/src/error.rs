// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the trendrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no input file specified\n  hint: pass --input <path>, set TREND_INPUT, or set `input` in trend.toml")]
    InputRequired,

    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("export path cannot be empty")]
    ExportPathEmpty,

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Core(#[from] trend_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for trendrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
