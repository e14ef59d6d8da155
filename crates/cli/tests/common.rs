// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `trend` binary with environment isolated from the caller.
pub fn trend() -> Command {
    let mut cmd = cargo_bin_cmd!("trend");
    cmd.env_remove("TREND_INPUT")
        .env_remove("TREND_CONFIG")
        .env_remove("TREND_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// Issues used across scenarios: five in 2023, two in 2022, one unparseable.
pub const SAMPLE: &str = r#"[
  {"number": 1, "created_date": "2023-01-05T10:00:00Z", "state": "open", "events": []},
  {"number": 2, "created_date": "2023-01-20T12:30:00Z", "state": "closed", "events": [{"event_type": "closed"}]},
  {"number": 3, "created_date": "2023-02-03T08:00:00Z", "state": "closed", "events": [{"event_type": "closed"}, {"event_type": "reopened"}, {"event_type": "closed"}]},
  {"number": 4, "created_date": "2023-02-14T09:15:00+02:00", "state": "open", "events": []},
  {"number": 5, "created_date": "2023-03-09T17:45:00Z", "state": "closed", "events": []},
  {"number": 6, "created_date": "2022-06-01T00:00:00Z", "state": "closed", "events": []},
  {"number": 7, "created_date": "2022-11-30T23:59:59Z", "state": "open", "events": []},
  {"number": 8, "created_date": "sometime last year", "state": "open", "events": []}
]"#;

/// Temp directory holding `issues.json` with [`SAMPLE`].
pub fn sample_dir() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("issues.json");
    fs::write(&path, SAMPLE).unwrap();
    (temp, path)
}
