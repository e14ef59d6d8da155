// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Presentation configuration.
//!
//! Configuration is stored in TOML and includes:
//! - `input`: Default issue file when `--input` is not given
//! - `output_dir`: Directory that exported charts are written to
//! - `bar_width`: Width in characters of the longest chart bar
//!
//! Lookup order: `--config`, `TREND_CONFIG`, `./trend.toml`, then
//! `<config dir>/trend/config.toml`. With none present, defaults apply.
//! Relative paths inside a config file resolve against that file's directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const LOCAL_CONFIG_NAME: &str = "trend.toml";
const USER_CONFIG_DIR: &str = "trend";
const USER_CONFIG_NAME: &str = "config.toml";
const MAX_BAR_WIDTH: usize = 200;

/// Presentation settings injected into the chart renderers and exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Issue file used when no `--input` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    /// Where `ratio --export` writes its files (default: "charts").
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Width of the longest bar in text charts (default: 40).
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
    /// Directory of the file this config was loaded from.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("charts")
}

fn default_bar_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: None,
            output_dir: default_output_dir(),
            bar_width: default_bar_width(),
            base_dir: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Finds and loads the active configuration.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let user_dir = dirs::config_dir();
        match locate(explicit, env::config_path(), &cwd, user_dir.as_deref()) {
            Some(path) => Config::load(&path),
            None => Ok(Config::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.bar_width == 0 || self.bar_width > MAX_BAR_WIDTH {
            return Err(Error::Config(format!(
                "bar_width must be between 1 and {MAX_BAR_WIDTH}, got {}",
                self.bar_width
            )));
        }
        Ok(())
    }

    /// Picks the input file: the command-line value wins over the config.
    pub fn input_path(&self, cli_input: Option<PathBuf>) -> Result<PathBuf> {
        match cli_input {
            Some(path) => Ok(path),
            None => self
                .input
                .as_deref()
                .map(|p| self.resolve(p))
                .ok_or(Error::InputRequired),
        }
    }

    /// Export directory, with an optional command-line override.
    pub fn export_dir(&self, override_dir: Option<PathBuf>) -> Result<PathBuf> {
        let dir = match override_dir {
            Some(dir) => dir,
            None => self.resolve(&self.output_dir),
        };
        if dir.as_os_str().is_empty() {
            return Err(Error::ExportPathEmpty);
        }
        Ok(dir)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() && !path.as_os_str().is_empty() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Resolves which config file applies, if any.
///
/// An explicit path (flag or environment) is returned even if missing so
/// that loading reports the error; discovered locations must exist.
fn locate(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    cwd: &Path,
    user_dir: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if from_env.is_some() {
        return from_env;
    }
    let local = cwd.join(LOCAL_CONFIG_NAME);
    if local.is_file() {
        return Some(local);
    }
    user_dir
        .map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_NAME))
        .filter(|path| path.is_file())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
