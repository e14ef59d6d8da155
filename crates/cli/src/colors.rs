// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for charts and help output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes shared by help and chart output.
pub mod codes {
    /// Section headers and chart titles: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and bucket labels: light grey
    pub const LITERAL: u8 = 250;
    /// Counts, hints and placeholders: medium grey
    pub const CONTEXT: u8 = 245;
    /// Chart bars: teal
    pub const BAR: u8 = 30;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Wrap text in a 256-color foreground escape sequence.
pub fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{}", codes::RESET)
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

pub fn bar(text: &str) -> String {
    paint(codes::BAR, text)
}

/// Colorize an examples help block.
///
/// Lines ending with `:` become headers; in `  trend cmd    Description`
/// lines the command part (before the first run of 2+ spaces) is literal.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_examples(text)
}

fn colorize_examples(text: &str) -> String {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match trimmed.find("  ") {
                Some(split) => {
                    let (cmd, desc) = trimmed.split_at(split);
                    format!("{indent}{}{desc}", literal(cmd))
                }
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
