// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(fg(colors::codes::HEADER))
        .usage(fg(colors::codes::HEADER))
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_analysis}
  {trend}       Issue creation trend by month or year
  {ratio}       Open / closed / reopened status ratio

{header_setup}
  {completion}  Generate shell completions
",
        header_analysis = header("Analysis:"),
        header_setup = header("Setup:"),
        trend = literal("trend"),
        ratio = literal("ratio"),
        completion = literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  trend -i issues.json trend              Yearly creation trend
  trend -i issues.json trend -y 2023      Monthly trend within 2023
  trend -i issues.json ratio              Status ratio over all issues
  trend -i issues.json ratio --export     Save the ratio chart to disk",
    )
}

fn header(text: &str) -> String {
    if colors::should_colorize() {
        colors::header(text)
    } else {
        text.to_string()
    }
}

fn literal(text: &str) -> String {
    if colors::should_colorize() {
        colors::literal(text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
