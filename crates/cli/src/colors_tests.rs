// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

/// Strip all ANSI escape sequences from a string
fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm'
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[parameterized(
    header = { crate::colors::header("Title"), codes::HEADER },
    literal = { crate::colors::literal("trend"), codes::LITERAL },
    context = { crate::colors::context("3"), codes::CONTEXT },
    bar = { crate::colors::bar("███"), codes::BAR },
)]
fn test_paint_wraps_in_code(painted: String, code: u8) {
    assert!(painted.starts_with(&format!("\x1b[38;5;{code}m")));
    assert!(painted.ends_with(codes::RESET));
}

#[test]
fn test_strip_ansi_recovers_text() {
    assert_eq!(strip_ansi(&header("Issue Status Summary")), "Issue Status Summary");
}

#[test]
fn test_examples_colorizes_headers_and_commands() {
    let text = "Examples:\n  trend trend --year 2023    Monthly trend for 2023";
    let colored = colorize_examples(text);

    let mut lines = colored.lines();
    assert_eq!(lines.next().unwrap(), header("Examples:"));
    let example = lines.next().unwrap();
    assert!(example.starts_with(&format!("  {}", literal("trend trend --year 2023"))));
    assert!(example.ends_with("    Monthly trend for 2023"));
    assert_eq!(strip_ansi(&colored), text);
}

#[test]
fn test_examples_leaves_plain_lines() {
    let text = "no double spaces here";
    assert_eq!(colorize_examples(text), text);
}
