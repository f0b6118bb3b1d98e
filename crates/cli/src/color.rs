// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use std::io::IsTerminal;

pub mod codes {
    /// Section headers and command echoes: steel blue
    pub const HEADER: u8 = 74;
    /// Literals in help output: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders in help output: medium grey
    pub const CONTEXT: u8 = 245;
    /// Durations, paths and other secondary text: darker grey
    pub const MUTED: u8 = 240;
    /// Failed segments: soft red
    pub const ERROR: u8 = 167;
}

const RESET: &str = "\x1b[0m";

/// Whether stdout gets ANSI colors.
///
/// Priority: `NO_COLOR=1` disables, `COLOR=1` forces, otherwise TTY check.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

/// Help-output styles in the project palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(fg(codes::HEADER))
        .literal(fg(codes::LITERAL))
        .placeholder(fg(codes::CONTEXT))
}

fn paint(code: u8, text: &str) -> String {
    if should_colorize() {
        format!("\x1b[38;5;{code}m{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn muted(text: &str) -> String {
    paint(codes::MUTED, text)
}

pub fn error(text: &str) -> String {
    paint(codes::ERROR, text)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
