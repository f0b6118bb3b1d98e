// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote-aware splitting of a command string into argv.

use std::borrow::Cow;

use thiserror::Error;

/// Word-splitting rules used to build argv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitStyle {
    /// POSIX shell rules: single/double quotes and backslash escapes.
    #[cfg_attr(not(windows), default)]
    Posix,
    /// Whitespace splitting with double-quote grouping; backslashes and
    /// single quotes are literal.
    #[cfg_attr(windows, default)]
    Windows,
}

impl SplitStyle {
    /// Rules for the platform this binary was built for.
    pub fn native() -> Self {
        Self::default()
    }
}

/// Splitting failed because the command is not well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("unbalanced quotes or trailing escape character")]
    Unbalanced,
    #[error("no closing quotation")]
    UnterminatedQuote,
}

/// Split `command` into argv using `style`.
///
/// An all-whitespace command yields an empty vector.
pub fn split_command(command: &str, style: SplitStyle) -> Result<Vec<String>, SplitError> {
    match style {
        SplitStyle::Posix => {
            shlex::split(&escape_comment_marks(command)).ok_or(SplitError::Unbalanced)
        }
        SplitStyle::Windows => split_windows(command),
    }
}

/// Escape every unquoted `#` that starts a word.
///
/// `shlex` drops such a word and the rest of the line as a comment; argv
/// splitting keeps `#` literal.
fn escape_comment_marks(command: &str) -> Cow<'_, str> {
    if !command.contains('#') {
        return Cow::Borrowed(command);
    }

    let mut out = String::with_capacity(command.len() + 4);
    let mut chars = command.chars();
    let mut quote: Option<char> = None;
    let mut word_start = true;

    while let Some(c) = chars.next() {
        match quote {
            Some('\'') => {
                if c == '\'' {
                    quote = None;
                }
                out.push(c);
            }
            Some(_) => {
                out.push(c);
                if c == '\\' {
                    out.extend(chars.next());
                } else if c == '"' {
                    quote = None;
                }
            }
            None if c.is_whitespace() => {
                word_start = true;
                out.push(c);
            }
            None => {
                if c == '#' && word_start {
                    out.push('\\');
                }
                word_start = false;
                out.push(c);
                match c {
                    '\\' => out.extend(chars.next()),
                    '\'' | '"' => quote = Some(c),
                    _ => {}
                }
            }
        }
    }

    Cow::Owned(out)
}

fn split_windows(command: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_quotes = false;

    for c in command.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_quotes {
        return Err(SplitError::UnterminatedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
