// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed LLM command output.
//!
//! A [`ParsedCommand`] is built once by the output parser and never mutated.
//! Later pipeline stages (catalog validation) produce a new value instead of
//! editing an existing one, so fields are private and exposed read-only.

use serde::Serialize;

/// Why a piece of LLM output was not accepted as a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// Nothing usable remained after fence stripping and trimming.
    EmptyOutput,
    /// The model declined to produce a command.
    Refusal,
    /// A chain segment starts with a name missing from the catalog.
    UnknownCommand,
}

crate::simple_display! {
    RejectionKind {
        EmptyOutput => "empty output",
        Refusal => "refusal",
        UnknownCommand => "unknown command",
    }
}

/// Result of parsing raw LLM output into a CLI command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    raw: String,
    command: String,
    is_valid: bool,
    rejection_reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<RejectionKind>,
}

impl ParsedCommand {
    /// An accepted command.
    pub fn valid(raw: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            command: command.into(),
            is_valid: true,
            rejection_reason: String::new(),
            rejection: None,
        }
    }

    /// A rejected output with no command text.
    pub fn rejected(
        raw: impl Into<String>,
        kind: RejectionKind,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            raw: raw.into(),
            command: String::new(),
            is_valid: false,
            rejection_reason: reason.into(),
            rejection: Some(kind),
        }
    }

    /// A new, rejected copy of this command.
    ///
    /// `raw` and `command` are carried over so callers can still report what
    /// the model asked for.
    pub fn reject(&self, kind: RejectionKind, reason: impl Into<String>) -> Self {
        Self {
            raw: self.raw.clone(),
            command: self.command.clone(),
            is_valid: false,
            rejection_reason: reason.into(),
            rejection: Some(kind),
        }
    }

    /// Untouched original LLM output.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Cleaned command text. Only meaningful when [`Self::is_valid`].
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Human-readable reason; empty for valid commands.
    pub fn rejection_reason(&self) -> &str {
        &self.rejection_reason
    }

    pub fn rejection(&self) -> Option<RejectionKind> {
        self.rejection
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
