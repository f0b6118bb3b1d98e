// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Allow-list check of chain segments against the command catalog.

use std::collections::BTreeSet;

use vox_core::{ParsedCommand, RejectionKind};
use vox_shell::split_chain;

/// Check every `&&` segment's leading token against `known_commands`.
///
/// Already-invalid input and an empty catalog (validation disabled) pass
/// through unchanged. The first unknown leading token rejects the whole
/// chain with a new [`ParsedCommand`].
pub fn validate_against_catalog(
    parsed: ParsedCommand,
    known_commands: &BTreeSet<String>,
) -> ParsedCommand {
    if !parsed.is_valid() || known_commands.is_empty() {
        return parsed;
    }

    let unknown = split_chain(parsed.command())
        .into_iter()
        .map(|segment| segment.split_whitespace().next().unwrap_or_default())
        .find(|token| !known_commands.contains(*token));

    match unknown {
        Some(token) => {
            let available = known_commands.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
            tracing::info!(token, "command not in catalog");
            let reason = format!("Unknown command: '{token}'. Available: {available}.");
            parsed.reject(RejectionKind::UnknownCommand, reason)
        }
        None => parsed,
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
