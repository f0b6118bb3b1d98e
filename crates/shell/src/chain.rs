// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `&&` chain splitting.

/// Operator separating chain segments.
pub const CHAIN_OPERATOR: &str = "&&";

/// Split `command_string` into trimmed, non-empty segments.
///
/// Splitting is on the literal `&&` substring, quotes are not considered:
/// `echo "a && b"` yields two segments.
pub fn split_chain(command_string: &str) -> Vec<&str> {
    command_string
        .split(CHAIN_OPERATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
