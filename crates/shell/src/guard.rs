// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell metacharacter denylist.
//!
//! Checked on the raw string, before splitting. Quoting does not exempt a
//! sequence: `echo 'a;b'` is rejected.

/// Sequences that make a command unconditionally rejected.
pub const DISALLOWED_SEQUENCES: &[&str] = &[";", "|", "`", "$("];

/// Message reported for rejected commands.
pub const REJECTED_MESSAGE: &str =
    "Command rejected: disallowed shell metacharacters (;, |, `, $().";

/// Returns the first disallowed sequence found in `command`, if any.
pub fn find_disallowed(command: &str) -> Option<&'static str> {
    DISALLOWED_SEQUENCES.iter().copied().find(|seq| command.contains(seq))
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
