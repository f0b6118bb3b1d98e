// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Running a validated command.

use thiserror::Error;
use vox_core::{ExecutionResult, ParsedCommand};
use vox_shell::CommandExecutor;

/// A rejected [`ParsedCommand`] was handed to [`execute_parsed_command`].
///
/// This is a wiring bug in the caller, not a runtime outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot execute invalid command: {reason}")]
pub struct InvalidInvocation {
    pub reason: String,
}

/// Execute `parsed` as an `&&` chain.
///
/// Timeout and working directory come from `executor`; results are in
/// execution order and stop at the first failing segment.
pub async fn execute_parsed_command(
    parsed: &ParsedCommand,
    executor: &CommandExecutor,
) -> Result<Vec<ExecutionResult>, InvalidInvocation> {
    if !parsed.is_valid() {
        return Err(InvalidInvocation { reason: parsed.rejection_reason().to_string() });
    }
    tracing::debug!(command = parsed.command(), "executing parsed command");
    Ok(executor.execute_chain(parsed.command()).await)
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
