// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured outcome of running one command segment.

use serde::Serialize;
use std::time::Duration;

/// Exit code reported for failures that happen before or instead of a
/// normal process exit (rejection, parse error, timeout).
pub const INTERNAL_FAILURE_CODE: i32 = -1;

/// Exit code reported when the program could not be found.
pub const NOT_FOUND_CODE: i32 = 127;

/// Exit code reported when the program exists but cannot be executed.
pub const NOT_EXECUTABLE_CODE: i32 = 126;

/// What happened to a command segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecOutcome {
    /// Process ran and exited with status 0.
    Success,
    /// Process ran and exited with a non-zero status.
    NonZeroExit,
    /// Raw command contained disallowed shell metacharacters.
    MetacharacterRejected,
    /// Command could not be split into arguments.
    ParseError,
    /// Process exceeded its deadline and was killed.
    Timeout,
    /// Program does not exist.
    NotFound,
    /// Program exists but could not be executed.
    PermissionDenied,
    /// Working directory does not exist or is not a directory.
    InvalidCwd,
    /// Any other failure to start or wait on the process.
    SpawnFailed,
}

crate::simple_display! {
    ExecOutcome {
        Success => "success",
        NonZeroExit => "non-zero exit",
        MetacharacterRejected => "metacharacter rejected",
        ParseError => "parse error",
        Timeout => "timeout",
        NotFound => "not found",
        PermissionDenied => "permission denied",
        InvalidCwd => "invalid working directory",
        SpawnFailed => "spawn failed",
    }
}

/// Result of executing (or refusing to execute) one command segment.
///
/// Immutable once built: fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    command: String,
    success: bool,
    stdout: String,
    stderr: String,
    return_code: i32,
    outcome: ExecOutcome,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    duration: Duration,
}

impl ExecutionResult {
    /// Result of a process that ran to completion.
    pub fn completed(
        command: impl Into<String>,
        return_code: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
        duration: Duration,
    ) -> Self {
        let outcome =
            if return_code == 0 { ExecOutcome::Success } else { ExecOutcome::NonZeroExit };
        Self {
            command: command.into(),
            success: return_code == 0,
            stdout: stdout.into(),
            stderr: stderr.into(),
            return_code,
            outcome,
            duration,
        }
    }

    /// Result of a command that never produced a normal exit.
    ///
    /// `stderr` must be a complete sentence; it is surfaced to users as-is.
    pub fn failed(
        command: impl Into<String>,
        outcome: ExecOutcome,
        return_code: i32,
        stderr: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            command: command.into(),
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
            return_code,
            outcome,
            duration,
        }
    }

    /// The exact segment that was run.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// True iff the process exited with status 0 and nothing failed internally.
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn return_code(&self) -> i32 {
        self.return_code
    }

    pub fn outcome(&self) -> ExecOutcome {
        self.outcome
    }

    /// Wall-clock time spent on the segment.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

#[cfg(test)]
#[path = "execution_tests.rs"]
mod tests;
