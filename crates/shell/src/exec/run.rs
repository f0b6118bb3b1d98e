// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawning a single argv command with a deadline.

use std::io::ErrorKind;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::task::JoinHandle;

use vox_core::{
    ExecOutcome, ExecutionResult, INTERNAL_FAILURE_CODE, NOT_EXECUTABLE_CODE, NOT_FOUND_CODE,
};

use super::CommandExecutor;
use crate::guard::{find_disallowed, REJECTED_MESSAGE};
use crate::split::split_command;

// ---------------------------------------------------------------------------
// Single command
// ---------------------------------------------------------------------------

pub(super) async fn run_command(executor: &CommandExecutor, command: &str) -> ExecutionResult {
    let start = Instant::now();

    if let Some(sequence) = find_disallowed(command) {
        tracing::warn!(command, sequence, "rejected command containing shell metacharacters");
        return ExecutionResult::failed(
            command,
            ExecOutcome::MetacharacterRejected,
            INTERNAL_FAILURE_CODE,
            REJECTED_MESSAGE,
            start.elapsed(),
        );
    }

    let argv = match split_command(command, executor.split_style) {
        Ok(argv) => argv,
        Err(e) => {
            tracing::warn!(command, error = %e, "failed to split command");
            return parse_failure(command, &format!("Failed to parse command: {e}."), start);
        }
    };
    let Some((program, args)) = argv.split_first() else {
        return parse_failure(command, "Failed to parse command: no program to run.", start);
    };

    if let Some(dir) = &executor.cwd {
        if !dir.is_dir() {
            return ExecutionResult::failed(
                command,
                ExecOutcome::InvalidCwd,
                INTERNAL_FAILURE_CODE,
                format!("Working directory does not exist: {}.", dir.display()),
                start.elapsed(),
            );
        }
    }

    let cmd_span = tracing::info_span!(
        "shell.cmd",
        cmd = %program,
        args = ?args,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    let mut process = tokio::process::Command::new(program);
    process.args(args);
    process.envs(&executor.env);
    if let Some(dir) = &executor.cwd {
        process.current_dir(dir);
    }
    process.stdin(Stdio::null());
    process.stdout(Stdio::piped());
    process.stderr(Stdio::piped());
    process.kill_on_drop(true);

    let mut child = match process.spawn() {
        Ok(child) => child,
        Err(source) => return spawn_failure(command, program, &source, start),
    };

    let stdout_task = tokio::spawn(read_stream(child.stdout.take()));
    let stderr_task = tokio::spawn(read_stream(child.stderr.take()));
    let deadline = tokio::time::Instant::now() + executor.timeout;

    let status = match tokio::time::timeout_at(deadline, child.wait()).await {
        Ok(Ok(status)) => status,
        Ok(Err(source)) => {
            stdout_task.abort();
            stderr_task.abort();
            return ExecutionResult::failed(
                command,
                ExecOutcome::SpawnFailed,
                INTERNAL_FAILURE_CODE,
                format!("Failed while waiting for '{program}': {source}."),
                start.elapsed(),
            );
        }
        Err(_) => {
            // Kills the direct child only, not its process group.
            if let Err(e) = child.kill().await {
                tracing::warn!(command, error = %e, "failed to kill timed out process");
            }
            stdout_task.abort();
            stderr_task.abort();
            return timed_out(command, executor.timeout, start);
        }
    };

    // A grandchild may keep the pipes open after the child exits.
    let Some((stdout, stderr)) = collect_output(deadline, stdout_task, stderr_task).await else {
        return timed_out(command, executor.timeout, start);
    };

    let duration = start.elapsed();
    let exit_code = exit_code(status);
    cmd_span.record("exit_code", exit_code);
    cmd_span.record("duration_ms", duration.as_millis() as u64);

    ExecutionResult::completed(
        command,
        exit_code,
        String::from_utf8_lossy(&stdout),
        String::from_utf8_lossy(&stderr),
        duration,
    )
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn read_stream<R: AsyncRead + Unpin>(stream: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        if let Err(e) = stream.read_to_end(&mut buf).await {
            tracing::debug!(error = %e, "output stream closed with error");
        }
    }
    buf
}

async fn collect_output(
    deadline: tokio::time::Instant,
    stdout_task: JoinHandle<Vec<u8>>,
    stderr_task: JoinHandle<Vec<u8>>,
) -> Option<(Vec<u8>, Vec<u8>)> {
    let stdout_abort = stdout_task.abort_handle();
    let stderr_abort = stderr_task.abort_handle();
    let both = async {
        let stdout = stdout_task.await.unwrap_or_default();
        let stderr = stderr_task.await.unwrap_or_default();
        (stdout, stderr)
    };
    match tokio::time::timeout_at(deadline, both).await {
        Ok(output) => Some(output),
        Err(_) => {
            stdout_abort.abort();
            stderr_abort.abort();
            None
        }
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    // Killed by a signal: report the negated signal number.
    status.code().or_else(|| status.signal().map(|sig| -sig)).unwrap_or(INTERNAL_FAILURE_CODE)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(INTERNAL_FAILURE_CODE)
}

fn parse_failure(command: &str, message: &str, start: Instant) -> ExecutionResult {
    ExecutionResult::failed(
        command,
        ExecOutcome::ParseError,
        INTERNAL_FAILURE_CODE,
        message,
        start.elapsed(),
    )
}

fn spawn_failure(
    command: &str,
    program: &str,
    source: &std::io::Error,
    start: Instant,
) -> ExecutionResult {
    tracing::warn!(command, program, error = %source, "failed to spawn command");
    let (outcome, code, message) = match source.kind() {
        ErrorKind::NotFound => {
            (ExecOutcome::NotFound, NOT_FOUND_CODE, format!("Command not found: '{program}'."))
        }
        ErrorKind::PermissionDenied => (
            ExecOutcome::PermissionDenied,
            NOT_EXECUTABLE_CODE,
            format!("Permission denied: '{program}' is not executable."),
        ),
        _ => (
            ExecOutcome::SpawnFailed,
            INTERNAL_FAILURE_CODE,
            format!("Failed to start '{program}': {source}."),
        ),
    };
    ExecutionResult::failed(command, outcome, code, message, start.elapsed())
}

fn timed_out(command: &str, timeout: Duration, start: Instant) -> ExecutionResult {
    tracing::warn!(command, timeout_secs = timeout.as_secs_f64(), "command timed out");
    ExecutionResult::failed(
        command,
        ExecOutcome::Timeout,
        INTERNAL_FAILURE_CODE,
        format!("Command timed out after {} seconds.", format_secs(timeout)),
        start.elapsed(),
    )
}

/// `30` for whole seconds, `0.5` otherwise.
fn format_secs(d: Duration) -> String {
    if d.subsec_nanos() == 0 {
        d.as_secs().to_string()
    } else {
        format!("{}", d.as_secs_f64())
    }
}
