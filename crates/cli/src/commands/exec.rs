// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vox exec`: run a command chain directly, no LLM involved.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use vox_core::ExecutionResult;
use vox_shell::CommandExecutor;

use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, print_block, OutputFormat};

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Command, optionally `&&`-chained (quote it as one argument)
    pub command: String,

    /// Per-segment timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = CommandExecutor::DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Working directory for every segment
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

pub async fn handle(args: ExecArgs, format: OutputFormat) -> Result<()> {
    let mut executor = CommandExecutor::new().timeout_secs(args.timeout)?;
    if let Some(dir) = args.cwd {
        executor = executor.cwd(dir);
    }

    let results = executor.execute_chain(&args.command).await;
    format_or_json(format, &results, || {
        for result in &results {
            print_result(result);
        }
    })?;

    match exit_code(&results) {
        0 => Ok(()),
        code => Err(ExitError::silent(code).into()),
    }
}

fn print_result(result: &ExecutionResult) {
    let took = color::muted(&format!("({:.2}s)", result.duration().as_secs_f64()));
    let echo = format!("$ {}", result.command());
    if result.success() {
        println!("{} {took}", color::header(&echo));
    } else {
        println!("{} {took}", color::error(&echo));
    }
    print_block(result.stdout());
    if !result.stderr().is_empty() {
        eprint!("{}", result.stderr());
        if !result.stderr().ends_with('\n') {
            eprintln!();
        }
    }
}

/// 0 when every segment succeeded; otherwise the failing segment's status,
/// or 1 when that status is a sentinel or signal.
pub(crate) fn exit_code(results: &[ExecutionResult]) -> i32 {
    match results.iter().find(|r| !r.success()) {
        None => 0,
        Some(failed) if failed.return_code() > 0 => failed.return_code(),
        Some(_) => 1,
    }
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
