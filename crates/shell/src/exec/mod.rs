// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-less command execution.
//!
//! [`CommandExecutor`] runs one command as argv (no shell interpreter) with a
//! per-process timeout and optional working directory, and runs `&&` chains
//! segment by segment, halting on the first failure.

mod error;
mod run;

pub use error::ExecConfigError;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use vox_core::ExecutionResult;

use crate::chain::split_chain;
use crate::split::SplitStyle;

/// Executes commands with a fixed timeout, working directory and environment.
///
/// Settings live on the executor value, never in process-wide state: build
/// one per call site (or per turn) and pass it by reference.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    timeout: Duration,
    cwd: Option<PathBuf>,
    env: HashMap<String, String>,
    split_style: SplitStyle,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    /// Timeout used when none is configured.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Executor with the default timeout, inherited cwd and native splitting.
    pub fn new() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
            cwd: None,
            env: HashMap::new(),
            split_style: SplitStyle::native(),
        }
    }

    /// Set the per-process timeout. Zero is rejected.
    pub fn timeout(mut self, timeout: Duration) -> Result<Self, ExecConfigError> {
        if timeout.is_zero() {
            return Err(ExecConfigError::ZeroTimeout);
        }
        self.timeout = timeout;
        Ok(self)
    }

    /// Set the per-process timeout in whole seconds. Zero is rejected.
    pub fn timeout_secs(self, secs: u64) -> Result<Self, ExecConfigError> {
        self.timeout(Duration::from_secs(secs))
    }

    /// Run processes in `dir`. A missing directory is reported per command.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Add an environment variable for spawned processes.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Add multiple environment variables for spawned processes.
    pub fn envs<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in vars {
            self.env.insert(k.into(), v.into());
        }
        self
    }

    /// Override the argv splitting rules.
    pub fn split_style(mut self, style: SplitStyle) -> Self {
        self.split_style = style;
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        self.timeout
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Run a single command (no `&&` handling).
    ///
    /// Every failure mode is returned as a failed [`ExecutionResult`]; this
    /// never errors or panics on bad input.
    pub async fn execute(&self, command: &str) -> ExecutionResult {
        run::run_command(self, command).await
    }

    /// Run `&&`-separated segments in order, stopping after the first failure.
    ///
    /// The returned list holds one result per segment that ran, the failing
    /// one included. An empty or operator-only string yields no results.
    pub async fn execute_chain(&self, command_string: &str) -> Vec<ExecutionResult> {
        let segments = split_chain(command_string);
        let total = segments.len();
        let mut results = Vec::with_capacity(total);

        for (index, segment) in segments.into_iter().enumerate() {
            let result = self.execute(segment).await;
            let succeeded = result.success();
            results.push(result);
            if !succeeded {
                tracing::info!(
                    segment = index + 1,
                    total,
                    skipped = total - index - 1,
                    "chain halted on failed segment"
                );
                break;
            }
        }

        results
    }
}
