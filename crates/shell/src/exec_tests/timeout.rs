// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for deadline handling.

use std::time::{Duration, Instant};

use crate::exec::CommandExecutor;
use vox_core::ExecOutcome;

#[tokio::test]
async fn timeout_kills_long_command() {
    let executor = CommandExecutor::new().timeout_secs(1).unwrap();
    let start = Instant::now();

    let result = executor.execute("sleep 60").await;

    assert!(!result.success());
    assert_eq!(result.return_code(), -1);
    assert_eq!(result.outcome(), ExecOutcome::Timeout);
    assert!(result.stderr().to_lowercase().contains("timed out"));
    assert!(result.stderr().contains("1 seconds"));
    assert!(start.elapsed() < Duration::from_secs(10), "took {:?}", start.elapsed());
}

#[tokio::test]
async fn fast_command_finishes_within_timeout() {
    let executor = CommandExecutor::new().timeout(Duration::from_millis(2000)).unwrap();
    let result = executor.execute("echo quick").await;
    assert!(result.success());
    assert_eq!(result.stdout(), "quick\n");
}

#[tokio::test]
async fn timeout_covers_inherited_pipes() {
    // The child exits at once but its background grandchild holds stdout.
    // Only the direct child is killed on timeout; the grandchild is left
    // running until its own `sleep` ends.
    let executor = CommandExecutor::new().timeout_secs(1).unwrap();
    let start = Instant::now();

    let result = executor.execute("sh -c 'sleep 30 & echo started'").await;

    assert_eq!(result.outcome(), ExecOutcome::Timeout);
    assert!(start.elapsed() < Duration::from_secs(10), "took {:?}", start.elapsed());
}
