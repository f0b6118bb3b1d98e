// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for CommandExecutor builder methods.

use std::time::Duration;

use crate::exec::{CommandExecutor, ExecConfigError};
use crate::split::SplitStyle;

// ---------------------------------------------------------------------------
// Working directory
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cwd_changes_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    // Canonicalize to resolve symlinks (e.g., /var -> /private/var on macOS)
    let canonical_dir = dir.path().canonicalize().unwrap();

    let result = CommandExecutor::new().cwd(dir.path()).execute("pwd").await;

    assert!(result.success());
    assert_eq!(result.stdout().trim(), canonical_dir.to_str().unwrap());
}

#[tokio::test]
async fn default_cwd_is_inherited() {
    let result = CommandExecutor::new().execute("pwd").await;
    let expected = std::env::current_dir().unwrap().canonicalize().unwrap();
    assert_eq!(result.stdout().trim(), expected.to_str().unwrap());
}

// ---------------------------------------------------------------------------
// Environment variables
// ---------------------------------------------------------------------------

#[tokio::test]
async fn env_passes_variable_to_process() {
    let result = CommandExecutor::new()
        .env("VOX_TEST_VAR", "test_value")
        .execute("printenv VOX_TEST_VAR")
        .await;

    assert!(result.success());
    assert_eq!(result.stdout(), "test_value\n");
}

#[tokio::test]
async fn envs_passes_multiple_variables_to_process() {
    let result = CommandExecutor::new()
        .envs([("VAR_A", "alpha"), ("VAR_B", "beta")])
        .execute("sh -c 'echo $VAR_A $VAR_B'")
        .await;

    assert!(result.success());
    assert_eq!(result.stdout(), "alpha beta\n");
}

// ---------------------------------------------------------------------------
// Timeout configuration
// ---------------------------------------------------------------------------

#[test]
fn default_timeout_is_thirty_seconds() {
    assert_eq!(CommandExecutor::new().timeout_duration(), Duration::from_secs(30));
}

#[test]
fn zero_timeout_is_rejected() {
    let err = CommandExecutor::new().timeout(Duration::ZERO).unwrap_err();
    assert_eq!(err, ExecConfigError::ZeroTimeout);
    assert!(CommandExecutor::new().timeout_secs(0).is_err());
}

#[test]
fn timeout_secs_sets_duration() {
    let executor = CommandExecutor::new().timeout_secs(5).unwrap();
    assert_eq!(executor.timeout_duration(), Duration::from_secs(5));
}

// ---------------------------------------------------------------------------
// Split style
// ---------------------------------------------------------------------------

#[tokio::test]
async fn windows_split_keeps_backslashes() {
    let result = CommandExecutor::new()
        .split_style(SplitStyle::Windows)
        .execute(r#"printf "%s" a\b"#)
        .await;
    assert!(result.success());
    assert_eq!(result.stdout(), r"a\b");
}
