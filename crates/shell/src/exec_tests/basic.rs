// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for simple commands, exit codes and output capture.

use super::{executor, run_async};
use vox_core::ExecOutcome;

// ---------------------------------------------------------------------------
// Simple commands
// ---------------------------------------------------------------------------

#[tokio::test]
async fn simple_echo() {
    let result = executor().execute("echo hello").await;
    assert!(result.success());
    assert_eq!(result.return_code(), 0);
    assert_eq!(result.stdout(), "hello\n");
    assert_eq!(result.stderr(), "");
    assert_eq!(result.command(), "echo hello");
    assert_eq!(result.outcome(), ExecOutcome::Success);
}

#[tokio::test]
async fn quoted_argument_is_one_word() {
    let result = executor().execute(r#"printf "%s|" "hello world" x"#).await;
    // `|` inside the format string trips the metacharacter guard.
    assert!(!result.success());

    let result = executor().execute(r#"printf "%s." "hello world" x"#).await;
    assert!(result.success());
    assert_eq!(result.stdout(), "hello world.x.");
}

#[tokio::test]
async fn argv_is_not_shell_expanded() {
    let result = executor().execute("echo $HOME *").await;
    assert!(result.success());
    assert_eq!(result.stdout(), "$HOME *\n");
}

#[tokio::test]
async fn hash_word_is_an_argument() {
    let result = executor().execute("echo hello #world").await;
    assert!(result.success());
    assert_eq!(result.stdout(), "hello #world\n");
}

#[tokio::test]
async fn redirect_is_a_literal_argument() {
    let dir = tempfile::tempdir().unwrap();
    let result = executor().cwd(dir.path()).execute("echo hi > out.txt").await;
    assert!(result.success());
    assert_eq!(result.stdout(), "hi > out.txt\n");
    assert!(!dir.path().join("out.txt").exists());
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[yare::parameterized(
    true_cmd  = { "true", true, 0 },
    false_cmd = { "false", false, 1 },
    exit_3    = { "sh -c 'exit 3'", false, 3 },
)]
fn exit_code(command: &str, should_succeed: bool, code: i32) {
    run_async(async {
        let result = executor().execute(command).await;
        assert_eq!(result.success(), should_succeed);
        assert_eq!(result.return_code(), code);
        let expected =
            if should_succeed { ExecOutcome::Success } else { ExecOutcome::NonZeroExit };
        assert_eq!(result.outcome(), expected);
    });
}

#[tokio::test]
async fn stderr_is_captured_on_failure() {
    let result = executor().execute("ls /nonexistent_path_xyz_99999").await;
    assert!(!result.success());
    assert_ne!(result.return_code(), 0);
    assert!(!result.stderr().is_empty());
}

#[tokio::test]
async fn stdout_and_stderr_are_separate() {
    let result = executor().execute("sh -c 'echo out && echo err >&2'").await;
    assert!(result.success());
    assert_eq!(result.stdout(), "out\n");
    assert_eq!(result.stderr(), "err\n");
}

#[tokio::test]
async fn stdin_is_closed() {
    // `cat` with no input must see EOF immediately instead of blocking.
    let result = executor().execute("cat").await;
    assert!(result.success());
    assert_eq!(result.stdout(), "");
}

#[tokio::test]
async fn embedded_chain_operator_is_an_argument() {
    let result = executor().execute("echo a && echo b").await;
    assert!(result.success());
    assert_eq!(result.stdout(), "a && echo b\n");
}
