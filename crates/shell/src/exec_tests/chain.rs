// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for `&&` chains and halt-on-failure.

use super::{executor, run_async};
use crate::exec::CommandExecutor;
use vox_core::ExecOutcome;

#[tokio::test]
async fn single_command() {
    let results = executor().execute_chain("echo one").await;
    assert_eq!(results.len(), 1);
    assert!(results[0].success());
    assert_eq!(results[0].stdout(), "one\n");
}

#[tokio::test]
async fn all_segments_run_in_order() {
    let results = executor().execute_chain("echo a && echo b && echo c").await;
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.success()));
    let outputs: Vec<_> = results.iter().map(|r| r.stdout()).collect();
    assert_eq!(outputs, ["a\n", "b\n", "c\n"]);
    assert_eq!(results[1].command(), "echo b");
}

#[tokio::test]
async fn halts_on_first_failure() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("never");
    let chain = format!("echo ok && false && touch {}", marker.display());

    let results = executor().execute_chain(&chain).await;

    assert_eq!(results.len(), 2);
    assert!(results[0].success());
    assert!(!results[1].success());
    assert_eq!(results[1].command(), "false");
    assert!(!marker.exists(), "third segment must never run");
}

#[tokio::test]
async fn rejected_segment_halts_chain() {
    let results = executor().execute_chain("echo ok && echo a; echo b && echo never").await;
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].outcome(), ExecOutcome::MetacharacterRejected);
}

#[yare::parameterized(
    empty          = { "" },
    whitespace     = { "    " },
    only_operators = { "   &&   &&   " },
)]
fn empty_chain_yields_no_results(chain: &str) {
    run_async(async {
        assert!(executor().execute_chain(chain).await.is_empty());
    });
}

#[tokio::test]
async fn timeout_applies_per_segment() {
    let executor = CommandExecutor::new().timeout_secs(1).unwrap();
    let results = executor.execute_chain("echo fast && sleep 60 && echo never").await;
    assert_eq!(results.len(), 2);
    assert!(results[0].success());
    assert_eq!(results[1].outcome(), ExecOutcome::Timeout);
    assert!(results[1].stderr().to_lowercase().contains("timed out"));
}

#[tokio::test]
async fn cwd_applies_to_every_segment() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = dir.path().canonicalize().unwrap();
    let results = executor().cwd(dir.path()).execute_chain("pwd && pwd").await;
    assert_eq!(results.len(), 2);
    for result in &results {
        assert_eq!(result.stdout().trim(), canonical.to_str().unwrap());
    }
}

#[tokio::test]
async fn quoted_operator_splits_segments() {
    // `&&` inside quotes is still a separator, leaving an unbalanced quote.
    let results = executor().execute_chain(r#"echo "a && b""#).await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].outcome(), ExecOutcome::ParseError);
}
