//! `vox exec` specs
//!
//! Verify chains run as argv without a shell and exit codes follow the
//! failing segment.

use crate::prelude::*;

#[test]
fn echo_prints_command_and_output() {
    cli()
        .args(&["exec", "echo hello world"])
        .passes()
        .stdout_has("$ echo hello world")
        .stdout_has("hello world\n");
}

#[test]
fn quoted_arguments_stay_together() {
    cli().args(&["exec", "printf '[%s]' 'a b' c"]).passes().stdout_has("[a b][c]");
}

#[test]
fn chain_stops_after_failure() {
    let run = cli().args(&["exec", "echo one && false && echo three"]).fails();

    run.code(1).stdout_has("one").stdout_has("$ false").stdout_lacks("three");
}

#[test]
fn failing_status_becomes_exit_code() {
    cli().args(&["exec", "sh -c 'exit 3'"]).fails().code(3);
}

#[test]
fn missing_program_exits_127() {
    cli()
        .args(&["exec", "vox-no-such-program-here"])
        .fails()
        .code(127)
        .stderr_has("Command not found");
}

#[test]
fn metacharacters_are_rejected_without_running() {
    let temp = Project::empty();
    let marker = temp.path().join("marker");

    temp.vox()
        .args(&["exec", &format!("echo hi; touch {}", marker.display())])
        .fails()
        .code(1)
        .stderr_has("disallowed shell metacharacters");

    assert!(!marker.exists());
}

#[test]
fn variables_are_not_expanded() {
    cli().args(&["exec", "echo $HOME"]).passes().stdout_has("$HOME\n");
}

#[test]
fn timeout_kills_slow_command() {
    cli()
        .args(&["exec", "sleep 30", "--timeout", "1"])
        .fails()
        .code(1)
        .stderr_has("timed out after 1 seconds");
}

#[test]
fn zero_timeout_is_an_error() {
    cli().args(&["exec", "true", "--timeout", "0"]).fails().code(1).stderr_has("timeout");
}

#[test]
fn cwd_applies_to_every_segment() {
    let temp = Project::empty();
    temp.file("sub/data.txt", "x");
    let sub = temp.path().join("sub");

    cli()
        .args(&["exec", "ls && cat data.txt", "--cwd", &sub.display().to_string()])
        .passes()
        .stdout_has("data.txt")
        .stdout_has("x");
}

#[test]
fn missing_cwd_is_reported() {
    cli()
        .args(&["exec", "true", "--cwd", "/definitely/not/a/dir"])
        .fails()
        .code(1)
        .stderr_has("Working directory does not exist");
}

#[test]
fn json_output_lists_results() {
    let run = cli().args(&["-o", "json", "exec", "echo a && echo b"]).passes();
    let results = run.json();

    assert_eq!(results.as_array().map(Vec::len), Some(2));
    assert_eq!(results[0]["command"], "echo a");
    assert_eq!(results[0]["stdout"], "a\n");
    assert_eq!(results[1]["success"], true);
    assert_eq!(results[1]["outcome"], "success");
}

#[test]
fn empty_chain_runs_nothing() {
    cli().args(&["-o", "json", "exec", " && "]).passes().stdout_eq("[]\n");
}
