//! `vox turn` and `vox repl` specs
//!
//! Run full turns against a stub Ollama server.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::prelude::*;

const DB_MANIFEST: &str = r#"
[[command]]
name = "db-query"
description = "Run a read-only query."
"#;

async fn ollama_replying(content: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": { "role": "assistant", "content": content },
            "done": true,
        })))
        .mount(&server)
        .await;
    server
}

/// Project with a config pointing the LLM at `server`.
fn project(server: &MockServer, extra: &str) -> Project {
    let temp = Project::empty();
    temp.file(
        ".config/vox/config.toml",
        &format!("{extra}\n[llm]\nprovider = \"ollama\"\nbase_url = \"{}\"\n", server.uri()),
    );
    temp
}

/// Run the (blocking) CLI off the runtime so the stub keeps serving.
async fn run<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    tokio::task::spawn_blocking(f).await.expect("cli task")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn agent_turn_runs_command_and_speaks_output() {
    let server = ollama_replying("```bash\necho spoken\n```").await;
    let temp = project(&server, "mode = \"agent\"");

    let stdout = run(move || temp.vox().args(&["turn", "say spoken"]).passes().stdout()).await;

    assert_eq!(stdout, "spoken\n");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn agent_turn_json_has_structured_results() {
    let server = ollama_replying("echo a && echo b").await;
    let temp = project(&server, "mode = \"agent\"");

    let json = run(move || temp.vox().args(&["-o", "json", "turn", "both"]).passes().json()).await;

    assert_eq!(json["mode"], "agent");
    assert_eq!(json["parsed"]["command"], "echo a && echo b");
    assert_eq!(json["results"][1]["stdout"], "b\n");
    assert_eq!(json["reply"], "a\nb");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn agent_turn_rejects_command_outside_catalog() {
    let server = ollama_replying("rm -rf /tmp/vox-spec").await;
    let temp = project(&server, "mode = \"agent\"\n\n[agent]\ncatalog = [\"commands\"]");
    temp.file(".config/vox/commands/db.toml", DB_MANIFEST);

    let stdout = run(move || temp.vox().args(&["turn", "delete it"]).passes().stdout()).await;

    assert_eq!(stdout, "Unknown command: 'rm'. Available: db-query.\n");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn mode_flag_overrides_config() {
    let server = ollama_replying("echo not run").await;
    let temp = project(&server, "mode = \"agent\"");

    let stdout =
        run(move || temp.vox().args(&["turn", "hi", "--mode", "chat"]).passes().stdout()).await;

    assert_eq!(stdout, "echo not run\n");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn repl_handles_each_line() {
    let server = ollama_replying("Hello!").await;
    let temp = project(&server, "");

    let stdout =
        run(move || temp.vox().args(&["repl"]).stdin("first\n\nsecond\n").passes().stdout()).await;

    assert_eq!(stdout, "Hello!\nHello!\n");
    assert_eq!(server.received_requests().await.map(|r| r.len()), Some(2));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn llm_error_fails_turn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&server)
        .await;
    let temp = project(&server, "");

    let stderr = run(move || temp.vox().args(&["turn", "hi"]).fails().stderr()).await;

    assert!(stderr.contains("HTTP 500"), "{stderr}");
    assert!(stderr.contains("model not loaded"), "{stderr}");
}

#[test]
fn unknown_mode_fails() {
    let temp = Project::empty();
    temp.file(".config/vox/config.toml", "mode = \"dictation\"\n");

    temp.vox().args(&["turn", "hi"]).fails().code(1).stderr_has("unknown mode \"dictation\"");
}

#[test]
fn unknown_provider_fails() {
    let temp = Project::empty();
    temp.file(".config/vox/config.toml", "[llm]\nprovider = \"parrot\"\n");

    temp.vox()
        .args(&["turn", "hi"])
        .fails()
        .stderr_has("unknown LLM provider")
        .stderr_has("anthropic, deepseek, ollama");
}
