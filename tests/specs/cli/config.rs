//! `vox config` specs
//!
//! Verify config resolution order and that secrets are never printed.

use crate::prelude::*;

#[test]
fn defaults_without_config_file() {
    let temp = Project::empty();

    temp.vox()
        .args(&["config"])
        .passes()
        .stdout_has("mode = \"chat\"")
        .stdout_has("provider = \"ollama\"")
        .stdout_has("timeout_secs = 30")
        .stdout_has("max_turns = 20");
}

#[test]
fn explicit_config_is_loaded() {
    let temp = Project::empty();
    let config = temp.file("vox.toml", "mode = \"agent\"\n\n[agent]\ntimeout_secs = 5\n");

    temp.vox()
        .args(&["config", "--config", &config.display().to_string()])
        .passes()
        .stdout_has("mode = \"agent\"")
        .stdout_has("timeout_secs = 5");
}

#[test]
fn env_var_names_config() {
    let temp = Project::empty();
    let config = temp.file("elsewhere/vox.toml", "[assistant]\nname = \"Juniper\"\n");

    temp.vox()
        .env("VOX_CONFIG", &config)
        .args(&["config"])
        .passes()
        .stdout_has("name = \"Juniper\"");
}

#[test]
fn default_location_is_user_config_dir() {
    let temp = Project::empty();
    temp.file(".config/vox/config.toml", "[refinement]\nenabled = true\n");

    temp.vox().args(&["config"]).passes().stdout_has("enabled = true");
}

#[test]
fn api_key_is_never_printed() {
    let temp = Project::empty();
    let config = temp.file("vox.toml", "[llm]\nprovider = \"deepseek\"\napi_key = \"sk-secret\"\n");
    let path = config.display().to_string();

    temp.vox().args(&["--config", &path, "config"]).passes().stdout_lacks("sk-secret");
    temp.vox().args(&["--config", &path, "-o", "json", "config"]).passes().stdout_lacks("sk-secret");
}

#[test]
fn missing_explicit_config_fails() {
    let temp = Project::empty();

    temp.vox()
        .args(&["config", "--config", "missing.toml"])
        .fails()
        .code(1)
        .stderr_has("config file not found");
}

#[test]
fn invalid_config_fails() {
    let temp = Project::empty();
    let config = temp.file("vox.toml", "mode = [\n");

    temp.vox()
        .args(&["config", "--config", &config.display().to_string()])
        .fails()
        .stderr_has("invalid config");
}
