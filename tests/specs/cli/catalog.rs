//! `vox catalog` specs
//!
//! Verify manifest discovery from arguments and from the config file.

use crate::prelude::*;

const FS_MANIFEST: &str = r#"
[[command]]
name = "list_dir"
params = ["path:str"]
description = """
List the contents of a directory.
Hidden files are skipped."""

[[command]]
name = "backup-file"
params = ["src:str", "dest:str"]
"#;

const DB_MANIFEST: &str = r#"
[[command]]
name = "db-query"
description = "Run a read-only query."
"#;

#[test]
fn renders_sections_per_manifest() {
    let temp = Project::empty();
    temp.file("commands/fs.toml", FS_MANIFEST);
    temp.file("commands/db.toml", DB_MANIFEST);

    temp.vox()
        .args(&["catalog", "commands"])
        .passes()
        .stdout_has("[db]")
        .stdout_has("  db-query\n    Run a read-only query.")
        .stdout_has("[fs]")
        .stdout_has("  list-dir path:str\n    List the contents of a directory.")
        .stdout_has("  backup-file src:str dest:str")
        .stdout_lacks("Hidden files");
}

#[test]
fn json_lists_sorted_names() {
    let temp = Project::empty();
    temp.file("commands/fs.toml", FS_MANIFEST);
    temp.file("commands/db.toml", DB_MANIFEST);

    let run = temp.vox().args(&["-o", "json", "catalog", "commands"]).passes();

    assert_eq!(run.json(), serde_json::json!(["backup-file", "db-query", "list-dir"]));
}

#[test]
fn uses_config_catalog_by_default() {
    let temp = Project::empty();
    temp.file("commands/db.toml", DB_MANIFEST);
    let config = temp.file("vox.toml", "[agent]\ncatalog = [\"commands\"]\n");

    temp.vox()
        .args(&["--config", &config.display().to_string(), "catalog"])
        .passes()
        .stdout_has("db-query");
}

#[test]
fn nothing_configured_says_so() {
    let temp = Project::empty();

    temp.vox().args(&["catalog"]).passes().stderr_has("No command manifests configured.");
}

#[test]
fn missing_manifest_fails() {
    let temp = Project::empty();

    temp.vox().args(&["catalog", "nope.toml"]).fails().code(1).stderr_has("nope.toml");
}

#[test]
fn invalid_manifest_fails() {
    let temp = Project::empty();
    temp.file("bad.toml", "[[command]]\nparams = 3\n");

    temp.vox().args(&["catalog", "bad.toml"]).fails().stderr_has("invalid command manifest");
}
