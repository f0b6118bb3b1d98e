//! Shared helpers for CLI specs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;

/// Run `vox` in a scratch directory with no user config.
pub fn cli() -> CliBuilder {
    CliBuilder::new(None)
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    fn new(home: Option<&Path>) -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("vox").expect("vox binary is built");
        cmd.env_remove("VOX_CONFIG")
            .env_remove("VOX_LOG")
            .env_remove("DEEPSEEK_API_KEY")
            .env_remove("ANTHROPIC_API_KEY")
            .env("NO_COLOR", "1");
        if let Some(home) = home {
            cmd.current_dir(home).env("HOME", home).env("XDG_CONFIG_HOME", home.join(".config"));
        }
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    fn run(mut self) -> RunAssert {
        let output = self.cmd.output().expect("vox runs");
        RunAssert { output }
    }

    /// Run and require exit code 0.
    pub fn passes(self) -> RunAssert {
        let run = self.run();
        assert!(
            run.output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            run.output.status.code(),
            run.stdout(),
            run.stderr()
        );
        run
    }

    /// Run and require a non-zero exit.
    pub fn fails(self) -> RunAssert {
        let run = self.run();
        assert!(
            !run.output.status.success(),
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn code(&self, expected: i32) -> &Self {
        similar_asserts::assert_eq!(
            self.output.status.code(),
            Some(expected),
            "stderr:\n{}",
            self.stderr()
        );
        self
    }

    pub fn stdout_has(&self, needle: &str) -> &Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout lacks {needle:?}:\n{stdout}");
        self
    }

    pub fn stdout_lacks(&self, needle: &str) -> &Self {
        let stdout = self.stdout();
        assert!(!stdout.contains(needle), "stdout has {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(&self, needle: &str) -> &Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr lacks {needle:?}:\n{stderr}");
        self
    }

    pub fn stdout_eq(&self, expected: &str) -> &Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout is JSON")
    }
}

/// A scratch directory acting as `$HOME` and working directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` at `rel`, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    pub fn vox(&self) -> CliBuilder {
        CliBuilder::new(Some(self.path()))
    }
}
