// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt templates.
//!
//! Templates are TOML files `<dir>/<name>.toml`:
//!
//! ```toml
//! role = "system"
//! template = """
//! You are ${assistant_name}.
//! ${scratchpad}
//! """
//! ```
//!
//! `${var}` placeholders are interpolated; unknown ones render empty.

use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use serde::Deserialize;
use thiserror::Error;
use vox_core::Role;

/// Regex pattern for ${variable_name}
#[allow(clippy::expect_used)]
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("constant regex pattern is valid"));

/// Errors from template loading
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt template not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid prompt template {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

#[derive(Deserialize)]
struct TemplateFile {
    name: Option<String>,
    role: Option<Role>,
    template: String,
}

/// A loaded template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    pub name: String,
    pub role: Role,
    pub template: String,
}

impl PromptTemplate {
    /// Interpolate `vars`, collapse blank-line runs and trim.
    pub fn render(&self, vars: &HashMap<String, String>) -> String {
        interpolate(&self.template, vars)
    }
}

/// Replace `${name}` with values from `vars`, dropping unknown placeholders.
pub fn interpolate(template: &str, vars: &HashMap<String, String>) -> String {
    let substituted = VAR_PATTERN.replace_all(template, |caps: &regex::Captures| {
        vars.get(&caps[1]).cloned().unwrap_or_default()
    });
    BLANK_RUNS.replace_all(&substituted, "\n\n").trim().to_string()
}

/// Directory of prompt templates. Without a directory every lookup misses.
#[derive(Debug, Clone, Default)]
pub struct PromptStore {
    dir: Option<PathBuf>,
}

impl PromptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: Some(dir.into()) }
    }

    /// A store with no templates.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_option(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn load(&self, name: &str) -> Result<PromptTemplate, PromptError> {
        let file_name = format!("{name}.toml");
        let Some(dir) = &self.dir else {
            return Err(PromptError::NotFound(PathBuf::from(file_name)));
        };
        let path = dir.join(file_name);
        if !path.is_file() {
            return Err(PromptError::NotFound(path));
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|source| PromptError::Io { path: path.clone(), source })?;
        let file: TemplateFile =
            toml::from_str(&content).map_err(|source| PromptError::Parse { path, source })?;
        Ok(PromptTemplate {
            name: file.name.unwrap_or_else(|| name.to_string()),
            role: file.role.unwrap_or(Role::System),
            template: file.template,
        })
    }

    /// Load and render `name` in one step.
    pub fn render(&self, name: &str, vars: &HashMap<String, String>) -> Result<String, PromptError> {
        Ok(self.load(name)?.render(vars))
    }

    /// Sorted template names available in the directory.
    pub fn list_templates(&self) -> Vec<String> {
        let Some(dir) = &self.dir else {
            return Vec::new();
        };
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|e| e == "toml"))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names
    }
}

/// Build a variables map from pairs.
pub fn vars<K: Into<String>, V: Into<String>>(
    pairs: impl IntoIterator<Item = (K, V)>,
) -> HashMap<String, String> {
    pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
