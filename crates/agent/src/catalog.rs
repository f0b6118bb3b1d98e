// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command catalog discovery from TOML manifests.
//!
//! A manifest declares the commands one module offers:
//!
//! ```toml
//! [[command]]
//! name = "list-dir"
//! params = ["path:str"]
//! description = "List the contents of a directory."
//! ```
//!
//! Manifests are only read, never executed.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const NO_COMMANDS: &str = "(No commands discovered.)";

/// Errors from manifest discovery
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("command manifest not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid command manifest {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

/// One command a module exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInfo {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl CommandInfo {
    /// `  name params...` followed by the indented first description line.
    fn render_into(&self, lines: &mut Vec<String>) {
        let mut signature = format!("  {}", self.name);
        if !self.params.is_empty() {
            signature.push(' ');
            signature.push_str(&self.params.join(" "));
        }
        lines.push(signature);
        if let Some(first) = self.description.trim().lines().next() {
            lines.push(format!("    {first}"));
        }
    }
}

#[derive(Deserialize)]
struct Manifest {
    #[serde(default)]
    command: Vec<CommandInfo>,
}

/// Read the commands declared in one manifest.
///
/// Underscores in names are normalised to dashes.
pub fn discover_commands(path: &Path) -> Result<Vec<CommandInfo>, CatalogError> {
    if !path.is_file() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
    let manifest: Manifest = toml::from_str(&content)
        .map_err(|source| CatalogError::Parse { path: path.to_path_buf(), source })?;

    Ok(manifest
        .command
        .into_iter()
        .map(|c| CommandInfo { name: c.name.trim().replace('_', "-"), ..c })
        .collect())
}

/// Commands from a single manifest file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSource {
    /// File stem, used as the section header.
    pub name: String,
    pub path: PathBuf,
    pub commands: Vec<CommandInfo>,
}

impl CatalogSource {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let commands = discover_commands(path)?;
        let name = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        Ok(Self { name, path: path.to_path_buf(), commands })
    }

    /// Command lines without the section header.
    pub fn render_commands(&self) -> String {
        if self.commands.is_empty() {
            return NO_COMMANDS.to_string();
        }
        let mut lines = Vec::new();
        for command in &self.commands {
            command.render_into(&mut lines);
        }
        lines.join("\n")
    }
}

/// All discovered commands, grouped by source manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandCatalog {
    sources: Vec<CatalogSource>,
}

impl CommandCatalog {
    /// An empty catalog (validation disabled).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_sources(sources: Vec<CatalogSource>) -> Self {
        Self { sources }
    }

    /// Load manifests from files and directories.
    ///
    /// A directory contributes every `*.toml` beneath it, in path order.
    pub fn discover<P: AsRef<Path>>(paths: &[P]) -> Result<Self, CatalogError> {
        let mut sources = Vec::new();
        for path in paths {
            let path = path.as_ref();
            if path.is_dir() {
                let files = collect_manifests(path)
                    .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
                for file in files {
                    sources.push(CatalogSource::load(&file)?);
                }
            } else {
                sources.push(CatalogSource::load(path)?);
            }
        }
        let catalog = Self { sources };
        tracing::debug!(sources = catalog.sources.len(), commands = catalog.len(), "loaded command catalog");
        Ok(catalog)
    }

    pub fn sources(&self) -> &[CatalogSource] {
        &self.sources
    }

    /// Every command across sources.
    pub fn commands(&self) -> impl Iterator<Item = &CommandInfo> {
        self.sources.iter().flat_map(|s| s.commands.iter())
    }

    pub fn len(&self) -> usize {
        self.commands().count()
    }

    pub fn is_empty(&self) -> bool {
        self.commands().next().is_none()
    }

    /// Known command names, the allow-list for validation.
    pub fn names(&self) -> BTreeSet<String> {
        self.commands().map(|c| c.name.clone()).collect()
    }

    /// Prompt text: a `[stem]` section per source, separated by blank lines.
    pub fn render(&self) -> String {
        self.sources
            .iter()
            .map(|s| format!("[{}]\n{}", s.name, s.render_commands()))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn collect_manifests(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in std::fs::read_dir(&current)?.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().is_some_and(|e| e == "toml") {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
