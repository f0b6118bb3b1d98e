// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notes persisted across sessions and injected into system prompts.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A markdown notes file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scratchpad {
    path: PathBuf,
}

impl Scratchpad {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents; a missing file reads as empty.
    pub fn read(&self) -> std::io::Result<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e),
        }
    }

    /// Overwrite the file.
    pub fn write(&self, content: &str) -> std::io::Result<()> {
        std::fs::write(&self.path, content)
    }

    /// Append `content`, starting a new line if the file does not end with one.
    pub fn append(&self, content: &str) -> std::io::Result<()> {
        let mut existing = self.read()?;
        if !existing.is_empty() && !existing.ends_with('\n') {
            existing.push('\n');
        }
        existing.push_str(content);
        self.write(&existing)
    }

    /// Remove the file if present.
    pub fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    /// Delimited prompt block with the notes, or empty when there are none.
    pub fn prompt_section(&self) -> String {
        let contents = self.read().unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to read scratchpad");
            String::new()
        });
        if contents.trim().is_empty() {
            return String::new();
        }
        format!(
            "\n\n--- Scratchpad Memory ---\n\
             The following notes were saved from previous sessions:\n\n\
             {contents}\n\
             --- End Scratchpad ---\n"
        )
    }
}

/// Prompt section for an optional scratchpad.
pub fn prompt_section(scratchpad: Option<&Scratchpad>) -> String {
    scratchpad.map(Scratchpad::prompt_section).unwrap_or_default()
}

#[cfg(test)]
#[path = "scratchpad_tests.rs"]
mod tests;
