// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reference documents injected into system prompts.

use std::path::{Path, PathBuf};

/// A loaded reference document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextDoc {
    pub name: String,
    pub content: String,
}

/// Read each file; failures become inline `[Error: ...]` documents.
pub fn load_context_files(paths: &[PathBuf]) -> Vec<ContextDoc> {
    paths.iter().map(|path| load_one(path)).collect()
}

fn load_one(path: &Path) -> ContextDoc {
    let shown = path.display().to_string();
    if !path.exists() {
        tracing::warn!(path = %shown, "context file not found");
        return ContextDoc { content: format!("[Error: file not found: {shown}]"), name: shown };
    }
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or(shown);
            ContextDoc { name, content }
        }
        Err(e) => {
            tracing::warn!(path = %shown, error = %e, "failed to read context file");
            ContextDoc { content: format!("[Error reading file: {e}]"), name: shown }
        }
    }
}

/// "Reference Documents" prompt block, or empty when `paths` is empty.
pub fn prompt_section(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return String::new();
    }
    let mut parts = vec!["\n\n--- Reference Documents ---".to_string()];
    for doc in load_context_files(paths) {
        parts.push(format!("\n### {}\n{}", doc.name, doc.content));
    }
    parts.push("\n--- End Reference Documents ---\n".to_string());
    parts.join("\n")
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
