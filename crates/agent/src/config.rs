// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML configuration.
//!
//! Resolution: explicit path > `VOX_CONFIG` > `<config_dir>/vox/config.toml`
//! > built-in defaults. Relative paths inside a file are resolved against
//! the file's directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vox_adapters::LlmSettings;
use vox_shell::{CommandExecutor, ExecConfigError};

use crate::env;
use crate::history::ConversationHistory;
use crate::prompt::PromptStore;
use crate::scratchpad::Scratchpad;

/// Errors from loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid config {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub name: String,
    pub persona: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "Vox".to_string(),
            persona: "You are a helpful voice assistant.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationConfig {
    /// User/assistant exchanges kept in history; 0 keeps everything.
    pub max_turns: usize,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self { max_turns: ConversationHistory::DEFAULT_MAX_TURNS }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
    /// Command manifests (files or directories).
    pub catalog: Vec<PathBuf>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            timeout_secs: CommandExecutor::DEFAULT_TIMEOUT.as_secs(),
            cwd: None,
            catalog: Vec::new(),
        }
    }
}

impl AgentConfig {
    /// Executor carrying this section's timeout and working directory.
    pub fn executor(&self) -> Result<CommandExecutor, ExecConfigError> {
        let executor = CommandExecutor::new().timeout_secs(self.timeout_secs)?;
        Ok(match &self.cwd {
            Some(cwd) => executor.cwd(cwd),
            None => executor,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScratchpadConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefinementConfig {
    pub enabled: bool,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `chat` or `agent`; checked when the mode is created.
    pub mode: String,
    pub assistant: AssistantConfig,
    pub llm: LlmSettings,
    pub conversation: ConversationConfig,
    pub agent: AgentConfig,
    pub scratchpad: ScratchpadConfig,
    pub prompts: PromptsConfig,
    pub refinement: RefinementConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: "chat".to_string(),
            assistant: AssistantConfig::default(),
            llm: LlmSettings::default(),
            conversation: ConversationConfig::default(),
            agent: AgentConfig::default(),
            scratchpad: ScratchpadConfig::default(),
            prompts: PromptsConfig::default(),
            refinement: RefinementConfig::default(),
        }
    }
}

impl Config {
    /// Resolve and load the configuration.
    ///
    /// An explicit or `VOX_CONFIG` path must exist; a missing default file
    /// means built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Some(path) = env::config_override() {
            return Self::from_file(&path);
        }
        match env::default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let mut config: Self = toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Effective configuration as TOML. API keys are never written.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn prompt_store(&self) -> PromptStore {
        PromptStore::from_option(self.prompts.dir.clone())
    }

    pub fn scratchpad(&self) -> Option<Scratchpad> {
        self.scratchpad.file.as_ref().map(Scratchpad::new)
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        self.agent.cwd.iter_mut().for_each(resolve);
        self.agent.catalog.iter_mut().for_each(resolve);
        self.scratchpad.file.iter_mut().for_each(resolve);
        self.prompts.dir.iter_mut().for_each(resolve);
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
