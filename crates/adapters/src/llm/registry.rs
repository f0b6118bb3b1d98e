// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Provider name → backend constructor.

use std::collections::BTreeMap;

use super::{AnthropicBackend, LlmBackend, LlmError, LlmSettings, OllamaBackend, OpenAiCompatBackend};

/// Builds a backend from settings.
pub type BackendConstructor = fn(&LlmSettings) -> Result<Box<dyn LlmBackend>, LlmError>;

/// Explicitly constructed map of provider constructors.
///
/// Build one at startup and pass it to whatever creates backends.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    constructors: BTreeMap<String, BackendConstructor>,
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry").field("providers", &self.names()).finish()
    }
}

impl ProviderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `ollama`, `deepseek` and `anthropic`.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("ollama", ollama);
        registry.register("deepseek", deepseek);
        registry.register("anthropic", anthropic);
        registry
    }

    /// Add or replace a provider. Names are matched case-insensitively.
    pub fn register(&mut self, name: &str, constructor: BackendConstructor) {
        self.constructors.insert(name.to_lowercase(), constructor);
    }

    /// Registered provider names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }

    /// Build the backend named by `settings.provider`.
    pub fn create(&self, settings: &LlmSettings) -> Result<Box<dyn LlmBackend>, LlmError> {
        let name = settings.provider.trim().to_lowercase();
        let constructor = self.constructors.get(&name).ok_or_else(|| LlmError::UnknownProvider {
            name: settings.provider.clone(),
            available: self.names().join(", "),
        })?;
        let backend = constructor(settings)?;
        tracing::info!(provider = %name, model = backend.model(), "created LLM backend");
        Ok(backend)
    }
}

fn ollama(settings: &LlmSettings) -> Result<Box<dyn LlmBackend>, LlmError> {
    Ok(Box::new(OllamaBackend::new(settings)?))
}

fn deepseek(settings: &LlmSettings) -> Result<Box<dyn LlmBackend>, LlmError> {
    Ok(Box::new(OpenAiCompatBackend::deepseek(settings)?))
}

fn anthropic(settings: &LlmSettings) -> Result<Box<dyn LlmBackend>, LlmError> {
    Ok(Box::new(AnthropicBackend::new(settings)?))
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
