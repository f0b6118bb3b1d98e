// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Provider-agnostic chat backends.

mod anthropic;
mod http;
mod ollama;
mod openai;
mod registry;

pub use anthropic::AnthropicBackend;
pub use ollama::OllamaBackend;
pub use openai::OpenAiCompatBackend;
pub use registry::{BackendConstructor, ProviderRegistry};

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vox_core::Message;

/// Errors from LLM backends
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("missing API key for {provider}: set {env_var} or llm.api_key")]
    MissingApiKey { provider: String, env_var: &'static str },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("unknown LLM provider: {name:?}; available: {available}")]
    UnknownProvider { name: String, available: String },
    #[error("scripted LLM has no replies left")]
    Exhausted,
}

/// A chat-capable language model.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Provider name, e.g. `ollama`.
    fn name(&self) -> &str;

    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    /// Send the conversation and return the assistant's reply text.
    async fn chat(&self, messages: &[Message]) -> Result<String, LlmError>;
}

/// Provider selection and connection settings (`[llm]` config section).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Provider-specific options, forwarded verbatim (Ollama `options`).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, serde_json::Value>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            model: None,
            base_url: None,
            api_key: None,
            max_tokens: None,
            options: BTreeMap::new(),
        }
    }
}

impl LlmSettings {
    pub fn new(provider: impl Into<String>) -> Self {
        Self { provider: provider.into(), ..Self::default() }
    }

    vox_core::setters! {
        option {
            model: String,
            base_url: String,
            api_key: String,
            max_tokens: u32,
        }
    }

    /// Add a provider option.
    pub fn provider_option(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Configured model, or `default`.
    pub(crate) fn model_or(&self, default: &str) -> String {
        self.model.clone().filter(|m| !m.is_empty()).unwrap_or_else(|| default.to_string())
    }

    /// Configured base URL without a trailing slash, or `default`.
    pub(crate) fn base_url_or(&self, default: &str) -> String {
        let url = self.base_url.as_deref().filter(|u| !u.is_empty()).unwrap_or(default);
        url.trim_end_matches('/').to_string()
    }

    /// Configured key, falling back to `env_var`.
    pub(crate) fn api_key_or_env(&self, env_var: &str) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(env_var).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{LlmBackend, LlmError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use vox_core::Message;

    struct ScriptState {
        replies: VecDeque<String>,
        calls: Vec<Vec<Message>>,
    }

    /// Backend that replays queued replies and records every request.
    ///
    /// Clones share state, so a test can keep a handle after boxing one.
    #[derive(Clone)]
    pub struct ScriptedLlm {
        inner: Arc<Mutex<ScriptState>>,
    }

    impl ScriptedLlm {
        pub fn new<S: Into<String>>(replies: impl IntoIterator<Item = S>) -> Self {
            Self {
                inner: Arc::new(Mutex::new(ScriptState {
                    replies: replies.into_iter().map(Into::into).collect(),
                    calls: Vec::new(),
                })),
            }
        }

        /// Queue another reply.
        pub fn push_reply(&self, reply: impl Into<String>) {
            self.inner.lock().replies.push_back(reply.into());
        }

        /// Message lists received so far, oldest first.
        pub fn calls(&self) -> Vec<Vec<Message>> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl LlmBackend for ScriptedLlm {
        fn name(&self) -> &str {
            "scripted"
        }

        fn model(&self) -> &str {
            "scripted"
        }

        async fn chat(&self, messages: &[Message]) -> Result<String, LlmError> {
            let mut state = self.inner.lock();
            state.calls.push(messages.to_vec());
            state.replies.pop_front().ok_or(LlmError::Exhausted)
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::ScriptedLlm;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
