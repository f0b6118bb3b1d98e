// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local Ollama server (`/api/chat`).

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vox_core::Message;

use super::{http, LlmBackend, LlmError, LlmSettings};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "gemma3:4b";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<&'a BTreeMap<String, serde_json::Value>>,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

/// Chat backend for an Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaBackend {
    client: reqwest::Client,
    base_url: String,
    model: String,
    options: BTreeMap<String, serde_json::Value>,
}

impl OllamaBackend {
    pub fn new(settings: &LlmSettings) -> Result<Self, LlmError> {
        Ok(Self {
            client: http::client()?,
            base_url: settings.base_url_or(DEFAULT_BASE_URL),
            model: settings.model_or(DEFAULT_MODEL),
            options: settings.options.clone(),
        })
    }
}

#[async_trait]
impl LlmBackend for OllamaBackend {
    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, messages: &[Message]) -> Result<String, LlmError> {
        tracing::debug!(model = %self.model, messages = messages.len(), "ollama chat");
        let body = ChatRequest {
            model: &self.model,
            messages,
            stream: false,
            options: (!self.options.is_empty()).then_some(&self.options),
        };
        let request = self.client.post(format!("{}/api/chat", self.base_url));
        let response: ChatResponse = http::post_json(request, self.name(), &body).await?;
        Ok(response.message.content)
    }
}

#[cfg(test)]
#[path = "ollama_tests.rs"]
mod tests;
