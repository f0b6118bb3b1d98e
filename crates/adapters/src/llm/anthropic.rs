// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Anthropic Messages API (`/v1/messages`).
//!
//! System messages are not part of `messages`: they are joined into the
//! top-level `system` field.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vox_core::{Message, Role};

use super::{http, LlmBackend, LlmError, LlmSettings};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
const API_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<&'a Message>,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Chat backend for Anthropic models.
#[derive(Debug, Clone)]
pub struct AnthropicBackend {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    max_tokens: u32,
}

impl AnthropicBackend {
    pub fn new(settings: &LlmSettings) -> Result<Self, LlmError> {
        Ok(Self {
            client: http::client()?,
            base_url: settings.base_url_or(DEFAULT_BASE_URL),
            model: settings.model_or(DEFAULT_MODEL),
            api_key: settings.api_key_or_env(API_KEY_ENV),
            max_tokens: settings.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        })
    }
}

/// Split out system messages, joined by newlines; `None` when blank.
fn split_system(messages: &[Message]) -> (Option<String>, Vec<&Message>) {
    let mut system = String::new();
    let mut conversation = Vec::with_capacity(messages.len());
    for message in messages {
        if message.role == Role::System {
            system.push_str(&message.content);
            system.push('\n');
        } else {
            conversation.push(message);
        }
    }
    let system = system.trim();
    ((!system.is_empty()).then(|| system.to_string()), conversation)
}

#[async_trait]
impl LlmBackend for AnthropicBackend {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, messages: &[Message]) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| LlmError::MissingApiKey {
            provider: "anthropic".to_string(),
            env_var: API_KEY_ENV,
        })?;
        let (system, conversation) = split_system(messages);
        tracing::debug!(model = %self.model, messages = conversation.len(), "anthropic chat");

        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system,
            messages: conversation,
        };
        let request = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION);
        let response: MessagesResponse = http::post_json(request, self.name(), &body).await?;

        response
            .content
            .into_iter()
            .next()
            .map(|block| block.text.unwrap_or_default())
            .ok_or_else(|| LlmError::InvalidResponse("no content blocks in message".to_string()))
    }
}

#[cfg(test)]
#[path = "anthropic_tests.rs"]
mod tests;
