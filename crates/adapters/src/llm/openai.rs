// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! OpenAI-compatible chat completions (`/chat/completions`), used for DeepSeek.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vox_core::Message;

use super::{http, LlmBackend, LlmError, LlmSettings};

pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";
pub const DEEPSEEK_MODEL: &str = "deepseek-chat";
pub const DEEPSEEK_API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat backend for any OpenAI-compatible completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiCompatBackend {
    client: reqwest::Client,
    provider: String,
    base_url: String,
    model: String,
    api_key: Option<String>,
    api_key_env: &'static str,
    max_tokens: Option<u32>,
}

impl OpenAiCompatBackend {
    /// DeepSeek defaults; the key comes from settings or `DEEPSEEK_API_KEY`.
    pub fn deepseek(settings: &LlmSettings) -> Result<Self, LlmError> {
        Ok(Self {
            client: http::client()?,
            provider: "deepseek".to_string(),
            base_url: settings.base_url_or(DEEPSEEK_BASE_URL),
            model: settings.model_or(DEEPSEEK_MODEL),
            api_key: settings.api_key_or_env(DEEPSEEK_API_KEY_ENV),
            api_key_env: DEEPSEEK_API_KEY_ENV,
            max_tokens: settings.max_tokens,
        })
    }
}

#[async_trait]
impl LlmBackend for OpenAiCompatBackend {
    fn name(&self) -> &str {
        &self.provider
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, messages: &[Message]) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| LlmError::MissingApiKey {
            provider: self.provider.clone(),
            env_var: self.api_key_env,
        })?;
        tracing::debug!(provider = %self.provider, model = %self.model, messages = messages.len(), "completion request");

        let body = CompletionRequest { model: &self.model, messages, max_tokens: self.max_tokens };
        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key);
        let response: CompletionResponse = http::post_json(request, &self.provider, &body).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("no choices in completion".to_string()))?;
        Ok(choice.message.content.unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "openai_tests.rs"]
mod tests;
