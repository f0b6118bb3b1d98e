// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State shared by every mode: LLM, history, prompts and refinement.

use std::collections::HashMap;
use std::path::PathBuf;

use vox_adapters::{LlmBackend, LlmError};
use vox_core::Role;

use crate::config::Config;
use crate::history::ConversationHistory;
use crate::prompt::{PromptError, PromptStore};
use crate::refine::refine_response;
use crate::{context, scratchpad};

pub(super) struct Session {
    llm: Box<dyn LlmBackend>,
    history: ConversationHistory,
    prompts: PromptStore,
    refine: bool,
}

impl Session {
    pub(super) fn new(config: &Config, llm: Box<dyn LlmBackend>, system_prompt: String) -> Self {
        let mut history = ConversationHistory::new(config.conversation.max_turns);
        history.push(Role::System, system_prompt);
        Self { llm, history, prompts: config.prompt_store(), refine: config.refinement.enabled }
    }

    pub(super) fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Record `text`, ask the LLM, record and return its reply.
    pub(super) async fn exchange(&mut self, text: &str) -> Result<String, LlmError> {
        self.history.push(Role::User, text);
        let reply = self.llm.chat(self.history.messages()).await?;
        self.history.push(Role::Assistant, reply.as_str());
        Ok(reply)
    }

    /// Refine `reply` for speech when enabled.
    pub(super) async fn finish(&self, reply: String) -> Result<String, LlmError> {
        if !self.refine {
            return Ok(reply);
        }
        refine_response(&reply, self.llm.as_ref(), &self.prompts).await
    }
}

/// Scratchpad and context sections shared by both system prompts.
pub(super) fn prompt_sections(config: &Config, context_files: &[PathBuf]) -> (String, String) {
    let scratchpad = scratchpad::prompt_section(config.scratchpad().as_ref());
    let context = context::prompt_section(context_files);
    (scratchpad, context)
}

/// Render `template`, or build the fallback when it is missing or broken.
pub(super) fn render_or(
    prompts: &PromptStore,
    template: &str,
    vars: &HashMap<String, String>,
    fallback: impl FnOnce() -> String,
) -> String {
    match prompts.render(template, vars) {
        Ok(prompt) => prompt,
        Err(PromptError::NotFound(_)) => {
            tracing::debug!(template, "prompt template not found, using built-in prompt");
            fallback()
        }
        Err(e) => {
            tracing::warn!(template, error = %e, "prompt template unusable, using built-in prompt");
            fallback()
        }
    }
}
