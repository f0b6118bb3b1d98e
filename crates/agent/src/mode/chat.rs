// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use async_trait::async_trait;
use vox_adapters::LlmBackend;

use super::session::{prompt_sections, render_or, Session};
use super::{Mode, ModeError, ModeKind, TurnOutcome};
use crate::config::Config;
use crate::history::ConversationHistory;
use crate::prompt::vars;

pub const CHAT_TEMPLATE: &str = "system_prompt";

/// Conversational mode: the LLM reply is spoken back as-is.
pub struct ChatMode {
    session: Session,
}

impl ChatMode {
    pub fn new(config: &Config, llm: Box<dyn LlmBackend>, context_files: Vec<PathBuf>) -> Self {
        let prompt = system_prompt(config, &context_files);
        Self { session: Session::new(config, llm, prompt) }
    }
}

fn system_prompt(config: &Config, context_files: &[PathBuf]) -> String {
    let (scratchpad, context) = prompt_sections(config, context_files);
    let persona = &config.assistant.persona;
    let vars = vars([
        ("assistant_name", config.assistant.name.as_str()),
        ("persona", persona.as_str()),
        ("scratchpad", scratchpad.as_str()),
        ("context", context.as_str()),
    ]);
    render_or(&config.prompt_store(), CHAT_TEMPLATE, &vars, || {
        format!("{persona}{scratchpad}{context}")
    })
}

#[async_trait]
impl Mode for ChatMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Chat
    }

    fn history(&self) -> &ConversationHistory {
        self.session.history()
    }

    async fn handle_turn(&mut self, text: &str) -> Result<TurnOutcome, ModeError> {
        let reply = self.session.exchange(text).await?;
        let reply = self.session.finish(reply).await?;
        Ok(TurnOutcome::Chat { reply })
    }
}

#[cfg(test)]
#[path = "chat_tests.rs"]
mod tests;
