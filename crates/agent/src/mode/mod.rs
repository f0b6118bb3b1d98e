// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Conversation modes.
//!
//! - [`ChatMode`]: free conversation, the LLM reply is the answer.
//! - [`AgentMode`]: the LLM reply is a command, run through the
//!   parse → validate → execute pipeline.

mod agent;
mod chat;
mod session;

pub use agent::{AgentMode, AgentTurn};
pub use chat::ChatMode;

use std::path::PathBuf;
use std::str::FromStr;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use vox_adapters::{LlmBackend, LlmError};
use vox_shell::ExecConfigError;

use crate::catalog::CommandCatalog;
use crate::config::Config;
use crate::history::ConversationHistory;
use crate::orchestrator::InvalidInvocation;

/// Errors from creating or running a mode
#[derive(Debug, Error)]
pub enum ModeError {
    #[error("unknown mode {name:?}; available: {available}")]
    UnknownMode { name: String, available: String },
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error("invalid agent settings: {0}")]
    Executor(#[from] ExecConfigError),
    #[error(transparent)]
    Invocation(#[from] InvalidInvocation),
}

/// Which mode to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    Chat,
    Agent,
}

vox_core::simple_display! {
    ModeKind {
        Chat => "chat",
        Agent => "agent",
    }
}

impl ModeKind {
    /// Every mode, sorted by name.
    pub const ALL: [ModeKind; 2] = [ModeKind::Agent, ModeKind::Chat];
}

impl FromStr for ModeKind {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chat" => Ok(Self::Chat),
            "agent" => Ok(Self::Agent),
            _ => Err(ModeError::UnknownMode {
                name: s.to_string(),
                available: Self::ALL.map(|k| k.to_string()).join(", "),
            }),
        }
    }
}

/// What one turn produced.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TurnOutcome {
    Chat { reply: String },
    Agent(AgentTurn),
}

impl TurnOutcome {
    /// Text to speak back.
    pub fn reply(&self) -> &str {
        match self {
            Self::Chat { reply } => reply,
            Self::Agent(turn) => &turn.reply,
        }
    }
}

/// A conversation mode handling one transcript at a time.
#[async_trait]
pub trait Mode: Send {
    fn kind(&self) -> ModeKind;

    fn history(&self) -> &ConversationHistory;

    /// Process one user transcript.
    async fn handle_turn(&mut self, text: &str) -> Result<TurnOutcome, ModeError>;
}

/// Build the mode named by `config.mode`.
///
/// `catalog` is only used by agent mode.
pub fn create_mode(
    config: &Config,
    llm: Box<dyn LlmBackend>,
    context_files: Vec<PathBuf>,
    catalog: CommandCatalog,
) -> Result<Box<dyn Mode>, ModeError> {
    let kind: ModeKind = config.mode.parse()?;
    tracing::info!(mode = %kind, provider = llm.name(), model = llm.model(), "creating mode");
    Ok(match kind {
        ModeKind::Chat => Box::new(ChatMode::new(config, llm, context_files)),
        ModeKind::Agent => Box::new(AgentMode::new(config, llm, context_files, catalog)?),
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
