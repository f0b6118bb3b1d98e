// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::BTreeSet;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use vox_adapters::LlmBackend;
use vox_core::{ExecutionResult, ParsedCommand};
use vox_shell::CommandExecutor;

use super::session::{prompt_sections, render_or, Session};
use super::{Mode, ModeError, ModeKind, TurnOutcome};
use crate::catalog::CommandCatalog;
use crate::config::Config;
use crate::history::ConversationHistory;
use crate::orchestrator::execute_parsed_command;
use crate::parser::parse_llm_output;
use crate::prompt::vars;
use crate::validate::validate_against_catalog;

pub const AGENT_TEMPLATE: &str = "agent_command_prompt";

/// Structured result of one agent turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentTurn {
    pub parsed: ParsedCommand,
    /// One result per segment that ran; empty when the command was rejected.
    pub results: Vec<ExecutionResult>,
    /// Text to speak back.
    pub reply: String,
}

impl AgentTurn {
    /// True when a command ran and every segment succeeded.
    pub fn succeeded(&self) -> bool {
        self.parsed.is_valid() && self.results.iter().all(ExecutionResult::success)
    }
}

/// Command mode: the LLM translates requests into catalog commands.
pub struct AgentMode {
    session: Session,
    known_commands: BTreeSet<String>,
    executor: CommandExecutor,
}

impl AgentMode {
    pub fn new(
        config: &Config,
        llm: Box<dyn LlmBackend>,
        context_files: Vec<PathBuf>,
        catalog: CommandCatalog,
    ) -> Result<Self, ModeError> {
        let executor = config.agent.executor()?;
        let prompt = system_prompt(config, &context_files, &catalog.render());
        Ok(Self { session: Session::new(config, llm, prompt), known_commands: catalog.names(), executor })
    }

    /// Run one turn and return the structured outcome.
    pub async fn handle_agent_turn(&mut self, text: &str) -> Result<AgentTurn, ModeError> {
        let raw = self.session.exchange(text).await?;
        let parsed = validate_against_catalog(parse_llm_output(&raw), &self.known_commands);

        if !parsed.is_valid() {
            tracing::info!(reason = parsed.rejection_reason(), "command not executed");
            let reply = self.session.finish(parsed.rejection_reason().to_string()).await?;
            return Ok(AgentTurn { parsed, results: Vec::new(), reply });
        }

        let results = execute_parsed_command(&parsed, &self.executor).await?;
        let reply = self.session.finish(summarize(&results)).await?;
        Ok(AgentTurn { parsed, results, reply })
    }
}

fn system_prompt(config: &Config, context_files: &[PathBuf], commands: &str) -> String {
    let (scratchpad, context) = prompt_sections(config, context_files);
    let name = &config.assistant.name;
    let vars = vars([
        ("assistant_name", name.as_str()),
        ("commands", commands),
        ("scratchpad", scratchpad.as_str()),
        ("context", context.as_str()),
    ]);
    render_or(&config.prompt_store(), AGENT_TEMPLATE, &vars, || {
        format!("You are {name} in command mode.\nAvailable commands: {commands}\n{scratchpad}{context}")
    })
}

/// Spoken summary: stdout of successful segments, then the failure.
fn summarize(results: &[ExecutionResult]) -> String {
    let mut parts = Vec::new();
    for result in results {
        if result.success() {
            let stdout = result.stdout().trim_end();
            if !stdout.is_empty() {
                parts.push(stdout.to_string());
            }
        } else {
            let stderr = result.stderr().trim();
            if stderr.is_empty() {
                parts.push(format!(
                    "{} exited with status {}.",
                    result.command(),
                    result.return_code()
                ));
            } else {
                parts.push(stderr.to_string());
            }
        }
    }
    if parts.is_empty() {
        return if results.is_empty() {
            "No command was run.".to_string()
        } else {
            "Command completed with no output.".to_string()
        };
    }
    parts.join("\n")
}

#[async_trait]
impl Mode for AgentMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Agent
    }

    fn history(&self) -> &ConversationHistory {
        self.session.history()
    }

    async fn handle_turn(&mut self, text: &str) -> Result<TurnOutcome, ModeError> {
        Ok(TurnOutcome::Agent(self.handle_agent_turn(text).await?))
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
