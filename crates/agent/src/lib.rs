// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vox-agent: the agent-mode command pipeline and the modes that drive it
//!
//! Raw LLM text flows through [`parse_llm_output`], then
//! [`validate_against_catalog`], then [`execute_parsed_command`], which runs
//! the `&&` chain through a [`vox_shell::CommandExecutor`].

pub mod catalog;
pub mod config;
pub mod context;
pub mod env;
pub mod history;
pub mod mode;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod refine;
pub mod scratchpad;
pub mod validate;

pub use catalog::{discover_commands, CatalogError, CatalogSource, CommandCatalog, CommandInfo};
pub use config::{Config, ConfigError};
pub use history::ConversationHistory;
pub use mode::{create_mode, AgentMode, AgentTurn, ChatMode, Mode, ModeError, ModeKind, TurnOutcome};
pub use orchestrator::{execute_parsed_command, InvalidInvocation};
pub use parser::parse_llm_output;
pub use prompt::{PromptError, PromptStore, PromptTemplate};
pub use validate::validate_against_catalog;
