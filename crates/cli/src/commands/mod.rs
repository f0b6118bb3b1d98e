// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod catalog;
pub mod config;
pub mod exec;
pub mod parse;
pub mod repl;
pub mod turn;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use vox_adapters::ProviderRegistry;
use vox_agent::{create_mode, CommandCatalog, Config, Mode};

/// Options shared by `turn` and `repl`.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Mode to run (overrides `mode` in the config)
    #[arg(long)]
    pub mode: Option<String>,

    /// Reference document to include in the system prompt (repeatable)
    #[arg(long = "context", value_name = "PATH")]
    pub context_files: Vec<PathBuf>,
}

/// Load config, LLM backend and catalog, then build the mode.
pub(crate) fn build_mode(args: SessionArgs, config_path: Option<&Path>) -> Result<Box<dyn Mode>> {
    let mut config = Config::load(config_path)?;
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    let llm = ProviderRegistry::builtin().create(&config.llm)?;
    let catalog = CommandCatalog::discover(&config.agent.catalog)
        .context("failed to load command catalog")?;
    Ok(create_mode(&config, llm, args.context_files, catalog)?)
}
