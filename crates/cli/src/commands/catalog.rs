// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vox catalog`: list the commands the agent may run.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use vox_agent::{CommandCatalog, Config};

use crate::color;
use crate::output::{format_or_json, OutputFormat};

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Manifests or directories (default: `agent.catalog` from the config)
    pub paths: Vec<PathBuf>,
}

pub fn handle(args: CatalogArgs, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let paths = if args.paths.is_empty() {
        Config::load(config_path)?.agent.catalog
    } else {
        args.paths
    };
    let catalog = CommandCatalog::discover(&paths)?;

    format_or_json(format, &catalog.names(), || {
        if catalog.sources().is_empty() {
            eprintln!("No command manifests configured.");
            return;
        }
        for (i, source) in catalog.sources().iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!(
                "{} {}",
                color::header(&format!("[{}]", source.name)),
                color::muted(&source.path.display().to_string())
            );
            println!("{}", source.render_commands());
        }
    })
}
