// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vox parse`: show how raw LLM output would be interpreted.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use vox_agent::{parse_llm_output, validate_against_catalog, CommandCatalog};

use crate::exit_error::ExitError;
use crate::output::{format_or_json, OutputFormat};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Raw LLM output
    pub text: String,

    /// Command manifest or directory to validate against (repeatable)
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Vec<PathBuf>,
}

pub fn handle(args: ParseArgs, format: OutputFormat) -> Result<()> {
    let parsed = parse_llm_output(&args.text);
    let parsed = if args.catalog.is_empty() {
        parsed
    } else {
        let catalog = CommandCatalog::discover(&args.catalog)?;
        validate_against_catalog(parsed, &catalog.names())
    };

    format_or_json(format, &parsed, || {
        if parsed.is_valid() {
            println!("{}", parsed.command());
        } else {
            eprintln!("{}", parsed.rejection_reason());
        }
    })?;

    if parsed.is_valid() {
        Ok(())
    } else {
        Err(ExitError::silent(1).into())
    }
}
