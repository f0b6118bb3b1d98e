// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vox config`: print the effective configuration.

use std::path::Path;

use anyhow::Result;
use vox_agent::Config;

use crate::output::{format_or_json, print_block, OutputFormat};

pub fn handle(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = Config::load(config_path)?;
    let toml = config.to_toml_string()?;
    format_or_json(format, &config, || print_block(&toml))
}
