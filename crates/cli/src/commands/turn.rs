// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vox turn`: one transcript in, one reply out.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use super::{build_mode, SessionArgs};
use crate::output::{format_or_json, OutputFormat};

#[derive(Args, Debug)]
pub struct TurnArgs {
    /// Transcript text
    pub text: String,

    #[command(flatten)]
    pub session: SessionArgs,
}

pub async fn handle(args: TurnArgs, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let mut mode = build_mode(args.session, config_path)?;
    let outcome = mode.handle_turn(&args.text).await?;
    format_or_json(format, &outcome, || println!("{}", outcome.reply()))
}
