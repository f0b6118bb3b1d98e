// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vox repl`: one turn per stdin line until EOF.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use vox_agent::Mode;

use super::{build_mode, SessionArgs};
use crate::color;
use crate::output::{line_or_json, OutputFormat};

#[derive(Args, Debug)]
pub struct ReplArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}

pub async fn handle(args: ReplArgs, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let mut mode = build_mode(args.session, config_path)?;
    let turns = run_lines(mode.as_mut(), BufReader::new(tokio::io::stdin()), format).await?;
    tracing::debug!(turns, "stdin closed");
    Ok(())
}

/// Handle each non-blank line as a transcript. A failed turn is reported
/// and the loop continues. Returns the number of turns handled.
pub(crate) async fn run_lines<R>(mode: &mut dyn Mode, input: R, format: OutputFormat) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut turns = 0;
    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        turns += 1;
        match mode.handle_turn(text).await {
            Ok(outcome) => line_or_json(format, &outcome, || println!("{}", outcome.reply()))?,
            Err(e) => eprintln!("{} {e}", color::error("error:")),
        }
    }
    Ok(turns)
}

#[cfg(test)]
#[path = "repl_tests.rs"]
mod tests;
