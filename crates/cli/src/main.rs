// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! vox: voice assistant pipeline driven from the terminal
//!
//! Transcripts come in as arguments or stdin lines, replies go to stdout.

mod color;
mod commands;
mod exit_error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{catalog, config, exec, parse, repl, turn};
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "vox", version, about = "Voice assistant command pipeline", styles = color::styles())]
struct Cli {
    /// Configuration file (default: $VOX_CONFIG, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a command (or `&&` chain) without an LLM
    Exec(exec::ExecArgs),
    /// Parse raw LLM output into a command
    Parse(parse::ParseArgs),
    /// Show the command catalog
    Catalog(catalog::CatalogArgs),
    /// Handle one transcript with the configured mode
    Turn(turn::TurnArgs),
    /// Handle transcripts from stdin, one per line
    Repl(repl::ReplArgs),
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        if let Some(exit) = e.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("{}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("{} {e:#}", color::error("error:"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let format = cli.output;
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Exec(args) => exec::handle(args, format).await,
        Command::Parse(args) => parse::handle(args, format),
        Command::Catalog(args) => catalog::handle(args, config_path, format),
        Command::Turn(args) => turn::handle(args, config_path, format).await,
        Command::Repl(args) => repl::handle(args, config_path, format).await,
        Command::Config => config::handle(config_path, format),
    }
}

/// `--verbose` wins, then `VOX_LOG`, then `warn`.
fn log_directives(verbose: bool, env: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    env.unwrap_or_else(|| "warn".to_string())
}

fn init_tracing(verbose: bool) {
    let directives = log_directives(verbose, vox_agent::env::log_filter());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("invalid {} filter {directives:?}: {e}", vox_agent::env::LOG_ENV);
        EnvFilter::new("warn")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
