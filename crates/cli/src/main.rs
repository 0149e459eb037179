// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lbl: label canonicalizer and agent query tool

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod env;
mod exit_error;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use lbl_client::AgentClient;

use crate::commands::{agent, label};
use crate::exit_error::{exit_code, ExitError};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "lbl", version, about = "Label canonicalizer and agent query tool")]
struct Cli {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    output: OutputFormat,

    /// Agent control socket (default: $LBL_AGENT_SOCK or /var/run/cilium/cilium.sock)
    #[arg(long, global = true)]
    socket: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse, canonicalize and digest labels
    Label(label::LabelArgs),
    /// Query a running agent over its control socket
    Agent(agent::AgentArgs),
}

#[tokio::main]
async fn main() {
    logging::init();
    if let Err(err) = run().await {
        match err.downcast_ref::<ExitError>() {
            Some(exit) => eprintln!("{}", exit.message),
            None => eprintln!("Error: {:#}", err),
        }
        tracing::debug!(error = ?err, "command failed");
        std::process::exit(exit_code(&err).into());
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let mut stdout = std::io::stdout().lock();
    match command {
        Commands::Label(args) => label::handle(args.command, cli.output, &mut stdout)?,
        Commands::Agent(args) => {
            let socket = cli.socket.unwrap_or_else(env::socket_path);
            tracing::debug!(socket = %socket.display(), "connecting to agent");
            let client = AgentClient::new(socket).timeout(env::ipc_timeout());
            agent::handle(args.command, &client, cli.output, &mut stdout).await?;
        }
    }
    Ok(())
}
