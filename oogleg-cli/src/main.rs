//! Oogleg CLI - Command-line interface
//!
//! Runs the search page in the terminal or the browser, and the demo search API.

mod commands;
mod terminal;

use std::path::PathBuf;

use clap::Parser;
use oogleg_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "oogleg")]
#[command(about = "A search page for a remote search API")]
struct Cli {
    /// Console log level
    #[arg(long, value_enum, default_value_t = CliLogLevel::Warn, global = true)]
    log_level: CliLogLevel,
    /// Directory for the full trace log
    #[arg(long, global = true)]
    logs_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.into(), cli.logs_dir.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    commands::handle_command(cli.command).await
}
