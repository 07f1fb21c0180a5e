//! Kompass CLI - Financial wellbeing compass
//!
//! Usage:
//!   kompass sample                  Print a sample profile JSON
//!   kompass score --file p.json     Compute all scores for a profile
//!   kompass recommend --file p.json Derive recommendations
//!   kompass serve --port 3000       Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Score { file, json } => commands::cmd_score(&file, json),
        Commands::Recommend { file, json } => commands::cmd_recommend(&file, json),
        Commands::Sample => commands::cmd_sample(),
        Commands::Serve { port, host } => commands::cmd_serve(&host, port).await,
    }
}
