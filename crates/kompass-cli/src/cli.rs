//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kompass - Financial wellbeing scoring and recommendations
#[derive(Parser)]
#[command(name = "kompass")]
#[command(about = "Score a financial profile and derive recommendations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the full score set for a profile
    Score {
        /// Profile JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Emit raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Derive recommendations for a profile
    Recommend {
        /// Profile JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Emit raw JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Print a sample profile as JSON (edit it and feed it back in)
    Sample,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}
