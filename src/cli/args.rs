//! CLI argument definitions using clap
//!
//! Commands:
//! - shipcheck check [--limits <path>]
//! - shipcheck batch [--limits <path>]
//! - shipcheck limits [--limits <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shipcheck - A strict, deterministic shipment validation engine
#[derive(Parser, Debug)]
#[command(name = "shipcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one shipment document read from stdin
    Check {
        /// Path to a JSON rule limits profile
        #[arg(long)]
        limits: Option<PathBuf>,
    },

    /// Validate line-delimited shipment documents from stdin
    Batch {
        /// Path to a JSON rule limits profile
        #[arg(long)]
        limits: Option<PathBuf>,
    },

    /// Print the effective rule limits as JSON
    Limits {
        /// Path to a JSON rule limits profile
        #[arg(long)]
        limits: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
