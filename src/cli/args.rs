//! CLI argument definitions using clap
//!
//! - galactic-archive
//! - galactic-archive --config <path>
//! - galactic-archive --port <port>

use clap::Parser;
use std::path::PathBuf;

/// Galactic Archive - browse archival records by category
#[derive(Parser, Debug, Default)]
#[command(name = "galactic-archive")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file (defaults apply without one)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Port to listen on, overriding the config file
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
