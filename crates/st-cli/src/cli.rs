//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Per-user session statistics.
///
/// Reads a log of `HH:MM:SS username Start|End` lines and prints, for each
/// user, the number of sessions and their total duration in seconds.
#[derive(Debug, Parser)]
#[command(name = "st", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the session log.
    pub log_file: PathBuf,
}
