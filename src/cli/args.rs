//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::LogLevel;

/// Interactively build a fixed-size Unicode charset for a font character table
#[derive(Parser, Debug)]
#[command(name = "charset-builder")]
#[command(version, about = "Build a Unicode charset file for a font character table", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Suggested destination file (overrides the config file)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Pre-filled number of characters in the charset
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Log file verbosity (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,

    /// Hide the key hint bar
    #[arg(long)]
    pub no_hints: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List Unicode blocks and their ids
    Blocks {
        /// Only the shortlist offered first in the session
        #[arg(long)]
        common: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
