//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log event filter based on message word count
#[derive(Parser)]
#[command(
    name = "word-count-filter",
    version,
    about = "Log event filter based on message word count",
    long_about = "Reads log events from stdin and accepts or suppresses each one \
                  depending on how many words its rendered message contains."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Shape of each stdin line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// One JSON log event per line (default)
    #[default]
    Json,
    /// One raw message per line
    Text,
}

/// What to write for each processed line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Echo lines whose decision is not DENY (default)
    #[default]
    Events,
    /// One JSON decision object per line
    Decisions,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Filter log events from stdin (alias: run)
    #[command(alias = "run")]
    Filter {
        /// Input line format
        #[arg(long, short = 'i', default_value = "json")]
        input: InputFormat,

        /// Output format
        #[arg(long, short = 'o', default_value = "events")]
        output: OutputFormat,
    },
    /// Print the word count of TEXT, or of stdin when omitted
    Count {
        /// Text to count
        text: Option<String>,
    },
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration file
    Check,
    /// Display version information
    Version,
}
