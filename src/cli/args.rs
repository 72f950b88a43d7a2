//! Command line argument parsing for the Javelin CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Javelin - an in-memory full-text search engine for line-oriented corpora
#[derive(Parser, Debug, Clone)]
#[command(name = "javelin")]
#[command(about = "An in-memory full-text search engine for line-oriented corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct JavelinArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl JavelinArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a corpus file
    Search(SearchArgs),

    /// Print every record of a corpus file
    List(ListArgs),

    /// Interactive menu loop over a corpus file
    Repl(ReplArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the corpus file (one record per line)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus: PathBuf,

    /// The query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Matching strategy: ALL, ANY or NONE
    #[arg(short, long, default_value = "ALL", value_name = "STRATEGY")]
    pub strategy: String,
}

/// Arguments for listing records
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Path to the corpus file (one record per line)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus: PathBuf,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Path to the corpus file (one record per line)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
