//! Command line argument parsing for the xyston CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::index::store::DocumentStatus;

/// xyston - a small in-memory text search engine
#[derive(Parser, Debug, Clone)]
#[command(name = "xyston")]
#[command(about = "An in-memory TF-IDF search engine over JSONL documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct XystonArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
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

impl XystonArgs {
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
    /// Run a ranked query against a document file
    Search(SearchArgs),

    /// Show which query words match one document
    Match(MatchArgs),

    /// Show index statistics
    Stats(StatsArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Document file path (JSONL)
    #[arg(value_name = "DOCUMENT_FILE")]
    pub document_file: PathBuf,

    /// Query string; `-word` excludes documents containing the word
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Whitespace-delimited stop words
    #[arg(short, long, default_value = "")]
    pub stop_words: String,

    /// Only return documents with this status
    #[arg(long, default_value = "actual")]
    pub status: StatusArg,

    /// Maximum number of results
    #[arg(short, long, default_value = "5")]
    pub max_results: usize,

    /// Print results in pages of this size
    #[arg(short, long)]
    pub page_size: Option<usize>,
}

/// Arguments for matching a single document
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Document file path (JSONL)
    #[arg(value_name = "DOCUMENT_FILE")]
    pub document_file: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Document id to match against
    #[arg(value_name = "DOCUMENT_ID")]
    pub document_id: i64,

    /// Whitespace-delimited stop words
    #[arg(short, long, default_value = "")]
    pub stop_words: String,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Document file path (JSONL)
    #[arg(value_name = "DOCUMENT_FILE")]
    pub document_file: PathBuf,

    /// Whitespace-delimited stop words
    #[arg(short, long, default_value = "")]
    pub stop_words: String,
}

/// Output format for CLI results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Document status filter accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusArg {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

impl From<StatusArg> for DocumentStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Actual => DocumentStatus::Actual,
            StatusArg::Irrelevant => DocumentStatus::Irrelevant,
            StatusArg::Banned => DocumentStatus::Banned,
            StatusArg::Removed => DocumentStatus::Removed,
        }
    }
}
