//! CLI argument parsing for casebase
//!
//! Global flags: --root, --corpus, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod output;
pub mod paths;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;
use output::parse_format;

/// Casebase - case-based movie recommendations
#[derive(Parser, Debug)]
#[command(name = "casebase")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for relative paths and casebase.toml discovery
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Corpus CSV file
    #[arg(long, global = true, env = "CASEBASE_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Engine configuration file (TOML)
    #[arg(long, global = true, env = "CASEBASE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, casebase_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend the items most similar to a named item
    Recommend {
        /// Primary name of the query item (case-insensitive, exact)
        name: String,

        /// Number of recommendations (defaults to recommend.default_limit)
        #[arg(long, short = 'k', value_parser = clap::value_parser!(u64).range(1..))]
        limit: Option<u64>,
    },

    /// Show the similarity breakdown between two named items
    Score {
        /// Primary name of the first item
        first: String,

        /// Primary name of the second item
        second: String,
    },

    /// List items in the corpus
    List {
        /// Show at most this many items
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },
}
