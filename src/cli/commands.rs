//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginated image-search feed client
#[derive(Parser, Debug)]
#[command(name = "pixfeed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key (falls back to the PIXABAY_API_KEY environment variable)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// API endpoint override
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Configuration file (JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a search and page through the results
    Search {
        /// Search term
        query: String,

        /// Stop after this many pages even if more remain (0 = no cap)
        #[arg(long, default_value = "0")]
        max_pages: u32,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Test connection to the search API
    Check,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON document with images and stats
    Json,
    /// Human-readable listing
    Pretty,
    /// Gallery card markup
    Html,
}
