//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default feed: Mercado Bitcoin BTC trade history
pub const DEFAULT_FEED_URL: &str = "https://www.mercadobitcoin.net/api/BTC/trades/";

/// Default starting transaction id
pub const DEFAULT_START_CURSOR: u64 = 5700;

/// Cursor-paginated trade history fetcher
#[derive(Parser, Debug)]
#[command(name = "trade-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Fetch configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Total attempts per page (overrides the config file)
    #[arg(long, global = true)]
    pub max_retries: Option<u32>,

    /// Delay between attempts in milliseconds (overrides the config file)
    #[arg(long, global = true)]
    pub retry_delay_ms: Option<u64>,

    /// Per-request timeout in milliseconds, 0 disables it (overrides the config file)
    #[arg(long, global = true)]
    pub request_timeout_ms: Option<u64>,

    /// Delay between pages in milliseconds, at least 200 (overrides the config file)
    #[arg(long, global = true)]
    pub inter_page_delay_ms: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every page of a feed
    Fetch {
        /// Feed URL, without the tid parameter
        #[arg(short, long, default_value = DEFAULT_FEED_URL)]
        url: String,

        /// Transaction id to start after
        #[arg(short, long, default_value_t = DEFAULT_START_CURSOR)]
        start: u64,

        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<usize>,
    },

    /// Show the effective fetch configuration
    Config,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON array per page per line
    Json,
    /// Human-readable table per page
    Pretty,
}
