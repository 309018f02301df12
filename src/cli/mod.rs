//! CLI module
//!
//! Command-line interface for walking a trade feed.
//!
//! # Commands
//!
//! - `fetch` - Stream every page of a feed to stdout
//! - `config` - Show the effective fetch configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
