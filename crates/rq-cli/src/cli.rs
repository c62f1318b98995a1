//! CLI argument definitions using clap derive API

use clap::Parser;
use rq_core::config::DEFAULT_DB_PATH;
use std::path::PathBuf;

/// Add universal assignment columns to the requisitions table.
///
/// Safe to re-run: only missing columns are added, the backfill rewrites the
/// same values, and an existing index is left alone.
#[derive(Parser, Debug)]
#[command(name = "rq-migrate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQLite database; a relative path (including the default)
    /// resolves against the current working directory, not the executable's
    /// location
    #[arg(short, long, default_value = DEFAULT_DB_PATH)]
    pub database: PathBuf,

    /// Migration config file overriding table, column and index names
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
