//! Command-line flags.
//!
//! Every flag falls back to a `TALLY_*` environment variable, then to a
//! built-in default.

use std::path::PathBuf;

use clap::Parser;
use tally_core::DEFAULT_MAX_ITEMS;
use tally_file::DEFAULT_FILE_NAME;

/// Tally - single-user inventory tracker
#[derive(Parser, Debug, Clone)]
#[command(name = "tally", version, about, long_about = None)]
pub struct Args {
    /// Inventory file to load at startup and write on "Save & exit"
    #[arg(short, long, env = "TALLY_FILE", default_value = DEFAULT_FILE_NAME)]
    pub file: PathBuf,

    /// Maximum number of distinct items
    #[arg(long, env = "TALLY_MAX_ITEMS", default_value_t = DEFAULT_MAX_ITEMS, value_parser = parse_capacity)]
    pub max_items: usize,

    /// Currency symbol used when printing prices and values
    #[arg(long, env = "TALLY_CURRENCY", default_value = "$")]
    pub currency: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_capacity(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
