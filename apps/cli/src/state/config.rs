//! # Configuration State
//!
//! Settings resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--file`, `--max-items`, `--currency`, `--verbose`)
//! 2. Environment variables (`TALLY_FILE`, `TALLY_MAX_ITEMS`, `TALLY_CURRENCY`)
//! 3. Defaults (this file)
//!
//! Flag and environment resolution is done by clap in [`crate::cli`]; this
//! type is what the rest of the shell sees. It is read-only after startup.

use std::path::PathBuf;

use tally_core::DEFAULT_MAX_ITEMS;
use tally_file::DEFAULT_FILE_NAME;

use crate::cli::Args;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigState {
    /// Inventory file read at startup and written on save.
    pub inventory_path: PathBuf,

    /// Capacity bound for the record store.
    pub max_items: usize,

    /// Currency symbol (for display only)
    pub currency_symbol: String,

    /// Debug logging on stderr.
    pub verbose: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - File: `inventory.txt` in the working directory
    /// - Capacity: 500 items
    /// - Currency: `$`
    fn default() -> Self {
        ConfigState {
            inventory_path: PathBuf::from(DEFAULT_FILE_NAME),
            max_items: DEFAULT_MAX_ITEMS,
            currency_symbol: "$".to_string(),
            verbose: false,
        }
    }
}

impl From<Args> for ConfigState {
    fn from(args: Args) -> Self {
        ConfigState {
            inventory_path: args.file,
            max_items: args.max_items,
            currency_symbol: args.currency,
            verbose: args.verbose,
        }
    }
}

impl ConfigState {
    /// Formats an amount with the configured symbol and two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use tally_cli::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234.5), "$1234.50");
    /// ```
    pub fn format_currency(&self, amount: f64) -> String {
        format!(
            "{}{}{:.2}",
            if amount < 0.0 { "-" } else { "" },
            self.currency_symbol,
            amount.abs()
        )
    }
}
