//! # Session State
//!
//! The inventory being edited plus the configuration it was loaded with.
//! One session per process run; it is passed explicitly to every command.

use tally_core::Inventory;
use tally_file::{LoadReport, StorageResult};
use tracing::info;

use super::ConfigState;

#[derive(Debug, Clone)]
pub struct Session {
    pub config: ConfigState,
    pub inventory: Inventory,
}

impl Session {
    pub fn new(config: ConfigState, inventory: Inventory) -> Self {
        Session { config, inventory }
    }

    /// Starts a session from a finished load.
    pub fn from_report(config: ConfigState, report: LoadReport) -> Self {
        Session::new(config, report.inventory)
    }

    /// Writes the inventory to the configured file. Returns the record count.
    pub fn save(&self) -> StorageResult<usize> {
        let count = tally_file::save(&self.inventory, &self.config.inventory_path)?;
        info!(count, "Session saved");
        Ok(count)
    }
}
