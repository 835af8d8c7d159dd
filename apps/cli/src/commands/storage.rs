//! # Storage Commands
//!
//! The two ways out of the menu.
//!
//! ```text
//! 7. Save & exit ──► Session::save ──► Ok(n)  ──► [INFO] n item(s) saved ──► Exit
//!                                  └─► Err    ──► [ERROR] Cannot write ... ──► Continue
//!
//! 8. Exit without saving ──► [INFO] Exiting without saving. ──► Exit
//! ```

use std::io::{BufRead, Write};

use tracing::warn;

use super::Flow;
use crate::console::Console;
use crate::error::{CliError, CliResult};
use crate::state::Session;

/// Writes the inventory and ends the session.
///
/// A failed write is reported and the menu stays open so the user can
/// retry or leave without saving.
pub fn save_and_exit<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> CliResult<Flow> {
    match session.save() {
        Ok(count) => {
            console.info(format!(
                "{count} item(s) saved to '{}'.",
                session.config.inventory_path.display()
            ))?;
            Ok(Flow::Exit)
        }
        Err(err) => {
            warn!(error = %err, "Save failed, staying in menu");
            Err(CliError::from(err))
        }
    }
}

pub fn exit_without_saving<R: BufRead, W: Write>(
    _session: &Session,
    console: &mut Console<R, W>,
) -> CliResult<Flow> {
    console.info("Exiting without saving.")?;
    Ok(Flow::Exit)
}
