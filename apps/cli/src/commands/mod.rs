//! # Menu Commands
//!
//! One function per menu option.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (MenuChoice, Flow, dispatch)
//! ├── input.rs    ◄─── Name / quantity / price prompts
//! ├── stock.rs    ◄─── Add / restock, remove, update quantity
//! ├── report.rs   ◄─── List, search, total value
//! └── storage.rs  ◄─── Save & exit, exit without saving
//! ```
//!
//! ## Command Shape
//! Every command borrows the session and the console and returns
//! `CliResult<Flow>`:
//! ```rust,ignore
//! // Read-only
//! fn list(session: &Session, console: &mut Console<R, W>) -> CliResult<Flow>
//!
//! // Mutating
//! fn add(session: &mut Session, console: &mut Console<R, W>) -> CliResult<Flow>
//! ```
//! A non-fatal `CliError` is printed by the menu loop and the loop goes on.

pub mod input;
pub mod report;
pub mod stock;
pub mod storage;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::Console;
use crate::error::CliResult;
use crate::state::Session;

/// What the menu loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The eight menu options, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    Remove,
    UpdateQuantity,
    Search,
    Total,
    SaveAndExit,
    ExitWithoutSaving,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::List,
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::UpdateQuantity,
        MenuChoice::Search,
        MenuChoice::Total,
        MenuChoice::SaveAndExit,
        MenuChoice::ExitWithoutSaving,
    ];

    /// Parses a trimmed menu answer (`"1"` to `"8"`).
    pub fn parse(raw: &str) -> Option<Self> {
        let n: usize = raw.parse().ok()?;
        n.checked_sub(1)
            .and_then(|idx| MenuChoice::ALL.get(idx).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::List => "List all items",
            MenuChoice::Add => "Add / restock item",
            MenuChoice::Remove => "Remove item",
            MenuChoice::UpdateQuantity => "Update quantity",
            MenuChoice::Search => "Search item",
            MenuChoice::Total => "Show total inventory value",
            MenuChoice::SaveAndExit => "Save & exit",
            MenuChoice::ExitWithoutSaving => "Exit without saving",
        }
    }
}

/// Runs the command behind `choice`.
pub fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    session: &mut Session,
    console: &mut Console<R, W>,
) -> CliResult<Flow> {
    debug!(?choice, "Dispatching menu command");
    match choice {
        MenuChoice::List => report::list(session, console),
        MenuChoice::Add => stock::add(session, console),
        MenuChoice::Remove => stock::remove(session, console),
        MenuChoice::UpdateQuantity => stock::update_quantity(session, console),
        MenuChoice::Search => report::search(session, console),
        MenuChoice::Total => report::total(session, console),
        MenuChoice::SaveAndExit => storage::save_and_exit(session, console),
        MenuChoice::ExitWithoutSaving => storage::exit_without_saving(session, console),
    }
}
