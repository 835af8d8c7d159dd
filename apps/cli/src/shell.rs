//! # Menu Shell
//!
//! The interactive loop.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──► print menu ──► "Choice: " ──► EOF? ─────────────► return        │
//! │   │                        │                                            │
//! │   │                        ▼                                            │
//! │   │                  MenuChoice::parse ──► None ──► [WARN] Unknown ─┐  │
//! │   │                        │                                         │  │
//! │   │                        ▼                                         │  │
//! │   │                   dispatch()                                     │  │
//! │   │                        │                                         │  │
//! │   │        ┌───────────────┼────────────────┬──────────────┐        │  │
//! │   │        ▼               ▼                ▼              ▼        │  │
//! │   │   Ok(Continue)      Ok(Exit)     Err(non-fatal)   Err(fatal)    │  │
//! │   │        │               │          [ERROR] msg          │        │  │
//! │   │        │               ▼                │              ▼        │  │
//! │   │        │            return              │        return Err     │  │
//! │   └────────┴────────────────────────────────┴──────────────────────-┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tally_file::LoadReport;
use tracing::info;

use crate::commands::{dispatch, Flow, MenuChoice};
use crate::console::Console;
use crate::error::CliResult;
use crate::state::{ConfigState, Session};

const BOX_WIDTH: usize = 42;

/// Prints the program banner.
pub fn print_banner<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CliResult<()> {
    let title = format!("Tally Inventory Manager v{}", env!("CARGO_PKG_VERSION"));
    console.line(format!("╔{}╗", "═".repeat(BOX_WIDTH)))?;
    console.line(format!("║{title:^width$}║", width = BOX_WIDTH))?;
    console.line(format!("╚{}╝", "═".repeat(BOX_WIDTH)))?;
    console.line("")?;
    Ok(())
}

/// Prints what startup found in the inventory file.
pub fn print_load_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &ConfigState,
    report: &LoadReport,
) -> CliResult<()> {
    if let Some(note) = &report.note {
        console.info(note)?;
    }
    for warning in &report.warnings {
        console.warn(warning)?;
    }
    console.info(format!(
        "Loaded {} item(s) from '{}'.",
        report.loaded(),
        config.inventory_path.display()
    ))?;
    Ok(())
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CliResult<()> {
    console.line(format!("┌{}┐", "─".repeat(BOX_WIDTH)))?;
    for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
        let entry = format!("  {}. {}", idx + 1, choice.label());
        console.line(format!("│{entry:<width$}│", width = BOX_WIDTH))?;
    }
    console.line(format!("└{}┘", "─".repeat(BOX_WIDTH)))?;
    Ok(())
}

/// Runs the menu until the user exits or input ends.
///
/// End of input leaves without saving. Only a terminal I/O failure is
/// returned as an error.
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    loop {
        print_menu(console)?;

        let Some(answer) = console.prompt("Choice: ")? else {
            info!("End of input, leaving without saving");
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&answer) else {
            console.warn(format!("Unknown option '{answer}'. Try 1-8."))?;
            continue;
        };

        match dispatch(choice, session, console) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => console.error(&err)?,
        }
    }
}
