//! # Tally Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        tally (binary)                                   │
//! │                                                                         │
//! │  main.rs ────► parses flags, hands off to the library                  │
//! │                                                                         │
//! │  lib.rs ─────► logging, load, menu loop, exit status                   │
//! │                                                                         │
//! │  commands/ ──► list, add, remove, update_quantity, search, total, save │
//! │                                                                         │
//! │  state/ ─────► ConfigState, Session                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use clap::Parser;
use tally_cli::cli::Args;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for testability
    tally_cli::run(Args::parse())
}
