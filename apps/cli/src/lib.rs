//! # Tally CLI Library
//!
//! The interactive shell around `tally-core` and `tally-file`.
//!
//! ## Module Structure
//! ```text
//! tally_cli/
//! ├── lib.rs      ◄─── You are here (run, startup, tracing)
//! ├── cli.rs      ◄─── clap flags with TALLY_* env fallbacks
//! ├── console.rs  ◄─── Prompt and [OK]/[WARN]/[ERROR] output
//! ├── shell.rs    ◄─── Banner, load report, menu loop
//! ├── error.rs    ◄─── CliError and ErrorCode
//! ├── commands/   ◄─── One function per menu option
//! └── state/      ◄─── ConfigState, Session
//! ```

pub mod cli;
pub mod commands;
pub mod console;
pub mod error;
pub mod shell;
pub mod state;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::console::Console;
use crate::error::CliResult;
use crate::state::{ConfigState, Session};

/// Runs the program with parsed flags.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Resolve Configuration ────────────────────────────────────────────► │
/// │     • flags, then TALLY_* env vars, then defaults                       │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber on stderr, RUST_LOG overrides                  │
/// │                                                                         │
/// │  3. Load Inventory File ──────────────────────────────────────────────► │
/// │     • missing file: empty inventory + note                              │
/// │     • bad lines: one warning each                                       │
/// │     • unreadable file: exit status 1                                    │
/// │                                                                         │
/// │  4. Run Menu Loop ────────────────────────────────────────────────────► │
/// │     • until Save & exit, Exit without saving, or end of input           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(args: Args) -> ExitCode {
    let config = ConfigState::from(args);
    init_tracing(config.verbose);

    info!(path = %config.inventory_path.display(), max_items = config.max_items, "Starting Tally");

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    match run_session(config, &mut console) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(code = ?err.code, "Session aborted");
            eprintln!("[ERROR] {err}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the configured file, prints the load report, and runs the menu.
///
/// Returns the session as it stood when the menu ended. Fails only if the
/// file exists but cannot be read, or the terminal goes away.
pub fn run_session<R: BufRead, W: Write>(
    config: ConfigState,
    console: &mut Console<R, W>,
) -> CliResult<Session> {
    shell::print_banner(console)?;

    let report = tally_file::load(&config.inventory_path, config.max_items)?;
    shell::print_load_report(console, &config, &report)?;

    let mut session = Session::from_report(config, report);
    shell::run_menu(&mut session, console)?;
    Ok(session)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `--verbose` - Debug for the tally crates
/// - Default: WARN level
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,tally_core=debug,tally_file=debug,tally_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
