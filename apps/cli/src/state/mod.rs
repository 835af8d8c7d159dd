//! # State Module
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  Args (clap) ──► ConfigState ──┐                                        │
//! │                                ├──► Session ──► every command           │
//! │  tally_file::load ──► Inventory┘                                        │
//! │                                                                         │
//! │  Single-threaded: the session is borrowed mutably by one command at    │
//! │  a time, so no locking is needed.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::Session;
