//! # tally-file: Persistence Codec for Tally
//!
//! This crate loads and saves the inventory as a flat text file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Data Flow                                  │
//! │                                                                         │
//! │  Startup                                   "Save & exit"                │
//! │     │                                            │                      │
//! │     ▼                                            ▼                      │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tally-file (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    reader     │    │    writer     │    │    error     │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ load()        │    │ save()        │    │ RecordError  │  │   │
//! │  │   │ parse_records │    │ write_records │    │ LoadWarning  │  │   │
//! │  │   │ parse_line    │    │               │    │ StorageError │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │     │                                            │                      │
//! │     ▼                                            ▼                      │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    inventory.txt                                │   │
//! │  │   # comment lines                                               │   │
//! │  │   name,quantity,price                                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Format Limitation
//! There is no escaping. A name containing `,` or a newline is written as-is
//! and will not load back as the same record.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tally_core::DEFAULT_MAX_ITEMS;
//!
//! let report = tally_file::load("inventory.txt", DEFAULT_MAX_ITEMS)?;
//! for warning in &report.warnings {
//!     eprintln!("[WARN] {warning}");
//! }
//!
//! let mut inventory = report.inventory;
//! inventory.add("Apple", 10, 0.99).unwrap();
//! tally_file::save(&inventory, "inventory.txt")?;
//! # Ok::<(), tally_file::StorageError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod reader;
pub mod writer;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{LoadWarning, RecordError, StorageError, StorageResult, WarningKind};
pub use reader::{load, parse_records, LoadReport};
pub use writer::{save, write_records};

// =============================================================================
// Format Constants
// =============================================================================

/// Separates name, quantity and price on a record line.
pub const FIELD_SEPARATOR: char = ',';

/// A trimmed line starting with this is a comment.
pub const COMMENT_PREFIX: char = '#';

/// First line of every saved file.
pub const HEADER: &str = "# Tally inventory - format: name,quantity,price";

/// File name used when no path is configured.
pub const DEFAULT_FILE_NAME: &str = "inventory.txt";
