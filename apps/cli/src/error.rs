//! # CLI Error Type
//!
//! Unified error type for menu commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tally                                  │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<Flow, CliError>                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Store refused? ──── CoreError::NotFound(..) ─────────┐                │
//! │         │                                              │                │
//! │         ▼                                              ▼                │
//! │  Save failed? ────── StorageError::Write {..} ──── CliError ──► "[ERROR] ..."
//! │         │                                              │    loop continues
//! │         ▼                                              │                │
//! │  Terminal gone? ──── io::Error ────────────────── CliError(Io) ──► exit │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use tally_core::{CoreError, ErrorKind};
use tally_file::StorageError;
use thiserror::Error;

/// Error returned from menu commands.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No item with that name
    NotFound,

    /// Name, quantity or price rejected
    ValidationError,

    /// Inventory is at its item limit
    CapacityExceeded,

    /// The inventory file could not be read or written
    StorageError,

    /// Terminal input or output failed
    Io,
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// True when the menu loop cannot go on.
    pub fn is_fatal(&self) -> bool {
        self.code == ErrorCode::Io
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let code = match err.kind() {
            ErrorKind::NotFound => ErrorCode::NotFound,
            ErrorKind::CapacityExceeded => ErrorCode::CapacityExceeded,
            ErrorKind::InvalidName
            | ErrorKind::InvalidQuantity
            | ErrorKind::InvalidPrice
            | ErrorKind::Duplicate => ErrorCode::ValidationError,
        };
        CliError::new(code, err.to_string())
    }
}

impl From<StorageError> for CliError {
    fn from(err: StorageError) -> Self {
        CliError::new(ErrorCode::StorageError, err.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        tracing::error!("Terminal I/O failed: {}", err);
        CliError::new(ErrorCode::Io, format!("Terminal I/O failed: {err}"))
    }
}

/// Result type for menu commands.
pub type CliResult<T> = Result<T, CliError>;
