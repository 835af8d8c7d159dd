//! # Storage Error Types
//!
//! Error types for reading and writing the inventory file.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  One bad line                         Whole-file I/O failure            │
//! │       │                                     │                           │
//! │       ▼                                     ▼                           │
//! │  RecordError (this module)            StorageError (this module)        │
//! │       │                                     │                           │
//! │       ▼                                     ▼                           │
//! │  LoadWarning { line, content }        Err(..) returned to caller        │
//! │  load continues                       load aborts / save attempt fails  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tally_core::{CoreError, ValidationError};
use thiserror::Error;

// =============================================================================
// Record Error
// =============================================================================

/// Why a single line of the file was skipped during load.
///
/// None of these abort the load.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Line does not split into exactly three non-empty fields.
    #[error("malformed record, expected name,quantity,price")]
    Malformed,

    /// Name field failed validation.
    #[error("invalid name '{raw}': {source}")]
    InvalidName {
        raw: String,
        #[source]
        source: ValidationError,
    },

    /// Quantity is not a base-10 integer in range.
    #[error("invalid quantity '{raw}'")]
    InvalidQuantity { raw: String },

    /// Price is not a real number in range.
    #[error("invalid price '{raw}'")]
    InvalidPrice { raw: String },

    /// Name repeats an earlier record (case-insensitive). Not merged.
    #[error("duplicate name '{name}'")]
    Duplicate { name: String },

    /// The inventory is full; this and every later record is ignored.
    #[error("max capacity ({max}) reached, remaining lines ignored")]
    CapacityReached { max: usize },

    /// The record store refused the record for another reason.
    #[error(transparent)]
    Rejected(CoreError),
}

/// Flat classification of load warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    MalformedRecord,
    DuplicateRecord,
    CapacityReached,
}

impl RecordError {
    pub fn kind(&self) -> WarningKind {
        match self {
            RecordError::Duplicate { .. } => WarningKind::DuplicateRecord,
            RecordError::CapacityReached { .. } => WarningKind::CapacityReached,
            _ => WarningKind::MalformedRecord,
        }
    }
}

impl From<CoreError> for RecordError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Duplicate(name) => RecordError::Duplicate { name },
            CoreError::CapacityExceeded { max } => RecordError::CapacityReached { max },
            other => RecordError::Rejected(other),
        }
    }
}

// =============================================================================
// Load Warning
// =============================================================================

/// A skipped line, with enough context for the user to find and fix it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadWarning {
    /// 1-based line number in the source.
    pub line: usize,

    /// The line as read, trimmed.
    pub content: String,

    pub error: RecordError,
}

impl LoadWarning {
    pub fn kind(&self) -> WarningKind {
        self.error.kind()
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}: {} (skipped): {}",
            self.line, self.error, self.content
        )
    }
}

// =============================================================================
// Storage Error
// =============================================================================

/// Whole-file I/O failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An existing file could not be opened or read.
    ///
    /// ## When This Occurs
    /// - Permission denied on the inventory file
    /// - Path is a directory
    /// - Device error mid-read
    ///
    /// A missing file is NOT this error; it loads as an empty inventory.
    #[error("Cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination could not be created, written, or flushed.
    ///
    /// Only the save attempt fails; the in-memory inventory is untouched.
    #[error("Cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        StorageError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        StorageError::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let warning = LoadWarning {
            line: 3,
            content: "Apple,10".to_string(),
            error: RecordError::Malformed,
        };
        assert_eq!(
            warning.to_string(),
            "Line 3: malformed record, expected name,quantity,price (skipped): Apple,10"
        );
        assert_eq!(warning.kind(), WarningKind::MalformedRecord);
    }

    #[test]
    fn test_core_error_conversion() {
        let err = RecordError::from(CoreError::Duplicate("Apple".into()));
        assert_eq!(err.kind(), WarningKind::DuplicateRecord);

        let err = RecordError::from(CoreError::CapacityExceeded { max: 2 });
        assert_eq!(err, RecordError::CapacityReached { max: 2 });
    }

    #[test]
    fn test_storage_error_names_path() {
        let err = StorageError::write(
            "/nope/inventory.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Cannot write '/nope/inventory.txt': denied");
    }
}
