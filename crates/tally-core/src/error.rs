//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError        - Record store failures                          │
//! │  └── ValidationError  - Name / quantity / price rule violations        │
//! │                                                                         │
//! │  tally-file errors (separate crate)                                    │
//! │  ├── RecordError      - One skipped line during load (a warning)       │
//! │  └── StorageError     - Read / write failures of the whole file        │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (name, value, bound)
//! 3. Errors are enum variants, never String
//! 4. Store failures are returned to the caller, never fatal

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Shared by the record store and the file codec so an item read from disk
/// obeys exactly the same rules as one added at runtime.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Name is empty or too long.
    #[error("Invalid item name: {reason}")]
    InvalidName { reason: String },

    /// Quantity is outside the legal range for the operation.
    ///
    /// The range differs by operation: `add` requires at least 1,
    /// `set_quantity` and file loading accept 0.
    #[error("Invalid quantity {value}: must be between {min} and {max}")]
    InvalidQuantity { value: i64, min: i64, max: i64 },

    /// Restocking would push an item past `MAX_QUANTITY`.
    ///
    /// Reports the amount entered and how much still fits, not the total.
    #[error("Cannot add {added}: only {room} more fit (maximum stock is {max})")]
    StockOverflow { added: i64, room: i64, max: i64 },

    /// Price is negative, too large, or not a number.
    #[error("Invalid price {value}: must be between 0 and {max}")]
    InvalidPrice { value: f64, max: f64 },
}

// =============================================================================
// Core Error
// =============================================================================

/// Record store errors.
///
/// These are typed outcomes of `Inventory` operations. The shell reports
/// them and keeps the interaction loop running.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Input failed validation (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No item matches the name (case-insensitive).
    #[error("'{0}' not found in inventory")]
    NotFound(String),

    /// A record with this name is already stored.
    ///
    /// Only raised by `Inventory::insert`; `add` restocks instead.
    #[error("'{0}' already exists in inventory")]
    Duplicate(String),

    /// A new item cannot be appended because the inventory is full.
    ///
    /// ## When This Occurs
    /// ```text
    /// add("Pears", 1, 0.5)
    ///      │
    ///      ▼
    /// no existing "pears" ──► len == max_items?
    ///      │                        │
    ///      │ no                     │ yes
    ///      ▼                        ▼
    /// append             CapacityExceeded { max }  (inventory unchanged)
    /// ```
    #[error("Inventory full (max {max} items)")]
    CapacityExceeded { max: usize },
}

/// Flat classification of every store failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidName,
    InvalidQuantity,
    InvalidPrice,
    NotFound,
    Duplicate,
    CapacityExceeded,
}

impl CoreError {
    /// Returns the flat kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Validation(ValidationError::InvalidName { .. }) => ErrorKind::InvalidName,
            CoreError::Validation(
                ValidationError::InvalidQuantity { .. } | ValidationError::StockOverflow { .. },
            ) => ErrorKind::InvalidQuantity,
            CoreError::Validation(ValidationError::InvalidPrice { .. }) => ErrorKind::InvalidPrice,
            CoreError::NotFound(_) => ErrorKind::NotFound,
            CoreError::Duplicate(_) => ErrorKind::Duplicate,
            CoreError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
