//! # tally-core: Pure Inventory Logic for Tally
//!
//! This crate is the **record store** of Tally. It owns the in-memory
//! catalog of items and every rule that keeps it consistent, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Menu Shell (apps/cli)                        │   │
//! │  │    List ──► Add ──► Remove ──► Update ──► Search ──► Save       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │ inventory │  │validation │  │   error   │  │   │
//! │  │   │   Item    │  │ Inventory │  │  rules    │  │ CoreError │  │   │
//! │  │   │ StockLine │  │ AddOutcome│  │  bounds   │  │ Validation│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • NO GLOBAL STATE            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  tally-file (Persistence Codec)                 │   │
//! │  │              name,quantity,price text file load/save            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - The `Item` record and its derived stock value
//! - [`inventory`] - The ordered, capacity-bounded record store
//! - [`validation`] - Name, quantity and price rules shared with the codec
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::Inventory;
//!
//! let mut inventory = Inventory::new();
//! inventory.add("Apple", 5, 1.0).unwrap();
//! inventory.add("apple", 3, 2.0).unwrap(); // restock: qty summed, price replaced
//!
//! let apple = inventory.find("APPLE").unwrap();
//! assert_eq!(apple.quantity, 8);
//! assert_eq!(apple.price, 2.0);
//! assert_eq!(inventory.total(), 16.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod item;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use inventory::{AddOutcome, Inventory};
pub use item::{names_match, Item, StockLine};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item name, in characters.
pub const MAX_NAME_LEN: usize = 63;

/// Largest stock level a single item may hold.
pub const MAX_QUANTITY: i64 = 1_000_000;

/// Largest unit price accepted.
pub const MAX_PRICE: f64 = 1e9;

/// Default bound on the number of distinct items in an inventory.
///
/// Individual inventories may be created with a different bound via
/// [`Inventory::with_max_items`].
pub const DEFAULT_MAX_ITEMS: usize = 500;
