//! # Inventory (Record Store)
//!
//! The ordered, capacity-bounded collection of items.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Menu Action             Method                 State Change            │
//! │  ───────────             ──────                 ────────────            │
//! │                                                                         │
//! │  Add / restock ────────► add() ───────────────► push(item) or          │
//! │                                                 qty += n, price = p     │
//! │                                                                         │
//! │  Remove ───────────────► remove() ────────────► items.remove(i)        │
//! │                                                 (order preserved)       │
//! │                                                                         │
//! │  Update quantity ──────► set_quantity() ──────► items[i].qty = n       │
//! │                                                                         │
//! │  Search ───────────────► find() ──────────────► (read only)            │
//! │  List ─────────────────► list() ──────────────► (read only)            │
//! │  Total ────────────────► total() ─────────────► (read only)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one item per case-insensitive name
//! - `len() <= max_items()`
//! - Insertion order is preserved across every mutation
//! - Every stored item satisfies the field rules in [`crate::validation`]

use std::fmt;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::item::{Item, StockLine};
use crate::validation::{
    validate_name, validate_price, validate_quantity, validate_restock, validate_stock_level,
};
use crate::DEFAULT_MAX_ITEMS;

// =============================================================================
// Add Outcome
// =============================================================================

/// Result of a successful [`Inventory::add`].
///
/// The `Display` impl is the confirmation shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// A new item was appended.
    Added(Item),
    /// An existing item had its quantity increased and price replaced.
    Restocked(Item),
}

impl AddOutcome {
    /// The item as it is now stored.
    pub fn item(&self) -> &Item {
        match self {
            AddOutcome::Added(item) | AddOutcome::Restocked(item) => item,
        }
    }

    pub fn is_restock(&self) -> bool {
        matches!(self, AddOutcome::Restocked(_))
    }
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (verb, item) = match self {
            AddOutcome::Added(item) => ("Added", item),
            AddOutcome::Restocked(item) => ("Restocked", item),
        };
        write!(
            f,
            "{verb} '{}' -> qty={}, price={:.2}",
            item.name, item.quantity, item.price
        )
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// The record store.
///
/// Owned by whoever drives the session (the CLI shell, a test); there is no
/// process-wide instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
    max_items: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::new()
    }
}

impl Inventory {
    /// Creates an empty inventory bounded by `DEFAULT_MAX_ITEMS`.
    pub fn new() -> Self {
        Inventory::with_max_items(DEFAULT_MAX_ITEMS)
    }

    /// Creates an empty inventory holding at most `max_items` distinct items.
    pub fn with_max_items(max_items: usize) -> Self {
        Inventory {
            items: Vec::new(),
            max_items,
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds stock for `name`, creating the item if it does not exist.
    ///
    /// ## Behavior
    /// - Existing item (case-insensitive): quantity increases by `quantity`,
    ///   price is replaced by `price`. The stored spelling of the name is kept.
    /// - New item: appended at the end.
    ///
    /// ## Errors
    /// - `InvalidName`: empty or longer than `MAX_NAME_LEN`
    /// - `InvalidQuantity`: `quantity <= 0`
    /// - `StockOverflow`: the restocked total would exceed `MAX_QUANTITY`
    ///   (classified as `ErrorKind::InvalidQuantity`)
    /// - `InvalidPrice`: negative, above `MAX_PRICE`, or NaN
    /// - `CapacityExceeded`: new item while the inventory is full
    ///
    /// No state changes on error.
    pub fn add(&mut self, name: &str, quantity: i64, price: f64) -> CoreResult<AddOutcome> {
        let name = validate_name(name)?;
        validate_quantity(quantity)?;
        validate_price(price)?;

        if let Some(idx) = self.position(name) {
            let item = &mut self.items[idx];
            let new_qty = validate_restock(item.quantity, quantity)?;

            item.quantity = new_qty;
            item.price = price;
            debug!(name = %item.name, quantity = new_qty, price, "Restocked item");
            return Ok(AddOutcome::Restocked(item.clone()));
        }

        if self.is_full() {
            return Err(CoreError::CapacityExceeded {
                max: self.max_items,
            });
        }

        let item = Item::new(name, quantity, price);
        self.items.push(item.clone());
        debug!(name = %item.name, quantity, price, count = self.items.len(), "Added item");
        Ok(AddOutcome::Added(item))
    }

    /// Appends a fully formed record without restock merging.
    ///
    /// Used when rebuilding an inventory from storage, where a repeated name
    /// is a defect in the source rather than a restock.
    ///
    /// ## Errors
    /// - Validation errors for any field (quantity may be zero)
    /// - `Duplicate`: an item with the same name already exists
    /// - `CapacityExceeded`: the inventory is full
    pub fn insert(&mut self, item: Item) -> CoreResult<()> {
        let name = validate_name(&item.name)?.to_string();
        validate_stock_level(item.quantity)?;
        validate_price(item.price)?;

        if self.position(&name).is_some() {
            return Err(CoreError::Duplicate(name));
        }
        if self.is_full() {
            return Err(CoreError::CapacityExceeded {
                max: self.max_items,
            });
        }

        self.items.push(Item { name, ..item });
        Ok(())
    }

    /// Removes the item matching `name` and returns it.
    ///
    /// Items after it shift left by one; relative order is unchanged.
    pub fn remove(&mut self, name: &str) -> CoreResult<Item> {
        let idx = self
            .position(name.trim())
            .ok_or_else(|| CoreError::NotFound(name.trim().to_string()))?;

        let removed = self.items.remove(idx);
        debug!(name = %removed.name, count = self.items.len(), "Removed item");
        Ok(removed)
    }

    /// Sets the stock level of an existing item to `quantity`.
    ///
    /// Zero is allowed and keeps the item in the catalog as out of stock.
    ///
    /// ## Errors
    /// - `InvalidQuantity`: negative or above `MAX_QUANTITY`
    /// - `NotFound`: no item matches `name`
    pub fn set_quantity(&mut self, name: &str, quantity: i64) -> CoreResult<Item> {
        validate_stock_level(quantity)?;

        let idx = self
            .position(name.trim())
            .ok_or_else(|| CoreError::NotFound(name.trim().to_string()))?;

        let item = &mut self.items[idx];
        item.quantity = quantity;
        debug!(name = %item.name, quantity, "Updated quantity");
        Ok(item.clone())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Case-insensitive exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Item> {
        let name = name.trim();
        self.items.iter().find(|item| item.matches(name))
    }

    /// Sum of quantity × price over all items. Zero when empty.
    pub fn total(&self) -> f64 {
        self.items.iter().map(Item::value).sum()
    }

    /// Every item with its stock value, in insertion order.
    pub fn list(&self) -> Vec<StockLine<'_>> {
        self.items.iter().map(StockLine::from).collect()
    }

    /// The stored items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Upper bound on the number of distinct items.
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_items
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.matches(name))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ValidationError};

    fn names(inv: &Inventory) -> Vec<&str> {
        inv.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_add_new_item() {
        let mut inv = Inventory::new();
        let outcome = inv.add("Apple", 100, 0.99).unwrap();

        assert!(!outcome.is_restock());
        assert_eq!(outcome.to_string(), "Added 'Apple' -> qty=100, price=0.99");
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_add_trims_name() {
        let mut inv = Inventory::new();
        inv.add("  Apple  ", 1, 1.0).unwrap();
        assert_eq!(names(&inv), vec!["Apple"]);
    }

    #[test]
    fn test_restock_accumulates_quantity_and_replaces_price() {
        let mut inv = Inventory::new();
        inv.add("X", 5, 1.0).unwrap();
        let outcome = inv.add("X", 3, 2.0).unwrap();

        assert!(outcome.is_restock());
        assert_eq!(outcome.to_string(), "Restocked 'X' -> qty=8, price=2.00");

        let item = inv.find("x").unwrap();
        assert_eq!(item.quantity, 8);
        assert_eq!(item.price, 2.0);
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_restock_keeps_original_spelling() {
        let mut inv = Inventory::new();
        inv.add("Green Tea", 1, 1.0).unwrap();
        inv.add("GREEN TEA", 1, 1.5).unwrap();

        assert_eq!(names(&inv), vec!["Green Tea"]);
    }

    #[test]
    fn test_non_ascii_case_variants_are_distinct_items() {
        let mut inv = Inventory::new();
        inv.add("ÉCLAIR", 1, 1.0).unwrap();
        let outcome = inv.add("éclair", 2, 2.0).unwrap();

        assert!(matches!(outcome, AddOutcome::Added(_)));
        assert_eq!(names(&inv), ["ÉCLAIR", "éclair"]);
        assert_eq!(inv.find("ÉCLAIR").unwrap().quantity, 1);

        inv.add("\u{212A}9", 1, 1.0).unwrap();
        assert!(inv.find("k9").is_none());
        assert!(inv.find("\u{212A}9").is_some());
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut inv = Inventory::new();

        let err = inv.add("", 1, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidName);

        let err = inv.add(&"A".repeat(64), 1, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidName);

        let err = inv.add("Apple", 0, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuantity);

        let err = inv.add("Apple", -5, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuantity);

        let err = inv.add("Apple", 1, -0.5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPrice);

        assert!(inv.is_empty());
    }

    #[test]
    fn test_restock_beyond_max_quantity_is_rejected() {
        let mut inv = Inventory::new();
        inv.add("Bolts", 999_999, 0.10).unwrap();

        let err = inv.add("bolts", 2, 0.20).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuantity);
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::StockOverflow {
                added: 2,
                room: 1,
                max: 1_000_000,
            })
        );
        assert!(err.to_string().starts_with("Cannot add 2: only 1 more fit"));

        let item = inv.find("Bolts").unwrap();
        assert_eq!(item.quantity, 999_999);
        assert_eq!(item.price, 0.10);
    }

    #[test]
    fn test_capacity_exceeded_leaves_inventory_unchanged() {
        let mut inv = Inventory::with_max_items(2);
        inv.add("A", 1, 1.0).unwrap();
        inv.add("B", 1, 1.0).unwrap();
        let before = inv.clone();

        let err = inv.add("C", 1, 1.0).unwrap_err();
        assert_eq!(err, CoreError::CapacityExceeded { max: 2 });
        assert_eq!(inv, before);

        // Restocking an existing item still works when full
        inv.add("a", 4, 2.0).unwrap();
        assert_eq!(inv.find("A").unwrap().quantity, 5);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut inv = Inventory::new();
        for name in ["A", "B", "C", "D"] {
            inv.add(name, 1, 1.0).unwrap();
        }

        let removed = inv.remove("b").unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(names(&inv), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_remove_missing_item() {
        let mut inv = Inventory::new();
        inv.add("A", 1, 1.0).unwrap();

        let err = inv.remove("Z").unwrap_err();
        assert_eq!(err, CoreError::NotFound("Z".to_string()));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_set_quantity() {
        let mut inv = Inventory::new();
        inv.add("Apple", 10, 1.0).unwrap();

        let item = inv.set_quantity("APPLE", 3).unwrap();
        assert_eq!(item.quantity, 3);

        // Zero marks out of stock, it does not delete
        inv.set_quantity("apple", 0).unwrap();
        assert_eq!(inv.len(), 1);
        assert!(inv.find("Apple").unwrap().is_out_of_stock());
    }

    #[test]
    fn test_set_quantity_errors() {
        let mut inv = Inventory::new();
        inv.add("Apple", 10, 1.0).unwrap();

        let err = inv.set_quantity("Apple", -1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuantity);

        let err = inv.set_quantity("Pear", 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        assert_eq!(inv.find("Apple").unwrap().quantity, 10);
    }

    #[test]
    fn test_add_zero_fails_but_set_zero_succeeds() {
        let mut inv = Inventory::new();
        inv.add("Apple", 1, 1.0).unwrap();

        assert_eq!(
            inv.add("Apple", 0, 1.0).unwrap_err().kind(),
            ErrorKind::InvalidQuantity
        );
        assert!(inv.set_quantity("Apple", 0).is_ok());
    }

    #[test]
    fn test_find() {
        let mut inv = Inventory::new();
        inv.add("Apple", 1, 1.0).unwrap();

        assert_eq!(inv.find("aPPLE").unwrap().name, "Apple");
        assert!(inv.find("App").is_none());
    }

    #[test]
    fn test_total() {
        let mut inv = Inventory::new();
        assert_eq!(inv.total(), 0.0);

        inv.add("Apple", 100, 0.5).unwrap();
        inv.add("Pear", 4, 2.25).unwrap();
        assert!((inv.total() - 59.0).abs() < 1e-9);
    }

    #[test]
    fn test_list_pairs_items_with_values() {
        let mut inv = Inventory::new();
        inv.add("Apple", 2, 1.5).unwrap();
        inv.add("Pear", 1, 4.0).unwrap();

        let lines = inv.list();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].item.name, "Apple");
        assert!((lines[0].value - 3.0).abs() < 1e-9);
        assert_eq!(lines[1].item.name, "Pear");
        assert!((lines[1].value - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_insert_rejects_duplicates_and_respects_capacity() {
        let mut inv = Inventory::with_max_items(2);
        inv.insert(Item::new("Apple", 0, 1.0)).unwrap();

        let err = inv.insert(Item::new("APPLE", 5, 1.0)).unwrap_err();
        assert_eq!(err, CoreError::Duplicate("APPLE".to_string()));

        inv.insert(Item::new("Pear", 1, 1.0)).unwrap();
        let err = inv.insert(Item::new("Plum", 1, 1.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);

        assert_eq!(names(&inv), vec!["Apple", "Pear"]);
    }
}
