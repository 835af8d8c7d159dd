//! # Item Types
//!
//! The stocked product record and the read-only views built from it.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Item Types                                      │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌──────────────────────┐                 │
//! │  │      Item       │          │    StockLine<'a>     │                 │
//! │  │  ─────────────  │  list()  │  ──────────────────  │                 │
//! │  │  name (key)     │ ───────► │  item: &'a Item      │                 │
//! │  │  quantity       │          │  value: qty × price  │                 │
//! │  │  price          │          └──────────────────────┘                 │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! The name is the only key. Two names identify the same item when they are
//! equal ignoring ASCII case (see [`names_match`]).

use std::fmt;

// =============================================================================
// Item
// =============================================================================

/// One stocked product.
///
/// ## Invariants (enforced by `Inventory` and the file loader)
/// - `name` is trimmed, non-empty, at most `MAX_NAME_LEN` characters
/// - `0 <= quantity <= MAX_QUANTITY`
/// - `0.0 <= price <= MAX_PRICE`
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Display name, also the case-insensitive unique key.
    pub name: String,

    /// Units in stock.
    pub quantity: i64,

    /// Unit price.
    pub price: f64,
}

impl Item {
    /// Creates an item without validation.
    ///
    /// Callers inside the workspace validate first; this exists so tests and
    /// the loader can build records directly.
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Item {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Stock value of this item (quantity × price).
    #[inline]
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    /// Checks whether `name` identifies this item.
    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// True when the item is kept in the catalog with zero units.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' qty={}, price={:.2}",
            self.name, self.quantity, self.price
        )
    }
}

// =============================================================================
// Stock Line
// =============================================================================

/// An item paired with its computed stock value, as produced by
/// `Inventory::list`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockLine<'a> {
    pub item: &'a Item,
    pub value: f64,
}

impl<'a> From<&'a Item> for StockLine<'a> {
    fn from(item: &'a Item) -> Self {
        StockLine {
            item,
            value: item.value(),
        }
    }
}

// =============================================================================
// Name Matching
// =============================================================================

/// Compares two item names ignoring case.
///
/// Only ASCII letters fold. Any other character must match exactly, and the
/// result never depends on the process locale.
///
/// ## Example
/// ```rust
/// use tally_core::names_match;
///
/// assert!(names_match("Apple", "APPLE"));
/// assert!(!names_match("Apple", "Apples"));
/// assert!(!names_match("É", "é"));
/// ```
pub fn names_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_value() {
        let item = Item::new("Apple", 100, 0.99);
        assert!((item.value() - 99.0).abs() < 1e-9);

        let empty = Item::new("Pear", 0, 3.50);
        assert_eq!(empty.value(), 0.0);
        assert!(empty.is_out_of_stock());
    }

    #[test]
    fn test_item_display() {
        let item = Item::new("Apple", 8, 2.0);
        assert_eq!(item.to_string(), "'Apple' qty=8, price=2.00");
    }

    #[test]
    fn test_names_match() {
        assert!(names_match("apple", "Apple"));
        assert!(names_match("GREEN TEA", "green tea"));
        assert!(!names_match("apple", "apple "));
        assert!(!names_match("apple", "pineapple"));
    }

    #[test]
    fn test_names_match_folds_ascii_only() {
        assert!(!names_match("É", "é"));
        assert!(!names_match("ÉCLAIR", "éclair"));
        assert!(!names_match("\u{212A}9", "k9"));
        assert!(names_match("Crème BRÛLÉE", "crème brÛlÉe"));
    }

    #[test]
    fn test_stock_line_from_item() {
        let item = Item::new("Milk", 3, 1.25);
        let line = StockLine::from(&item);
        assert_eq!(line.item.name, "Milk");
        assert!((line.value - 3.75).abs() < 1e-9);
    }
}
