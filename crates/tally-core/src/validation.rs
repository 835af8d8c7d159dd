//! # Validation Module
//!
//! Input validation rules for item fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Menu shell (apps/cli)                                        │
//! │  ├── Coarse coercion (text → integer / real)                           │
//! │  └── Cancels the action on unparsable input                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Name: non-empty, at most MAX_NAME_LEN characters                  │
//! │  ├── Quantity: range depends on operation                              │
//! │  └── Price: 0 ..= MAX_PRICE, never NaN                                 │
//! │           │                                                             │
//! │           ├──► Inventory::add / set_quantity                           │
//! │           └──► tally-file load (same rules for records on disk)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{validate_name, validate_quantity};
//!
//! assert_eq!(validate_name("  Apple ").unwrap(), "Apple");
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_NAME_LEN, MAX_PRICE, MAX_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name and returns it trimmed.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must not be empty
/// - Must be at most `MAX_NAME_LEN` (63) characters
///
/// Commas are NOT rejected. The file format has no escaping, so a name
/// containing one will not load back as the same record.
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_name;
///
/// assert!(validate_name("Coca-Cola 330ml").is_ok());
/// assert!(validate_name("   ").is_err());
/// assert!(validate_name(&"A".repeat(64)).is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<&str> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::InvalidName {
            reason: "name is required".to_string(),
        });
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::InvalidName {
            reason: format!("name is {len} characters, maximum is {MAX_NAME_LEN}"),
        });
    }

    Ok(name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity being added to stock.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `MAX_QUANTITY`
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    check_quantity_range(qty, 1)
}

/// Validates an absolute stock level.
///
/// ## Rules
/// - Must be non-negative (zero means "out of stock")
/// - Must not exceed `MAX_QUANTITY`
pub fn validate_stock_level(qty: i64) -> ValidationResult<()> {
    check_quantity_range(qty, 0)
}

/// Validates adding `added` units to an item already holding `current`.
///
/// ## Rules
/// - `added` must itself be a valid quantity
/// - `current + added` must not exceed `MAX_QUANTITY`
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_restock;
///
/// assert_eq!(validate_restock(999_990, 10).unwrap(), 1_000_000);
/// assert!(validate_restock(999_990, 11).is_err());
/// ```
pub fn validate_restock(current: i64, added: i64) -> ValidationResult<i64> {
    validate_quantity(added)?;

    let room = MAX_QUANTITY.saturating_sub(current).max(0);
    if added > room {
        return Err(ValidationError::StockOverflow {
            added,
            room,
            max: MAX_QUANTITY,
        });
    }

    Ok(current + added)
}

fn check_quantity_range(qty: i64, min: i64) -> ValidationResult<()> {
    if !(min..=MAX_QUANTITY).contains(&qty) {
        return Err(ValidationError::InvalidQuantity {
            value: qty,
            min,
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items)
/// - Must not exceed `MAX_PRICE`
/// - NaN is rejected
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_price;
///
/// assert!(validate_price(10.99).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-0.01).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    // `contains` is false for NaN
    if !(0.0..=MAX_PRICE).contains(&price) {
        return Err(ValidationError::InvalidPrice {
            value: price,
            max: MAX_PRICE,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("Apple").unwrap(), "Apple");
        assert_eq!(validate_name("  Green Tea \t").unwrap(), "Green Tea");
        assert_eq!(validate_name(&"A".repeat(63)).unwrap().len(), 63);

        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(64)).is_err());
    }

    #[test]
    fn test_validate_name_counts_characters() {
        // 63 two-byte characters is still within the bound
        let name = "é".repeat(63);
        assert!(validate_name(&name).is_ok());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1_000_000).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1_000_001).is_err());
    }

    #[test]
    fn test_validate_stock_level() {
        assert!(validate_stock_level(0).is_ok());
        assert!(validate_stock_level(1_000_000).is_ok());

        assert!(validate_stock_level(-1).is_err());
        assert!(validate_stock_level(1_000_001).is_err());
    }

    #[test]
    fn test_validate_restock() {
        assert_eq!(validate_restock(0, 1).unwrap(), 1);
        assert_eq!(validate_restock(999_999, 1).unwrap(), 1_000_000);

        assert_eq!(
            validate_restock(999_999, 2).unwrap_err(),
            ValidationError::StockOverflow {
                added: 2,
                room: 1,
                max: 1_000_000
            }
        );
        assert_eq!(
            validate_restock(1_000_000, 1).unwrap_err(),
            ValidationError::StockOverflow {
                added: 1,
                room: 0,
                max: 1_000_000
            }
        );
        assert!(matches!(
            validate_restock(10, 0),
            Err(ValidationError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(0.99).is_ok());
        assert!(validate_price(1e9).is_ok());

        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(1e9 + 1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }
}
