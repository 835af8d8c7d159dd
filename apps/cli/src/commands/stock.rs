//! # Stock Commands
//!
//! Menu options that change the inventory: add/restock, remove, and
//! update quantity.
//!
//! ## Add Flow
//! ```text
//! "Item name  : " ──► empty? ──────────────────► [WARN] Cancelled.
//!        │
//!        ▼
//! "Quantity   : " ──► not 0..=1000000? ────────► [WARN] Invalid quantity - cancelled.
//!        │
//!        ▼
//! "Price ($)  : " ──► not 0..=1e9? ────────────► [WARN] Invalid price - cancelled.
//!        │
//!        ▼
//! Inventory::add ──► Err(CoreError) ───────────► [ERROR] <reason>
//!        │
//!        ▼
//! [OK] Added 'Apple' -> qty=5, price=1.00
//! ```

use std::io::{BufRead, Write};

use tracing::debug;

use super::input::{read_name, read_price, read_quantity};
use super::Flow;
use crate::console::Console;
use crate::error::CliResult;
use crate::state::Session;

/// Adds a new item or restocks an existing one.
pub fn add<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> CliResult<Flow> {
    let Some(name) = read_name(console, "  Item name  : ")? else {
        return Ok(Flow::Continue);
    };
    let Some(quantity) = read_quantity(console, "  Quantity   : ")? else {
        return Ok(Flow::Continue);
    };
    let price_label = format!("  Price ({})  : ", session.config.currency_symbol);
    let Some(price) = read_price(console, &price_label)? else {
        return Ok(Flow::Continue);
    };

    let outcome = session.inventory.add(&name, quantity, price)?;
    debug!(restock = outcome.is_restock(), "Add command completed");
    console.ok(outcome)?;
    Ok(Flow::Continue)
}

/// Removes an item, keeping the order of the rest.
pub fn remove<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> CliResult<Flow> {
    let Some(name) = read_name(console, "  Item name to remove: ")? else {
        return Ok(Flow::Continue);
    };

    let removed = session.inventory.remove(&name)?;
    console.ok(format!("Removed '{}'.", removed.name))?;
    Ok(Flow::Continue)
}

/// Replaces an item's quantity. Zero is allowed.
pub fn update_quantity<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> CliResult<Flow> {
    let Some(name) = read_name(console, "  Item name    : ")? else {
        return Ok(Flow::Continue);
    };
    let Some(quantity) = read_quantity(console, "  New quantity : ")? else {
        return Ok(Flow::Continue);
    };

    let item = session.inventory.set_quantity(&name, quantity)?;
    console.ok(format!("'{}' quantity -> {}", item.name, item.quantity))?;
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;
    use std::io::Cursor;
    use tally_core::Inventory;

    fn session() -> Session {
        Session::new(ConfigState::default(), Inventory::new())
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_add_then_restock() {
        let mut session = session();

        let mut con = console("Apple\n5\n1.00\napple\n3\n2.00\n");
        add(&mut session, &mut con).unwrap();
        add(&mut session, &mut con).unwrap();

        let apple = session.inventory.find("APPLE").unwrap();
        assert_eq!(apple.name, "Apple");
        assert_eq!(apple.quantity, 8);
        assert_eq!(apple.price, 2.0);

        let out = output(con);
        assert!(out.contains("[OK] Added 'Apple' -> qty=5, price=1.00"));
        assert!(out.contains("[OK] Restocked 'Apple' -> qty=8, price=2.00"));
    }

    #[test]
    fn test_add_zero_quantity_refused_by_store() {
        let mut session = session();
        let mut con = console("Apple\n0\n1.00\n");

        let err = add(&mut session, &mut con).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(session.inventory.is_empty());
    }

    #[test]
    fn test_add_bad_price_cancels() {
        let mut session = session();
        let mut con = console("Apple\n5\n-1\n");

        assert_eq!(add(&mut session, &mut con).unwrap(), Flow::Continue);
        assert!(session.inventory.is_empty());
        assert!(output(con).contains("[WARN] Invalid price - cancelled."));
    }

    #[test]
    fn test_add_at_capacity() {
        let mut session = Session::new(ConfigState::default(), Inventory::with_max_items(1));
        session.inventory.add("Apple", 1, 1.0).unwrap();

        let mut con = console("Pear\n1\n1.00\n");
        let err = add(&mut session, &mut con).unwrap_err();
        assert_eq!(err.code, ErrorCode::CapacityExceeded);
        assert_eq!(session.inventory.len(), 1);
    }

    #[test]
    fn test_remove_missing_item() {
        let mut session = session();
        let mut con = console("Ghost\n");

        let err = remove(&mut session, &mut con).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "'Ghost' not found in inventory");
    }

    #[test]
    fn test_remove_uses_stored_spelling() {
        let mut session = session();
        session.inventory.add("Green Tea", 1, 1.0).unwrap();

        let mut con = console("GREEN TEA\n");
        remove(&mut session, &mut con).unwrap();

        assert!(session.inventory.is_empty());
        assert!(output(con).contains("[OK] Removed 'Green Tea'."));
    }

    #[test]
    fn test_update_quantity_to_zero() {
        let mut session = session();
        session.inventory.add("Apple", 5, 1.0).unwrap();

        let mut con = console("apple\n0\n");
        update_quantity(&mut session, &mut con).unwrap();

        assert_eq!(session.inventory.find("Apple").unwrap().quantity, 0);
        assert!(output(con).contains("[OK] 'Apple' quantity -> 0"));
    }
}
