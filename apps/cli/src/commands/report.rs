//! # Report Commands
//!
//! Read-only menu options: list, search, and total value.
//!
//! ## List Layout
//! ```text
//!
//!   Name                                Qty  Price ($)      Value ($)
//!   -----------------------------------------------------------------
//!   Apple                               100       0.99          99.00
//!   Green Tea                            12       3.50          42.00
//!   -----------------------------------------------------------------
//!   TOTAL                                                      141.00
//!
//! ```

use std::io::{BufRead, Write};

use super::input::read_name;
use super::Flow;
use crate::console::Console;
use crate::error::CliResult;
use crate::state::Session;

const RULE_WIDTH: usize = 65;

/// Prints every item with its stock value and a total row.
pub fn list<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> CliResult<Flow> {
    let inventory = &session.inventory;
    if inventory.is_empty() {
        console.line("  (inventory is empty)")?;
        return Ok(Flow::Continue);
    }

    let symbol = &session.config.currency_symbol;
    let rule = format!("  {}", "-".repeat(RULE_WIDTH));

    console.line("")?;
    console.line(format!(
        "  {:<30} {:>8} {:>10} {:>14}",
        "Name",
        "Qty",
        format!("Price ({symbol})"),
        format!("Value ({symbol})"),
    ))?;
    console.line(&rule)?;
    for line in inventory.list() {
        console.line(format!(
            "  {:<30} {:>8} {:>10.2} {:>14.2}",
            line.item.name, line.item.quantity, line.item.price, line.value
        ))?;
    }
    console.line(&rule)?;
    console.line(format!(
        "  {:<30} {:>8} {:>10} {:>14.2}",
        "TOTAL",
        "",
        "",
        inventory.total()
    ))?;
    console.line("")?;

    Ok(Flow::Continue)
}

/// Looks up one item by name, ignoring case.
pub fn search<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> CliResult<Flow> {
    let Some(name) = read_name(console, "  Search name: ")? else {
        return Ok(Flow::Continue);
    };

    let config = &session.config;
    match session.inventory.find(&name) {
        Some(item) => console.line(format!(
            "  {:<30} qty={:<6} price={}  stock value={}",
            item.name,
            item.quantity,
            config.format_currency(item.price),
            config.format_currency(item.value())
        ))?,
        None => console.line(format!("  Not found: '{name}'"))?,
    }
    Ok(Flow::Continue)
}

/// Prints the total stock value.
pub fn total<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> CliResult<Flow> {
    let total = session.config.format_currency(session.inventory.total());
    console.line(format!("  Total inventory value: {total}"))?;
    Ok(Flow::Continue)
}
