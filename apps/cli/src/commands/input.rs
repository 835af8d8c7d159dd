//! Prompt helpers shared by the commands.
//!
//! Each helper prints a `[WARN] ... cancelled.` line and returns `None` when
//! the answer is unusable, so callers just return early.

use std::io::{BufRead, Write};

use tally_core::validation::validate_price;
use tally_core::MAX_QUANTITY;

use crate::console::Console;
use crate::error::CliResult;

/// Reads an item name. Empty input or end of input cancels.
pub fn read_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> CliResult<Option<String>> {
    match console.prompt(label)? {
        Some(name) if !name.is_empty() => Ok(Some(name)),
        _ => {
            console.warn("Cancelled.")?;
            Ok(None)
        }
    }
}

/// Reads a quantity in `0..=MAX_QUANTITY`.
///
/// Zero passes here; whether it is acceptable is up to the store.
pub fn read_quantity<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> CliResult<Option<i64>> {
    let parsed = console.prompt(label)?.as_deref().and_then(parse_quantity);
    if parsed.is_none() {
        console.warn("Invalid quantity - cancelled.")?;
    }
    Ok(parsed)
}

/// Reads a unit price in `0.0..=MAX_PRICE`.
pub fn read_price<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> CliResult<Option<f64>> {
    let parsed = console.prompt(label)?.as_deref().and_then(parse_price);
    if parsed.is_none() {
        console.warn("Invalid price - cancelled.")?;
    }
    Ok(parsed)
}

pub fn parse_quantity(raw: &str) -> Option<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|qty| (0..=MAX_QUANTITY).contains(qty))
}

pub fn parse_price(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|price| validate_price(*price).is_ok())
}
