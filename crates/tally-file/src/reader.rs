//! # Inventory Reader
//!
//! Loads an inventory from the `name,quantity,price` text format.
//!
//! ## Line Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Each Line Is Treated                             │
//! │                                                                         │
//! │  "  # Retail stock  "  ──► trim ──► comment ──────────► skipped silently│
//! │  ""                    ──► trim ──► blank ────────────► skipped silently│
//! │  "Apple,100,0.99"      ──► split ─► validate ─► insert ► loaded         │
//! │  "Apple,10"            ──► split ─► 2 fields ─────────► warning         │
//! │  "Pear,-1,2.00"        ──► split ─► bad quantity ─────► warning         │
//! │  "APPLE,5,1.00"        ──► split ─► duplicate name ───► warning         │
//! │  (not valid UTF-8)     ──► malformed ─────────────────► warning         │
//! │  (inventory full)      ──► one warning, every later line ignored        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A warning never aborts the load. Only an I/O failure on an existing file
//! does.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tally_core::validation::{validate_name, validate_price, validate_stock_level};
use tally_core::{Inventory, Item};
use tracing::{debug, info};

use crate::error::{LoadWarning, RecordError, StorageError, StorageResult};
use crate::{COMMENT_PREFIX, FIELD_SEPARATOR};

// =============================================================================
// Load Report
// =============================================================================

/// Everything a load produced.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// The records that passed every check, in file order.
    pub inventory: Inventory,

    /// One entry per skipped line, in file order.
    pub warnings: Vec<LoadWarning>,

    /// True when the source file did not exist.
    pub source_missing: bool,

    /// Informational message for the user, set when the source was missing.
    pub note: Option<String>,
}

impl LoadReport {
    /// Number of records successfully loaded.
    pub fn loaded(&self) -> usize {
        self.inventory.len()
    }

    fn missing(path: &Path, max_items: usize) -> Self {
        LoadReport {
            inventory: Inventory::with_max_items(max_items),
            warnings: Vec::new(),
            source_missing: true,
            note: Some(format!(
                "'{}' not found - starting with empty inventory.",
                path.display()
            )),
        }
    }
}

// =============================================================================
// Load
// =============================================================================

/// Loads the inventory stored at `path`.
///
/// ## Behavior
/// - Missing file: empty inventory, `source_missing = true`, a note
/// - Existing file: parsed with [`parse_records`]
///
/// ## Errors
/// `StorageError::Read` when an existing file cannot be opened or read.
pub fn load(path: impl AsRef<Path>, max_items: usize) -> StorageResult<LoadReport> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "Inventory file not found, starting empty");
            return Ok(LoadReport::missing(path, max_items));
        }
        Err(err) => return Err(StorageError::read(path, err)),
    };

    let report =
        parse_records(BufReader::new(file), max_items).map_err(|e| StorageError::read(path, e))?;

    info!(
        path = %path.display(),
        loaded = report.loaded(),
        warnings = report.warnings.len(),
        "Loaded inventory"
    );
    Ok(report)
}

/// Parses records from any buffered reader.
///
/// A line that is not valid UTF-8 is skipped with a malformed-record
/// warning. Its name is never rewritten.
pub fn parse_records<R: BufRead>(mut reader: R, max_items: usize) -> io::Result<LoadReport> {
    let mut inventory = Inventory::with_max_items(max_items);
    let mut warnings = Vec::new();
    let mut capacity_reached = false;
    let mut line_no = 0usize;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(text) => text.trim(),
            Err(_) => {
                if !capacity_reached {
                    let shown = String::from_utf8_lossy(&buf);
                    push_warning(&mut warnings, line_no, shown.trim(), RecordError::Malformed);
                }
                continue;
            }
        };

        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        // Keep reading to the end so the source is fully consumed
        if capacity_reached {
            continue;
        }

        if inventory.is_full() {
            capacity_reached = true;
            push_warning(
                &mut warnings,
                line_no,
                line,
                RecordError::CapacityReached {
                    max: inventory.max_items(),
                },
            );
            continue;
        }

        let result =
            parse_line(line).and_then(|item| inventory.insert(item).map_err(RecordError::from));

        if let Err(error) = result {
            push_warning(&mut warnings, line_no, line, error);
        }
    }

    Ok(LoadReport {
        inventory,
        warnings,
        source_missing: false,
        note: None,
    })
}

fn push_warning(warnings: &mut Vec<LoadWarning>, line: usize, content: &str, error: RecordError) {
    debug!(line, content, %error, "Skipped record");
    warnings.push(LoadWarning {
        line,
        content: content.to_string(),
        error,
    });
}

/// Parses and validates one trimmed, non-comment line.
///
/// ## Example
/// ```rust
/// use tally_file::reader::parse_line;
///
/// let item = parse_line("Apple, 100, 0.99").unwrap();
/// assert_eq!(item.name, "Apple");
/// assert_eq!(item.quantity, 100);
///
/// assert!(parse_line("Apple,100").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<Item, RecordError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();

    let [name, quantity, price] = fields.as_slice() else {
        return Err(RecordError::Malformed);
    };
    if name.is_empty() || quantity.is_empty() || price.is_empty() {
        return Err(RecordError::Malformed);
    }

    let name = validate_name(name).map_err(|source| RecordError::InvalidName {
        raw: name.to_string(),
        source,
    })?;

    let quantity = quantity
        .parse::<i64>()
        .ok()
        .filter(|qty| validate_stock_level(*qty).is_ok())
        .ok_or_else(|| RecordError::InvalidQuantity {
            raw: quantity.to_string(),
        })?;

    let price = price
        .parse::<f64>()
        .ok()
        .filter(|p| validate_price(*p).is_ok())
        .ok_or_else(|| RecordError::InvalidPrice {
            raw: price.to_string(),
        })?;

    Ok(Item::new(name, quantity, price))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WarningKind;
    use std::io::Cursor;

    fn parse(text: &str, max_items: usize) -> LoadReport {
        parse_records(Cursor::new(text.as_bytes()), max_items).unwrap()
    }

    #[test]
    fn test_parse_line_trims_fields() {
        let item = parse_line("  Green Tea ,  12 , 3.5 ").unwrap();
        assert_eq!(item, Item::new("Green Tea", 12, 3.5));
    }

    #[test]
    fn test_parse_line_field_count() {
        assert_eq!(parse_line("Apple,10"), Err(RecordError::Malformed));
        assert_eq!(parse_line("Apple,10,1.0,extra"), Err(RecordError::Malformed));
        assert_eq!(parse_line("Apple,,1.0"), Err(RecordError::Malformed));
        assert_eq!(parse_line("Apple, ,1.0"), Err(RecordError::Malformed));
    }

    #[test]
    fn test_parse_line_quantity_rules() {
        assert!(parse_line("Apple,0,1.0").is_ok());
        assert!(parse_line("Apple,1000000,1.0").is_ok());

        for raw in ["-1", "1000001", "3.5", "ten", "0x10"] {
            let err = parse_line(&format!("Apple,{raw},1.0")).unwrap_err();
            assert_eq!(
                err,
                RecordError::InvalidQuantity {
                    raw: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn test_parse_line_price_rules() {
        assert_eq!(parse_line("Apple,1,2").unwrap().price, 2.0);
        assert_eq!(parse_line("Apple,1,1e2").unwrap().price, 100.0);
        assert_eq!(parse_line("Apple,1,0.125").unwrap().price, 0.125);

        for raw in ["-0.01", "1e10", "NaN", "inf", "free"] {
            let err = parse_line(&format!("Apple,1,{raw}")).unwrap_err();
            assert!(matches!(err, RecordError::InvalidPrice { .. }), "{raw}");
        }
    }

    #[test]
    fn test_parse_line_name_too_long() {
        let line = format!("{},1,1.0", "N".repeat(64));
        assert!(matches!(
            parse_line(&line),
            Err(RecordError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_comments_and_blank_lines_are_silent() {
        let report = parse(
            "# header\n\n   \n  # indented comment\nApple,1,1.00\n",
            10,
        );
        assert_eq!(report.loaded(), 1);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_one_good_line_one_malformed_line() {
        let report = parse("Apple,100,0.99\nPear,5\n", 10);

        assert_eq!(report.loaded(), 1);
        assert_eq!(report.inventory.items()[0], Item::new("Apple", 100, 0.99));
        assert_eq!(report.warnings.len(), 1);

        let warning = &report.warnings[0];
        assert_eq!(warning.line, 2);
        assert_eq!(warning.content, "Pear,5");
        assert_eq!(warning.kind(), WarningKind::MalformedRecord);
    }

    #[test]
    fn test_duplicates_are_skipped_not_merged() {
        let report = parse("Apple,10,1.00\nAPPLE,5,2.00\n", 10);

        assert_eq!(report.loaded(), 1);
        let apple = report.inventory.find("apple").unwrap();
        assert_eq!(apple.quantity, 10);
        assert_eq!(apple.price, 1.0);

        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].line, 2);
        assert_eq!(report.warnings[0].kind(), WarningKind::DuplicateRecord);
    }

    #[test]
    fn test_capacity_warns_once_and_consumes_rest() {
        let text = "A,1,1\nB,1,1\nC,1,1\nD,garbage\nE,1,1\n";
        let report = parse(text, 2);

        assert_eq!(report.loaded(), 2);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].line, 3);
        assert_eq!(
            report.warnings[0].error,
            RecordError::CapacityReached { max: 2 }
        );
    }

    #[test]
    fn test_line_numbers_count_every_line() {
        let report = parse("# c\n\nApple,1,1\nbad\n", 10);
        assert_eq!(report.warnings[0].line, 4);
    }

    #[test]
    fn test_windows_line_endings() {
        let report = parse("Apple,1,1.50\r\nPear,2,2.00\r\n", 10);
        assert_eq!(report.loaded(), 2);
        assert_eq!(report.inventory.find("Pear").unwrap().price, 2.0);
    }

    #[test]
    fn test_invalid_utf8_line_is_malformed() {
        let mut bytes = b"Apple,1,1.00\n".to_vec();
        bytes.extend_from_slice(b"\xff\xfe,2,2.00\n");
        bytes.extend_from_slice(b"Pear,3,3.00\n");

        let report = parse_records(Cursor::new(bytes), 10).unwrap();
        assert_eq!(report.loaded(), 2);
        assert!(report.inventory.find("Pear").is_some());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].line, 2);
        assert_eq!(report.warnings[0].error, RecordError::Malformed);
    }

    #[test]
    fn test_invalid_utf8_names_are_not_merged() {
        let bytes = b"\xffA,1,1.00\n\xfeA,2,2.00\n".to_vec();

        let report = parse_records(Cursor::new(bytes), 10).unwrap();
        assert_eq!(report.loaded(), 0);
        assert_eq!(report.warnings.len(), 2);
        assert!(report
            .warnings
            .iter()
            .all(|w| w.kind() == WarningKind::MalformedRecord));
    }
}
