//! # Inventory Writer
//!
//! Saves an inventory as `name,quantity,price` lines.
//!
//! ## File Layout
//! ```text
//! # Tally inventory - format: name,quantity,price     ◄── header
//! Apple,100,0.99                                       ◄── one line per item,
//! Green Tea,12,3.50                                        insertion order,
//!                                                          price to 2 places
//! ```
//!
//! Output depends only on the inventory, so saving the same state twice
//! yields byte-identical files.
//!
//! The destination is truncated and rewritten on every save. There is no
//! temp-file rename and no recovery of a partial write.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tally_core::Inventory;
use tracing::info;

use crate::error::{StorageError, StorageResult};
use crate::{FIELD_SEPARATOR, HEADER};

/// Overwrites `path` with the full contents of `inventory`.
///
/// ## Returns
/// The number of records written.
///
/// ## Errors
/// `StorageError::Write` if the file cannot be created, written or flushed.
/// The inventory itself is never modified.
pub fn save(inventory: &Inventory, path: impl AsRef<Path>) -> StorageResult<usize> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|e| StorageError::write(path, e))?;
    let mut writer = BufWriter::new(file);

    let count = write_records(inventory, &mut writer).map_err(|e| StorageError::write(path, e))?;
    writer.flush().map_err(|e| StorageError::write(path, e))?;

    info!(path = %path.display(), count, "Saved inventory");
    Ok(count)
}

/// Serializes `inventory` into any writer. Returns the number of records.
pub fn write_records<W: Write>(inventory: &Inventory, writer: &mut W) -> io::Result<usize> {
    writeln!(writer, "{HEADER}")?;

    for item in inventory.items() {
        writeln!(
            writer,
            "{}{sep}{}{sep}{:.2}",
            item.name,
            item.quantity,
            item.price,
            sep = FIELD_SEPARATOR
        )?;
    }

    Ok(inventory.len())
}
