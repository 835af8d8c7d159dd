//! # Console
//!
//! Line-oriented terminal I/O for the menu shell.
//!
//! Generic over the reader and writer so tests can drive it with a
//! `Cursor` and capture output in a `Vec<u8>`.
//!
//! ## Message Prefixes
//! ```text
//! [OK]    a command changed the inventory
//! [INFO]  startup and exit notices
//! [WARN]  input cancelled, skipped load records, unknown menu choice
//! [ERROR] a command was refused or a save failed
//! ```

use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints `label` and reads one trimmed line.
    ///
    /// Returns `None` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn ok(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "[OK] {msg}")
    }

    pub fn info(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "[INFO] {msg}")
    }

    pub fn warn(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "[WARN] {msg}")
    }

    pub fn error(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "[ERROR] {msg}")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
