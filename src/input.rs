//! Input word loading
//!
//! The index is built over a single word read from the first line of a
//! text file (`input.txt` by default). Failing to read the file is the
//! one real error in the program and is surfaced to the caller; an empty
//! first line is a valid (empty) word and simply makes every query
//! report a negative result.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read the word to index from the first line of `path`
pub fn read_word(path: &Path) -> Result<String> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;

    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .with_context(|| format!("Failed to read from {}", path.display()))?;

    // Strip the line terminator; the word itself is never trimmed further
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(line)
}
