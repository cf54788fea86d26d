//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Read all of stdin. Refuses when stdin is a terminal so the caller never
/// blocks waiting on interactive input.
pub fn read_stdin(field: &str) -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(Error::validation_invalid_argument(
            field,
            "Cannot read from stdin when stdin is a TTY",
            None,
        ));
    }

    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .map_err(|e| Error::internal_io(e.to_string(), Some("read stdin".to_string())))?;
    Ok(buf)
}

/// Resolve an input argument: `-` reads stdin, `@path` reads a file, anything else
/// is the document itself.
pub fn read_input(input: &str, field: &str) -> Result<String> {
    if input.trim() == "-" {
        return read_stdin(field);
    }

    if let Some(path) = input.strip_prefix('@') {
        if path.trim().is_empty() {
            return Err(Error::validation_invalid_argument(
                field,
                "Invalid input '@' (missing file path)",
                Some(input.to_string()),
            ));
        }
        return read_file(Path::new(path), &format!("read {}", path));
    }

    Ok(input.to_string())
}
