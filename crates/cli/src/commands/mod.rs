//! Subcommand implementations.
//!
//! Each command writes exactly one pretty-printed JSON document to stdout.

pub mod mutate;
pub mod seed;
pub mod views;

use std::io::Write;

use serde::Serialize;

/// Write `value` to stdout as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = serde_json::to_string_pretty(value)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
