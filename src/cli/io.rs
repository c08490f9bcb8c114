//! JSON output for the CLI
//!
//! - Output: one JSON document per line on stdout
//! - UTF-8 only

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a serializable value to stdout as one JSON line
pub fn write_response<T: Serialize>(value: &T) -> CliResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_to(&mut handle, value)
}

fn write_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
