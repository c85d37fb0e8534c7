//! Inventory emission.
//!
//! Exactly one pretty-printed JSON document on stdout per run. Logs and
//! diagnostics go to stderr so Ansible only ever parses the document.

use std::io::{self, Write};

use serde::Serialize;

use crate::error::CliError;

/// Pretty-printed JSON with two-space indentation.
pub fn render_json_pretty<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Write the rendered document to stdout, newline-terminated.
pub fn print_output(output: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    stdout.flush()?;
    Ok(())
}
