//! JSON I/O handling for CLI
//!
//! - check: one JSON document via stdin, whole input
//! - batch: one JSON document per line, blank lines skipped
//! - Output: one JSON response object per document via stdout
//! - UTF-8 only

use std::io::{self, BufRead, Read, Write};

use serde_json::{json, Value};

use crate::rules::ValidationReport;

use super::errors::{CliError, CliResult};

/// Read a single JSON document from stdin, consuming the whole input.
///
/// Whole-input reads let callers pipe pretty-printed files directly.
pub fn read_document() -> CliResult<Value> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let value: Value = serde_json::from_str(&input)?;
    Ok(value)
}

/// Read line-delimited JSON documents from stdin.
///
/// Blank lines (including the trailing newline of the last record) are
/// skipped rather than treated as malformed documents.
pub fn read_documents() -> impl Iterator<Item = CliResult<Value>> {
    let stdin = io::stdin();
    stdin
        .lock()
        .lines()
        .filter(|line| match line {
            Ok(line) => !line.trim().is_empty(),
            Err(_) => true,
        })
        .map(|line| {
            let line = line.map_err(CliError::from)?;
            serde_json::from_str(&line).map_err(CliError::from)
        })
}

/// Write a validation report response to stdout
pub fn write_report(report: &ValidationReport) -> CliResult<()> {
    let response = json!({
        "status": "ok",
        "data": report.to_json(),
    });

    write_line(&response)
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = json!({
        "status": "error",
        "code": code,
        "message": message,
    });

    write_line(&response)
}

/// Write a raw JSON value to stdout
pub fn write_json(value: &Value) -> CliResult<()> {
    write_line(value)
}

fn write_line(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
