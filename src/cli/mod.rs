//! CLI module for shipcheck
//!
//! Provides command-line interface for:
//! - check: validate one shipment document from stdin
//! - batch: validate line-delimited documents from stdin
//! - limits: print the effective rule limits

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
pub use io::{read_document, read_documents, write_error, write_json, write_report};
