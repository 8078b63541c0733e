//! shipcheck CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments (via cli::run)
//! 2. Dispatches to CLI commands (via cli::run)
//! 3. Prints errors to stderr
//! 4. Maps outcomes to exit codes: 0 valid, 1 violations, 2 rejected input
//!    or a command that could not run
//!
//! All logic is delegated to the CLI module.

use shipcheck::cli;

use std::process;

fn main() {
    match cli::run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    }
}
