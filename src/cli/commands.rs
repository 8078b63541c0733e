//! CLI command implementations
//!
//! Commands are thin drivers over the rules subsystem: load the limits
//! profile, read documents, validate, write responses. Exit codes:
//! 0 every document valid, 1 at least one violation, 2 at least one
//! document rejected before validation.

use std::path::Path;

use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};
use crate::rules::{RuleLimits, ShipmentValidator};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_document, read_documents, write_error, write_json, write_report};

/// Parse arguments and run the selected command.
///
/// Returns the process exit code; `Err` means the command could not run
/// at all (unreadable limits profile, broken stdin/stdout).
pub fn run() -> CliResult<i32> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a single parsed command
pub fn run_command(command: Command) -> CliResult<i32> {
    match command {
        Command::Check { limits } => check(limits.as_deref()),
        Command::Batch { limits } => batch(limits.as_deref()),
        Command::Limits { limits } => print_limits(limits.as_deref()),
    }
}

/// Load the limits profile, falling back to the default rule set only
/// when no path was given.
fn load_limits(path: Option<&Path>) -> CliResult<RuleLimits> {
    let Some(path) = path else {
        return Ok(RuleLimits::default());
    };

    match RuleLimits::load(path) {
        Ok(limits) => {
            log_event_with_fields(
                Event::LimitsLoaded,
                &[("path", &path.display().to_string())],
            );
            Ok(limits)
        }
        Err(err) => {
            log_event_with_fields(
                Event::LimitsLoadFailed,
                &[
                    ("path", &path.display().to_string()),
                    ("reason", &err.to_string()),
                ],
            );
            Err(err.into())
        }
    }
}

/// Write an error response for a document that never reached rule
/// evaluation.
fn reject_input(err: &CliError) -> CliResult<()> {
    write_error(err.code(), &err.to_string())?;
    log_event_with_fields(Event::InputRejected, &[("code", err.code())]);
    Ok(())
}

/// Validate one document from stdin
fn check(limits_path: Option<&Path>) -> CliResult<i32> {
    let limits = load_limits(limits_path)?;
    let validator = ShipmentValidator::new(limits);

    log_event(Event::CheckBegin);

    let document = match read_document() {
        Ok(document) => document,
        Err(err @ CliError::Json(_)) => {
            reject_input(&err)?;
            return Ok(2);
        }
        Err(err) => return Err(err),
    };

    match validator.validate_document(&document) {
        Ok(report) => {
            write_report(&report)?;
            if report.is_valid() {
                log_event(Event::CheckAccepted);
                Ok(0)
            } else {
                log_event_with_fields(
                    Event::CheckRejected,
                    &[("violations", &report.len().to_string())],
                );
                Ok(1)
            }
        }
        Err(err) => {
            reject_input(&CliError::from(err))?;
            Ok(2)
        }
    }
}

/// Validate line-delimited documents from stdin
fn batch(limits_path: Option<&Path>) -> CliResult<i32> {
    let limits = load_limits(limits_path)?;
    let validator = ShipmentValidator::new(limits);
    let metrics = MetricsRegistry::new();

    log_event(Event::BatchBegin);

    let mut exit = 0;
    for document in read_documents() {
        let document = match document {
            Ok(document) => document,
            Err(err @ CliError::Json(_)) => {
                metrics.increment_inputs_rejected();
                reject_input(&err)?;
                exit = exit.max(2);
                continue;
            }
            Err(err) => return Err(err),
        };

        match validator.validate_document(&document) {
            Ok(report) => {
                metrics.increment_checks_run();
                if report.is_valid() {
                    metrics.increment_checks_passed();
                } else {
                    metrics.increment_checks_rejected();
                    metrics.add_violations(report.len() as u64);
                    exit = exit.max(1);
                }
                write_report(&report)?;
            }
            Err(err) => {
                metrics.increment_inputs_rejected();
                reject_input(&CliError::from(err))?;
                exit = exit.max(2);
            }
        }
    }

    let snapshot = metrics.snapshot();
    let checks_run = snapshot.checks_run.to_string();
    let checks_passed = snapshot.checks_passed.to_string();
    let checks_rejected = snapshot.checks_rejected.to_string();
    let violations = snapshot.violations_emitted.to_string();
    let inputs_rejected = snapshot.inputs_rejected.to_string();
    log_event_with_fields(
        Event::BatchComplete,
        &[
            ("checks_passed", &checks_passed),
            ("checks_rejected", &checks_rejected),
            ("checks_run", &checks_run),
            ("inputs_rejected", &inputs_rejected),
            ("violations", &violations),
        ],
    );

    Ok(exit)
}

/// Print the effective rule limits
fn print_limits(limits_path: Option<&Path>) -> CliResult<i32> {
    let limits = load_limits(limits_path)?;
    write_json(&serde_json::to_value(limits)?)?;
    Ok(0)
}
