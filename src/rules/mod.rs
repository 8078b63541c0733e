//! Shipment validation subsystem for shipcheck
//!
//! Validates one shipment record against the shipping rule set and
//! returns an ordered, field-scoped violation report.
//!
//! # Design Principles
//!
//! - Violations are returned data, never raised errors
//! - Deterministic: identical input, identical order-stable report
//! - A missing operand skips dependent rules, it is never treated as 0
//! - Caller contract violations are errors, kept apart from violations
//! - No shared mutable state; safe to call from any thread

mod errors;
mod limits;
mod types;
mod validator;

pub use errors::{ContractError, ContractErrorCode, RuleResult, Severity};
pub use limits::{LimitsError, RuleLimits};
pub use types::{Field, RuleCode, Shipment, ValidationReport, Violation};
pub use validator::ShipmentValidator;
