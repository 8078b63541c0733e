//! shipcheck - A strict, deterministic shipment validation engine
//!
//! Validates a shipment record (weight plus three box dimensions) against
//! volume, density, and proportion rules, returning an ordered,
//! field-scoped violation report instead of failing on the first finding.

pub mod cli;
pub mod observability;
pub mod rules;
