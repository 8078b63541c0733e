//! Metrics registry for shipcheck
//!
//! - Counters only
//! - Monotonic increase, reset only on process start
//! - Thread-safe, lock-free

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics registry containing all operational counters
///
/// Counters use `Relaxed` atomics; exact cross-thread ordering does not
/// matter for monotonic counters.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Documents that reached rule evaluation
    checks_run: AtomicU64,
    /// Documents with an empty report
    checks_passed: AtomicU64,
    /// Documents with at least one violation
    checks_rejected: AtomicU64,
    /// Total violations across all checks
    violations_emitted: AtomicU64,
    /// Documents rejected before rule evaluation
    inputs_rejected: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment documents that reached rule evaluation
    pub fn increment_checks_run(&self) {
        self.checks_run.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment documents that validated clean
    pub fn increment_checks_passed(&self) {
        self.checks_passed.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment documents that validated with violations
    pub fn increment_checks_rejected(&self) {
        self.checks_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Add emitted violations
    pub fn add_violations(&self, count: u64) {
        self.violations_emitted.fetch_add(count, Ordering::Relaxed);
    }

    /// Increment documents rejected before rule evaluation
    pub fn increment_inputs_rejected(&self) {
        self.inputs_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get checks run
    pub fn checks_run(&self) -> u64 {
        self.checks_run.load(Ordering::Relaxed)
    }

    /// Get checks passed
    pub fn checks_passed(&self) -> u64 {
        self.checks_passed.load(Ordering::Relaxed)
    }

    /// Get checks rejected
    pub fn checks_rejected(&self) -> u64 {
        self.checks_rejected.load(Ordering::Relaxed)
    }

    /// Get violations emitted
    pub fn violations_emitted(&self) -> u64 {
        self.violations_emitted.load(Ordering::Relaxed)
    }

    /// Get inputs rejected
    pub fn inputs_rejected(&self) -> u64 {
        self.inputs_rejected.load(Ordering::Relaxed)
    }

    /// Take a point-in-time snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            checks_run: self.checks_run(),
            checks_passed: self.checks_passed(),
            checks_rejected: self.checks_rejected(),
            violations_emitted: self.violations_emitted(),
            inputs_rejected: self.inputs_rejected(),
        }
    }
}

/// Point-in-time copy of all counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub checks_run: u64,
    pub checks_passed: u64,
    pub checks_rejected: u64,
    pub violations_emitted: u64,
    pub inputs_rejected: u64,
}
