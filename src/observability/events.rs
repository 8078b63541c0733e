//! Observability events for shipcheck
//!
//! Every observable moment in a validation run has an explicit, typed
//! event. Events carry no payload themselves; call sites attach fields.

use std::fmt;

/// Observable events in shipcheck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Rule limits
    /// Limits profile loaded from disk
    LimitsLoaded,
    /// Limits profile unreadable or invalid (FATAL)
    LimitsLoadFailed,

    // Single check
    /// Validation of one document begins
    CheckBegin,
    /// Document validated with no violations
    CheckAccepted,
    /// Document validated with violations
    CheckRejected,
    /// Document rejected before validation (contract or parse failure)
    InputRejected,

    // Batch runs
    /// Batch processing begins
    BatchBegin,
    /// Batch processing complete
    BatchComplete,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::LimitsLoaded => "LIMITS_LOADED",
            Event::LimitsLoadFailed => "LIMITS_LOAD_FAILED",
            Event::CheckBegin => "CHECK_BEGIN",
            Event::CheckAccepted => "CHECK_ACCEPTED",
            Event::CheckRejected => "CHECK_REJECTED",
            Event::InputRejected => "INPUT_REJECTED",
            Event::BatchBegin => "BATCH_BEGIN",
            Event::BatchComplete => "BATCH_COMPLETE",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::LimitsLoadFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
