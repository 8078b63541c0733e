//! Contract error types for the validation subsystem
//!
//! Contract errors are programmer or operator errors, kept strictly apart
//! from rule violations: a violation is data in the report, a contract
//! error is a failed call.
//!
//! Error codes:
//! - SHIP_INVALID_INPUT (REJECT)

use std::fmt;

/// Severity levels for contract errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Caller request rejected
    Reject,
    /// shipcheck must terminate (misconfigured rule profile at boot)
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Contract error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractErrorCode {
    /// Input structure is not a shipment document
    ShipInvalidInput,
}

impl ContractErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ContractErrorCode::ShipInvalidInput => "SHIP_INVALID_INPUT",
        }
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        match self {
            ContractErrorCode::ShipInvalidInput => Severity::Reject,
        }
    }
}

impl fmt::Display for ContractErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Contract error with call-site context
#[derive(Debug, Clone)]
pub struct ContractError {
    /// Error code
    code: ContractErrorCode,
    /// Human-readable message
    message: String,
    /// What the contract expected
    expected: String,
    /// What the caller actually passed
    actual: String,
}

impl ContractError {
    /// Create an invalid input error for a non-object document root.
    pub fn invalid_input(actual: impl Into<String>) -> Self {
        let actual = actual.into();
        Self {
            code: ContractErrorCode::ShipInvalidInput,
            message: format!("shipment document must be a JSON object, got {}", actual),
            expected: "object".into(),
            actual,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ContractErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns what the contract expected
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Returns what the caller actually passed
    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// Returns whether this error must terminate the process
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for ContractError {}

/// Result type for fallible rule operations
pub type RuleResult<T> = Result<T, ContractError>;
