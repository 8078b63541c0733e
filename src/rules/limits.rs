//! Rule limits and the limits profile loader
//!
//! The numeric thresholds the rule set enforces, as data rather than
//! inline constants. Defaults are the shipping rule set; a JSON profile
//! file may override individual limits. A profile that cannot be read or
//! fails structural validation stops the tool, it never silently falls
//! back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::errors::Severity;

/// Limits profile errors, all fatal at boot
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LimitsError {
    /// Profile file could not be read
    #[error("failed to read limits profile '{path}': {reason}")]
    Unreadable { path: String, reason: String },

    /// Profile file is not valid JSON for a limits object
    #[error("invalid limits profile JSON: {0}")]
    Malformed(String),

    /// Profile parsed but a limit is structurally invalid
    #[error("invalid limit: {0}")]
    OutOfRange(String),
}

impl LimitsError {
    /// Returns the string error code
    pub fn code(&self) -> &'static str {
        match self {
            LimitsError::Unreadable { .. } => "SHIP_LIMITS_UNREADABLE",
            LimitsError::Malformed(_) => "SHIP_LIMITS_MALFORMED",
            LimitsError::OutOfRange(_) => "SHIP_LIMITS_INVALID",
        }
    }

    /// Returns the severity level. A bad profile must stop the tool.
    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}

/// Numeric thresholds enforced by the rule set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleLimits {
    /// Minimum allowed volume (cubic units)
    #[serde(default = "default_min_volume")]
    pub min_volume: f64,

    /// Maximum allowed volume (cubic units)
    #[serde(default = "default_max_volume")]
    pub max_volume: f64,

    /// Maximum allowed density (weight per cubic unit)
    #[serde(default = "default_max_density")]
    pub max_density: f64,

    /// Minimum ratio of any dimension to the longest dimension
    #[serde(default = "default_min_side_ratio")]
    pub min_side_ratio: f64,
}

fn default_min_volume() -> f64 {
    20.0
}
fn default_max_volume() -> f64 {
    4000.0
}
fn default_max_density() -> f64 {
    20.0
}
fn default_min_side_ratio() -> f64 {
    0.1
}

impl Default for RuleLimits {
    fn default() -> Self {
        Self {
            min_volume: default_min_volume(),
            max_volume: default_max_volume(),
            max_density: default_max_density(),
            min_side_ratio: default_min_side_ratio(),
        }
    }
}

impl RuleLimits {
    /// Load a limits profile from a JSON file.
    ///
    /// Omitted keys take the default limit. The loaded profile is
    /// structurally validated before it is returned.
    pub fn load(path: &Path) -> Result<Self, LimitsError> {
        let content = fs::read_to_string(path).map_err(|e| LimitsError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let limits: RuleLimits =
            serde_json::from_str(&content).map_err(|e| LimitsError::Malformed(e.to_string()))?;

        limits.validate()?;

        Ok(limits)
    }

    /// Validate the profile structure itself.
    pub fn validate(&self) -> Result<(), LimitsError> {
        let named = [
            ("min_volume", self.min_volume),
            ("max_volume", self.max_volume),
            ("max_density", self.max_density),
            ("min_side_ratio", self.min_side_ratio),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(LimitsError::OutOfRange(format!("{} must be finite", name)));
            }
        }

        if self.min_volume < 0.0 {
            return Err(LimitsError::OutOfRange("min_volume must be >= 0".into()));
        }
        if self.max_volume < self.min_volume {
            return Err(LimitsError::OutOfRange(
                "max_volume must be >= min_volume".into(),
            ));
        }
        if self.max_density <= 0.0 {
            return Err(LimitsError::OutOfRange("max_density must be > 0".into()));
        }
        if !(0.0..1.0).contains(&self.min_side_ratio) {
            return Err(LimitsError::OutOfRange(
                "min_side_ratio must be in [0, 1)".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_rule_set() {
        let limits = RuleLimits::default();
        assert_eq!(limits.min_volume, 20.0);
        assert_eq!(limits.max_volume, 4000.0);
        assert_eq!(limits.max_density, 20.0);
        assert_eq!(limits.min_side_ratio, 0.1);
    }

    #[test]
    fn test_defaults_are_structurally_valid() {
        assert!(RuleLimits::default().validate().is_ok());
    }

    #[test]
    fn test_load_full_profile() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"min_volume": 1.0, "max_volume": 100.0, "max_density": 5.0, "min_side_ratio": 0.25}}"#
        )
        .unwrap();

        let limits = RuleLimits::load(file.path()).unwrap();
        assert_eq!(limits.max_volume, 100.0);
        assert_eq!(limits.min_side_ratio, 0.25);
    }

    #[test]
    fn test_load_partial_profile_takes_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_density": 2.0}}"#).unwrap();

        let limits = RuleLimits::load(file.path()).unwrap();
        assert_eq!(limits.max_density, 2.0);
        assert_eq!(limits.min_volume, 20.0);
        assert_eq!(limits.max_volume, 4000.0);
    }

    #[test]
    fn test_load_missing_file_is_unreadable() {
        let err = RuleLimits::load(Path::new("/nonexistent/limits.json")).unwrap_err();
        assert_eq!(err.code(), "SHIP_LIMITS_UNREADABLE");
        assert_eq!(err.severity(), Severity::Fatal);
    }

    #[test]
    fn test_load_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = RuleLimits::load(file.path()).unwrap_err();
        assert_eq!(err.code(), "SHIP_LIMITS_MALFORMED");
    }

    #[test]
    fn test_inverted_volume_bounds_rejected() {
        let limits = RuleLimits {
            min_volume: 100.0,
            max_volume: 10.0,
            ..RuleLimits::default()
        };
        let err = limits.validate().unwrap_err();
        assert_eq!(err.code(), "SHIP_LIMITS_INVALID");
    }

    #[test]
    fn test_nonpositive_density_cap_rejected() {
        let limits = RuleLimits {
            max_density: 0.0,
            ..RuleLimits::default()
        };
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_side_ratio_bounds() {
        let too_large = RuleLimits {
            min_side_ratio: 1.0,
            ..RuleLimits::default()
        };
        assert!(too_large.validate().is_err());

        let negative = RuleLimits {
            min_side_ratio: -0.1,
            ..RuleLimits::default()
        };
        assert!(negative.validate().is_err());

        let zero = RuleLimits {
            min_side_ratio: 0.0,
            ..RuleLimits::default()
        };
        assert!(zero.validate().is_ok());
    }
}
