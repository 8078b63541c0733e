//! Record and violation types for shipment validation
//!
//! A shipment is four numeric-or-absent fields. Validation output is an
//! ordered list of field-scoped violations; violations are data, never
//! errors.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Fields a violation can attach to.
///
/// `Volume` and `Density` are derived, not stored; they exist so the two
/// derived-value rules can scope their violations the same way the four
/// input-field rules do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Weight,
    Height,
    Width,
    Depth,
    Volume,
    Density,
}

impl Field {
    /// The four caller-supplied fields, in rule evaluation order.
    pub const INPUTS: [Field; 4] = [Field::Weight, Field::Height, Field::Width, Field::Depth];

    /// The three box dimensions, in rule evaluation order.
    pub const DIMENSIONS: [Field; 3] = [Field::Height, Field::Width, Field::Depth];

    /// Returns the field name as it appears in documents and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Weight => "weight",
            Field::Height => "height",
            Field::Width => "width",
            Field::Depth => "depth",
            Field::Volume => "volume",
            Field::Density => "density",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stable rule codes, one per rule that can emit a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCode {
    /// Field missing or not numeric
    ShipFieldRequired,
    /// Volume above the configured maximum
    ShipVolumeAboveMax,
    /// Volume below the configured minimum
    ShipVolumeBelowMin,
    /// Density above the configured maximum
    ShipDensityAboveMax,
    /// Dimension too short relative to the longest side
    ShipDimensionDisproportionate,
}

impl RuleCode {
    /// Returns the string code carried in reports and responses.
    pub fn code(&self) -> &'static str {
        match self {
            RuleCode::ShipFieldRequired => "SHIP_FIELD_REQUIRED",
            RuleCode::ShipVolumeAboveMax => "SHIP_VOLUME_ABOVE_MAX",
            RuleCode::ShipVolumeBelowMin => "SHIP_VOLUME_BELOW_MIN",
            RuleCode::ShipDensityAboveMax => "SHIP_DENSITY_ABOVE_MAX",
            RuleCode::ShipDimensionDisproportionate => "SHIP_DIMENSION_DISPROPORTIONATE",
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single field-scoped rule violation.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    field: Field,
    code: RuleCode,
    message: String,
}

impl Violation {
    /// Field missing or not numeric.
    pub(crate) fn required(field: Field) -> Self {
        Self {
            field,
            code: RuleCode::ShipFieldRequired,
            message: format!("{} is required and must be a number", field),
        }
    }

    /// Volume above the configured maximum.
    pub(crate) fn volume_above_max() -> Self {
        Self {
            field: Field::Volume,
            code: RuleCode::ShipVolumeAboveMax,
            message: "exceeds maximum allowed volume".into(),
        }
    }

    /// Volume below the configured minimum.
    pub(crate) fn volume_below_min() -> Self {
        Self {
            field: Field::Volume,
            code: RuleCode::ShipVolumeBelowMin,
            message: "below minimum allowed volume".into(),
        }
    }

    /// Density above the configured maximum.
    pub(crate) fn density_above_max() -> Self {
        Self {
            field: Field::Density,
            code: RuleCode::ShipDensityAboveMax,
            message: "density too high to ship safely".into(),
        }
    }

    /// Dimension too short relative to the longest side.
    pub(crate) fn disproportionate(field: Field) -> Self {
        Self {
            field,
            code: RuleCode::ShipDimensionDisproportionate,
            message: "dimension is disproportionately short relative to the package".into(),
        }
    }

    /// Returns the field this violation is scoped to.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Returns the rule code.
    pub fn code(&self) -> RuleCode {
        self.code
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Converts to the JSON shape used in responses.
    pub fn to_json(&self) -> Value {
        json!({
            "field": self.field.as_str(),
            "code": self.code.code(),
            "message": self.message,
        })
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

/// Ordered validation outcome for one shipment.
///
/// Empty means valid. Order is rule evaluation order and is stable across
/// calls with identical input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the violations in evaluation order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the violation count.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true when the report holds no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Converts to the JSON shape used in responses.
    pub fn to_json(&self) -> Value {
        json!({
            "valid": self.is_valid(),
            "violations": self.violations.iter().map(Violation::to_json).collect::<Vec<_>>(),
        })
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// A shipment record as handed over by the persistence collaborator.
///
/// Every field is optional; absence is a reportable condition, not a parse
/// failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Weight, unit-consistent (e.g. pounds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Height, unit-consistent (e.g. inches)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Width, unit-consistent (e.g. inches)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Depth, unit-consistent (e.g. inches)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

impl Shipment {
    /// Creates a fully populated shipment.
    pub fn new(weight: f64, height: f64, width: f64, depth: f64) -> Self {
        Self {
            weight: Some(weight),
            height: Some(height),
            width: Some(width),
            depth: Some(depth),
        }
    }

    /// Computed volume, present when all three dimensions are.
    pub fn volume(&self) -> Option<f64> {
        match (self.height, self.width, self.depth) {
            (Some(height), Some(width), Some(depth)) => Some(height * width * depth),
            _ => None,
        }
    }

    /// Computed density, present when weight is and volume is strictly
    /// positive. Zero volume yields `None`, never a division.
    pub fn density(&self) -> Option<f64> {
        match (self.weight, self.volume()) {
            (Some(weight), Some(volume)) if volume > 0.0 => Some(weight / volume),
            _ => None,
        }
    }
}
