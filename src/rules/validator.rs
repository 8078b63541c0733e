//! Shipment validator
//!
//! Single-pass rule evaluation over an immutable snapshot of the four
//! input fields. Rules run in a fixed order so the report is order-stable:
//! presence, volume bounds, density, proportion.
//!
//! A missing or non-numeric operand skips every rule that would need it.
//! One presence failure must not cascade into spurious derived-value
//! failures, and nothing here ever divides by a missing or zero volume.

use serde_json::Value;

use super::errors::{ContractError, RuleResult};
use super::limits::RuleLimits;
use super::types::{Field, Shipment, ValidationReport, Violation};

/// Validator holding the active rule limits.
///
/// Validation is pure and deterministic: no observable side effects, and
/// identical input yields an identical, order-stable report. Malformed
/// numeric input becomes a violation, never a panic.
pub struct ShipmentValidator {
    limits: RuleLimits,
}

impl ShipmentValidator {
    /// Creates a validator with the given limits.
    pub fn new(limits: RuleLimits) -> Self {
        Self { limits }
    }

    /// Creates a validator with the default rule set.
    pub fn with_defaults() -> Self {
        Self::new(RuleLimits::default())
    }

    /// Returns the active limits.
    pub fn limits(&self) -> &RuleLimits {
        &self.limits
    }

    /// Validates a typed shipment record.
    pub fn validate(&self, shipment: &Shipment) -> ValidationReport {
        self.evaluate(FieldValues::from_shipment(shipment))
    }

    /// Validates a shipment document as handed over by the persistence
    /// collaborator.
    ///
    /// Per field: absent, `null`, or non-numeric values are reportable
    /// presence violations. Fields beyond the four (ids, timestamps) are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `SHIP_INVALID_INPUT` when the document root is not a JSON
    /// object. That is a caller contract violation, not a validation
    /// outcome.
    pub fn validate_document(&self, document: &Value) -> RuleResult<ValidationReport> {
        let obj = document
            .as_object()
            .ok_or_else(|| ContractError::invalid_input(json_type_name(document)))?;

        Ok(self.evaluate(FieldValues::from_object(obj)))
    }

    /// Runs the rule sequence over one snapshot.
    fn evaluate(&self, fields: FieldValues) -> ValidationReport {
        let mut report = ValidationReport::new();

        // 1. Presence, in declaration order
        for (field, value) in fields.inputs() {
            if value.is_none() {
                report.push(Violation::required(field));
            }
        }

        let Some((height, width, depth)) = fields.dimensions() else {
            // Volume, density, and proportion all need the three
            // dimensions; nothing more can be evaluated.
            return report;
        };

        // 2. Volume bounds, mutually exclusive by construction
        let volume = height * width * depth;
        if volume > self.limits.max_volume {
            report.push(Violation::volume_above_max());
        } else if volume < self.limits.min_volume {
            report.push(Violation::volume_below_min());
        }

        // 3. Density; zero volume skips the rule instead of dividing
        if let Some(weight) = fields.weight {
            if volume > 0.0 && weight / volume > self.limits.max_density {
                report.push(Violation::density_above_max());
            }
        }

        // 4. Proportion, independently per dimension
        let longest = height.max(width).max(depth);
        for (field, dim) in [
            (Field::Height, height),
            (Field::Width, width),
            (Field::Depth, depth),
        ] {
            if dim < self.limits.min_side_ratio * longest {
                report.push(Violation::disproportionate(field));
            }
        }

        report
    }
}

impl Default for ShipmentValidator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Snapshot of the four input fields, normalized to present-and-finite or
/// absent. Both input surfaces converge here.
struct FieldValues {
    weight: Option<f64>,
    height: Option<f64>,
    width: Option<f64>,
    depth: Option<f64>,
}

impl FieldValues {
    fn from_shipment(shipment: &Shipment) -> Self {
        Self {
            weight: finite(shipment.weight),
            height: finite(shipment.height),
            width: finite(shipment.width),
            depth: finite(shipment.depth),
        }
    }

    fn from_object(obj: &serde_json::Map<String, Value>) -> Self {
        Self {
            weight: numeric_field(obj, Field::Weight),
            height: numeric_field(obj, Field::Height),
            width: numeric_field(obj, Field::Width),
            depth: numeric_field(obj, Field::Depth),
        }
    }

    /// The four fields paired with their names, in rule evaluation order.
    fn inputs(&self) -> [(Field, Option<f64>); 4] {
        [
            (Field::Weight, self.weight),
            (Field::Height, self.height),
            (Field::Width, self.width),
            (Field::Depth, self.depth),
        ]
    }

    /// All three dimensions, when all three are present.
    fn dimensions(&self) -> Option<(f64, f64, f64)> {
        match (self.height, self.width, self.depth) {
            (Some(height), Some(width), Some(depth)) => Some((height, width, depth)),
            _ => None,
        }
    }
}

/// Non-finite values are treated as absent so every comparison runs on
/// finite operands.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Reads one named field from a document, accepting JSON numbers only.
fn numeric_field(obj: &serde_json::Map<String, Value>, field: Field) -> Option<f64> {
    finite(obj.get(field.as_str()).and_then(Value::as_f64))
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleCode;
    use serde_json::json;

    fn validator() -> ShipmentValidator {
        ShipmentValidator::with_defaults()
    }

    fn codes(report: &ValidationReport) -> Vec<RuleCode> {
        report.violations().iter().map(|v| v.code()).collect()
    }

    #[test]
    fn test_valid_shipment_passes() {
        let report = validator().validate(&Shipment::new(10.0, 10.0, 10.0, 10.0));
        assert!(report.is_valid());
    }

    #[test]
    fn test_valid_document_passes() {
        let doc = json!({
            "weight": 10.0,
            "height": 10.0,
            "width": 10.0,
            "depth": 10.0
        });
        let report = validator().validate_document(&doc).unwrap();
        assert!(report.is_valid());
    }

    #[test]
    fn test_missing_field_emits_presence_violation() {
        let shipment = Shipment {
            weight: None,
            ..Shipment::new(0.0, 10.0, 10.0, 10.0)
        };
        let report = validator().validate(&shipment);

        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].field(), Field::Weight);
        assert_eq!(codes(&report), vec![RuleCode::ShipFieldRequired]);
    }

    #[test]
    fn test_non_numeric_field_emits_presence_violation() {
        let doc = json!({
            "weight": "heavy",
            "height": 10.0,
            "width": 10.0,
            "depth": 10.0
        });
        let report = validator().validate_document(&doc).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].field(), Field::Weight);
    }

    #[test]
    fn test_null_field_treated_as_missing() {
        let doc = json!({
            "weight": null,
            "height": 10.0,
            "width": 10.0,
            "depth": 10.0
        });
        let report = validator().validate_document(&doc).unwrap();

        assert_eq!(codes(&report), vec![RuleCode::ShipFieldRequired]);
    }

    #[test]
    fn test_integer_accepted_as_numeric() {
        let doc = json!({
            "weight": 10,
            "height": 10,
            "width": 10,
            "depth": 10
        });
        let report = validator().validate_document(&doc).unwrap();
        assert!(report.is_valid());
    }

    #[test]
    fn test_collaborator_columns_ignored() {
        let doc = json!({
            "id": 42,
            "weight": 10.0,
            "height": 10.0,
            "width": 10.0,
            "depth": 10.0,
            "created_at": "2017-01-25T02:04:58Z",
            "updated_at": "2017-01-25T02:04:58Z"
        });
        let report = validator().validate_document(&doc).unwrap();
        assert!(report.is_valid());
    }

    #[test]
    fn test_non_object_document_is_contract_error() {
        let err = validator().validate_document(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.code().code(), "SHIP_INVALID_INPUT");
        assert_eq!(err.actual(), "array");

        let err = validator().validate_document(&Value::Null).unwrap_err();
        assert_eq!(err.actual(), "null");
    }

    #[test]
    fn test_volume_above_max() {
        let report = validator().validate(&Shipment::new(10.0, 20.0, 20.0, 20.0));
        assert_eq!(codes(&report), vec![RuleCode::ShipVolumeAboveMax]);
    }

    #[test]
    fn test_volume_below_min() {
        let report = validator().validate(&Shipment::new(10.0, 1.0, 1.0, 1.0));
        assert_eq!(codes(&report), vec![RuleCode::ShipVolumeBelowMin]);
    }

    #[test]
    fn test_density_above_max() {
        let report = validator().validate(&Shipment::new(25000.0, 10.0, 10.0, 10.0));
        assert_eq!(codes(&report), vec![RuleCode::ShipDensityAboveMax]);
    }

    #[test]
    fn test_density_at_cap_passes() {
        // density == max_density is allowed, only strictly above fails
        let report = validator().validate(&Shipment::new(20000.0, 10.0, 10.0, 10.0));
        assert!(report.is_valid());
    }

    #[test]
    fn test_proportion_flags_each_short_dimension() {
        let report = validator().validate(&Shipment::new(50.0, 100.0, 1.0, 1.0));

        let fields: Vec<Field> = report.violations().iter().map(|v| v.field()).collect();
        assert_eq!(fields, vec![Field::Width, Field::Depth]);
        assert!(report
            .violations()
            .iter()
            .all(|v| v.code() == RuleCode::ShipDimensionDisproportionate));
    }

    #[test]
    fn test_zero_dimension_skips_density() {
        // volume is 0: the density rule is skipped, never divided
        let report = validator().validate(&Shipment::new(10.0, 0.0, 10.0, 10.0));

        assert!(codes(&report).contains(&RuleCode::ShipVolumeBelowMin));
        assert!(!codes(&report).contains(&RuleCode::ShipDensityAboveMax));
    }

    #[test]
    fn test_missing_weight_skips_density_only() {
        // Dimension rules still run with the present dimensions.
        let shipment = Shipment {
            weight: None,
            height: Some(20.0),
            width: Some(20.0),
            depth: Some(20.0),
        };
        let report = validator().validate(&shipment);

        assert_eq!(
            codes(&report),
            vec![RuleCode::ShipFieldRequired, RuleCode::ShipVolumeAboveMax]
        );
    }

    #[test]
    fn test_missing_dimension_skips_derived_rules() {
        let shipment = Shipment {
            weight: Some(10.0),
            height: Some(10.0),
            width: None,
            depth: Some(10.0),
        };
        let report = validator().validate(&shipment);

        assert_eq!(codes(&report), vec![RuleCode::ShipFieldRequired]);
        assert_eq!(report.violations()[0].field(), Field::Width);
    }

    #[test]
    fn test_non_finite_treated_as_missing() {
        let shipment = Shipment {
            weight: Some(f64::NAN),
            height: Some(10.0),
            width: Some(f64::INFINITY),
            depth: Some(10.0),
        };
        let report = validator().validate(&shipment);

        let fields: Vec<Field> = report.violations().iter().map(|v| v.field()).collect();
        assert_eq!(fields, vec![Field::Weight, Field::Width]);
    }

    #[test]
    fn test_custom_limits_change_verdict() {
        let limits = RuleLimits {
            max_volume: 500.0,
            ..RuleLimits::default()
        };
        let report = ShipmentValidator::new(limits).validate(&Shipment::new(10.0, 10.0, 10.0, 10.0));
        assert_eq!(codes(&report), vec![RuleCode::ShipVolumeAboveMax]);
    }

    #[test]
    fn test_violation_order_is_rule_order() {
        // One shipment tripping presence, volume, and proportion at once.
        let shipment = Shipment {
            weight: None,
            height: Some(0.1),
            width: Some(100.0),
            depth: Some(0.1),
        };
        let report = validator().validate(&shipment);

        assert_eq!(
            codes(&report),
            vec![
                RuleCode::ShipFieldRequired,
                RuleCode::ShipVolumeBelowMin,
                RuleCode::ShipDimensionDisproportionate,
                RuleCode::ShipDimensionDisproportionate,
            ]
        );
        assert_eq!(report.violations()[2].field(), Field::Height);
        assert_eq!(report.violations()[3].field(), Field::Depth);
    }
}
