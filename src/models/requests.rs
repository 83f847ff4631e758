use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::core::PainPointSet;
use crate::models::domain::{Flexibility, RidingStyle};

/// Body of `POST /fit`
///
/// Built from the form at submit time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_measurements"))]
pub struct FitRequest {
    #[validate(range(exclusive_min = 0.0))]
    pub height_in: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub inseam_in: f64,
    pub riding_style: RidingStyle,
    pub flexibility: Flexibility,
    #[serde(default)]
    pub pain_points: PainPointSet,
}

impl FitRequest {
    /// Serialized request body
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// `range` lets NaN through, so finiteness is checked separately.
fn validate_measurements(request: &FitRequest) -> Result<(), ValidationError> {
    if !request.height_in.is_finite() || !request.inseam_in.is_finite() {
        let mut err = ValidationError::new("not_finite");
        err.message = Some("measurements must be finite numbers".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PainPointKey;

    fn request() -> FitRequest {
        FitRequest {
            height_in: 74.0,
            inseam_in: 35.0,
            riding_style: RidingStyle::Endurance,
            flexibility: Flexibility::Medium,
            pain_points: PainPointSet::new(),
        }
    }

    #[test]
    fn test_wire_keys() {
        let mut req = request();
        req.pain_points.toggle(PainPointKey::KneeFront);

        let json = req.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"height_in":74.0,"inseam_in":35.0,"riding_style":"endurance","flexibility":"medium","pain_points":["knee_front"]}"#
        );
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_non_positive_measurements_rejected() {
        let mut req = request();
        req.height_in = 0.0;
        assert!(req.validate().is_err());

        let mut req = request();
        req.inseam_in = -3.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_nan_rejected() {
        let mut req = request();
        req.inseam_in = f64::NAN;
        assert!(req.validate().is_err());
    }
}
