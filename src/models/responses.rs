use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::PainGuidance;

/// Fit recommendation returned by `POST /fit`
///
/// Read-only on the client. A new successful submission replaces the whole
/// value; fields are never merged with a previous response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_ranges"))]
pub struct FitResponse {
    pub saddle_height_in: f64,
    pub saddle_height_cm: f64,
    pub saddle_height_range_in: (f64, f64),
    pub saddle_height_range_cm: (f64, f64),
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: f64,
    pub reach_guidance: String,
    pub bar_drop_guidance: String,
    pub geometry_guidance: String,
    #[serde(default)]
    pub pain_analysis: Vec<PainGuidance>,
    #[serde(default)]
    pub priority_adjustment: Option<String>,
    pub next_adjustment: String,
    pub disclaimer: String,
    #[serde(default)]
    pub notes: Vec<String>,
}

fn validate_ranges(response: &FitResponse) -> Result<(), ValidationError> {
    let (in_low, in_high) = response.saddle_height_range_in;
    let (cm_low, cm_high) = response.saddle_height_range_cm;
    let heights = [
        response.saddle_height_in,
        response.saddle_height_cm,
        in_low,
        in_high,
        cm_low,
        cm_high,
    ];
    if let Some(value) = heights.into_iter().find(|v| !v.is_finite()) {
        let mut err = ValidationError::new("non_finite_height");
        err.message = Some(format!("saddle height {} is not finite", value).into());
        return Err(err);
    }

    for (low, high) in [response.saddle_height_range_in, response.saddle_height_range_cm] {
        if low > high {
            let mut err = ValidationError::new("inverted_range");
            err.message = Some(format!("range low {} exceeds high {}", low, high).into());
            return Err(err);
        }
    }
    Ok(())
}

/// Body of `GET /` on the advisory service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
}
