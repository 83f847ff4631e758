use crate::models::{FitResponse, PainGuidance};
use std::fmt;

/// A `[low, high]` pair in one unit system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormattedRange {
    pub low: f64,
    pub high: f64,
    pub unit: &'static str,
}

impl fmt::Display for FormattedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{} {}", self.low, self.high, self.unit)
    }
}

/// Display-ready view of a [`FitResponse`]
///
/// Always derived on demand from the response it borrows, so it cannot drift
/// from the value the controller currently holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultProjection<'a> {
    pub confidence_percent: u8,
    pub saddle_height_in: f64,
    pub saddle_height_cm: f64,
    pub range_in: FormattedRange,
    pub range_cm: FormattedRange,
    pub has_pain_guidance: bool,
    pub has_notes: bool,
    pub response: &'a FitResponse,
}

impl<'a> ResultProjection<'a> {
    pub fn new(response: &'a FitResponse) -> Self {
        let (low_in, high_in) = response.saddle_height_range_in;
        let (low_cm, high_cm) = response.saddle_height_range_cm;

        Self {
            confidence_percent: confidence_percent(response.confidence),
            saddle_height_in: response.saddle_height_in,
            saddle_height_cm: response.saddle_height_cm,
            range_in: FormattedRange { low: low_in, high: high_in, unit: "in" },
            range_cm: FormattedRange { low: low_cm, high: high_cm, unit: "cm" },
            has_pain_guidance: !response.pain_analysis.is_empty(),
            has_notes: !response.notes.is_empty(),
            response,
        }
    }

    /// Priority line, only meaningful alongside pain guidance
    pub fn priority_adjustment(&self) -> Option<&'a str> {
        if self.has_pain_guidance {
            self.response.priority_adjustment.as_deref()
        } else {
            None
        }
    }

    pub fn pain_guidance(&self) -> &'a [PainGuidance] {
        &self.response.pain_analysis
    }

    pub fn notes(&self) -> &'a [String] {
        &self.response.notes
    }
}

/// Confidence as a whole percentage in `[0, 100]`
///
/// Rounds half away from zero. Input outside `[0, 1]` is clamped; NaN maps to 0.
pub fn confidence_percent(confidence: f64) -> u8 {
    if confidence.is_nan() {
        return 0;
    }
    (confidence * 100.0).round().clamp(0.0, 100.0) as u8
}
