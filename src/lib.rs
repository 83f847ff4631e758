//! Ride Fit Advisor - client for the bike fit advisory service
//!
//! Collects rider measurements and pain points, submits them to the remote
//! advisory service and turns the recommendation into display-ready values.

pub mod config;
pub mod core;
pub mod models;
pub mod render;
pub mod services;

// Re-export commonly used types
pub use crate::core::{FitRequestModel, PainPointSet, ResultProjection, SubmissionController, SubmissionState};
pub use models::{FitRequest, FitResponse, Flexibility, PainGuidance, PainPointKey, RidingStyle};
pub use services::{AdvisorError, FitClient};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let model = FitRequestModel::new();
        let request: FitRequest = model.snapshot();
        assert_eq!(request.riding_style, RidingStyle::Endurance);
    }
}
