//! Plain-text rendering of the submission state for the terminal.

use std::fmt;

use crate::core::{FitRequestModel, ResultProjection, SubmissionController, SubmissionState};
use crate::models::{Flexibility, PainPointKey, RidingStyle};

/// Summary of the inputs about to be submitted
pub struct InputsCard<'a>(pub &'a FitRequestModel);

impl fmt::Display for InputsCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.0;

        writeln!(f, "Height:       {} in", model.height_in())?;
        writeln!(f, "Inseam:       {} in", model.inseam_in())?;
        writeln!(f, "Riding style: {}", model.riding_style())?;
        writeln!(f, "Flexibility:  {}", model.flexibility())?;
        writeln!(f, "Pain points:")?;
        for key in PainPointKey::ALL {
            let marker = if model.pain_points().contains(key) { "ON " } else { "OFF" };
            writeln!(f, "  [{}] {}", marker, key.label())?;
        }
        Ok(())
    }
}

/// Full result card
pub struct ResultCard<'a, 'r>(pub &'a ResultProjection<'r>);

impl fmt::Display for ResultCard<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let projection = self.0;
        let response = projection.response;

        writeln!(
            f,
            "Saddle height: {} in ({} cm)",
            projection.saddle_height_in, projection.saddle_height_cm
        )?;
        writeln!(f, "Recommended range: {} ({})", projection.range_in, projection.range_cm)?;
        writeln!(f, "Confidence: {}%", projection.confidence_percent)?;
        writeln!(f)?;
        writeln!(f, "Reach: {}", response.reach_guidance)?;
        writeln!(f, "Bar drop: {}", response.bar_drop_guidance)?;
        writeln!(f, "Geometry: {}", response.geometry_guidance)?;

        if projection.has_pain_guidance {
            writeln!(f)?;
            writeln!(f, "Pain guidance")?;
            if let Some(priority) = projection.priority_adjustment() {
                writeln!(f, "Priority: {}", priority)?;
            }
            for guidance in projection.pain_guidance() {
                writeln!(f, "  {}", guidance.label)?;
                for cause in &guidance.likely_causes {
                    writeln!(f, "    - {}", cause)?;
                }
                writeln!(f, "    First adjustment: {}", guidance.first_adjustment)?;
                writeln!(f, "    Caution: {}", guidance.caution)?;
            }
        }

        if projection.has_notes {
            writeln!(f)?;
            writeln!(f, "Notes")?;
            for note in projection.notes() {
                writeln!(f, "  - {}", note)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Next adjustment: {}", response.next_adjustment)?;
        writeln!(f, "{}", response.disclaimer)
    }
}

/// Accepted values for every closed-vocabulary input
pub struct OptionsCard;

impl fmt::Display for OptionsCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Riding styles:")?;
        for style in RidingStyle::ALL {
            writeln!(f, "  {}", style)?;
        }
        writeln!(f, "Flexibility:")?;
        for level in Flexibility::ALL {
            writeln!(f, "  {}", level)?;
        }
        writeln!(f, "Pain points:")?;
        for key in PainPointKey::ALL {
            writeln!(f, "  {:<16} {}", key.as_str(), key.label())?;
        }
        Ok(())
    }
}

pub fn render_inputs(model: &FitRequestModel) -> String {
    InputsCard(model).to_string()
}

pub fn render_result(projection: &ResultProjection<'_>) -> String {
    ResultCard(projection).to_string()
}

pub fn render_options() -> String {
    OptionsCard.to_string()
}

/// Render whatever the controller currently holds
pub fn render_state(controller: &SubmissionController) -> String {
    match controller.state() {
        SubmissionState::Idle => "Run an estimate to see your fit guidance here.\n".to_string(),
        SubmissionState::Submitting => format!("{}\n", controller.trigger_label()),
        SubmissionState::Error(message) => format!("Error: {}\n", message),
        SubmissionState::Success(response) => render_result(&ResultProjection::new(response)),
    }
}
