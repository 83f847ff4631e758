// Core component exports
pub mod form;
pub mod pain_points;
pub mod projection;
pub mod submission;

pub use form::{FitField, FitRequestModel, InputError};
pub use pain_points::PainPointSet;
pub use projection::{confidence_percent, FormattedRange, ResultProjection};
pub use submission::{Completion, SubmissionController, SubmissionState, SubmissionTicket, SubmitRejected};
