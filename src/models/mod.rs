// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Flexibility, PainGuidance, PainPointKey, RidingStyle, UnknownVariant};
pub use requests::FitRequest;
pub use responses::{FitResponse, ServiceStatus};
