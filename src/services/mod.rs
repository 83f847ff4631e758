// Service exports
pub mod advisor;

pub use advisor::{normalize_base_url, AdvisorError, FitClient, REQUEST_FAILED};
