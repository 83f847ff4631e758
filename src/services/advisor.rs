use crate::config::AdvisorSettings;
use crate::models::{FitRequest, FitResponse, ServiceStatus};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

/// Shown when the service rejects a request with an empty body
pub const REQUEST_FAILED: &str = "Request failed";

/// Errors that can occur when calling the fit advisory service
///
/// The `Display` output of each variant is the message surfaced to the rider.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The service could not be reached (offline, DNS, timeout)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status. `body` is the raw response text, surfaced verbatim.
    #[error("{}", status_message(.body))]
    Status { status: u16, body: String },

    /// Success status but the body is not a valid fit response
    #[error("Invalid response from fit service: {0}")]
    Decode(String),
}

fn status_message(body: &str) -> &str {
    if body.is_empty() {
        REQUEST_FAILED
    } else {
        body
    }
}

/// HTTP client for the fit advisory service
///
/// Exposes the two endpoints the client relies on:
/// - `POST /fit` for a fit estimate
/// - `GET /` as a liveness probe
#[derive(Debug, Clone)]
pub struct FitClient {
    base_url: String,
    client: Client,
}

impl FitClient {
    /// Create a new client. Trailing slashes on `base_url` are dropped.
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, AdvisorError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: normalize_base_url(base_url.as_ref()),
            client,
        })
    }

    pub fn from_settings(settings: &AdvisorSettings) -> Result<Self, AdvisorError> {
        Self::new(&settings.base_url, Duration::from_secs(settings.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request a fit estimate
    ///
    /// Makes exactly one outbound call. No retries.
    pub async fn request_fit(
        &self,
        request: &FitRequest,
        request_id: Uuid,
    ) -> Result<FitResponse, AdvisorError> {
        let url = self.url("/fit");

        tracing::debug!("Posting fit request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("X-Request-Id", request_id.to_string())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Fit service returned {}: {}", status, body);
            return Err(AdvisorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;

        let fit: FitResponse = serde_json::from_str(&body)
            .map_err(|e| AdvisorError::Decode(format!("failed to parse fit response: {}", e)))?;

        fit.validate()
            .map_err(|e| AdvisorError::Decode(format!("fit response out of bounds: {}", e)))?;

        Ok(fit)
    }

    /// Check that the service is up
    pub async fn status(&self) -> Result<ServiceStatus, AdvisorError> {
        let url = self.url("/");

        tracing::debug!("Probing fit service at: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| AdvisorError::Decode(format!("failed to parse status: {}", e)))
    }
}

/// Strip surrounding whitespace and any trailing `/`
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}
