use thiserror::Error;
use tracing::Instrument;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::core::projection::ResultProjection;
use crate::models::{FitRequest, FitResponse};
use crate::services::{AdvisorError, FitClient};

/// Lifecycle of the single outstanding fit request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success(FitResponse),
    Error(String),
}

impl SubmissionState {
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Success(_) => "success",
            SubmissionState::Error(_) => "error",
        }
    }
}

/// Reasons a submit is refused before any call is made
#[derive(Debug, Error)]
pub enum SubmitRejected {
    #[error("a fit request is already in flight")]
    AlreadySubmitting,

    #[error("invalid fit request: {0}")]
    InvalidRequest(#[from] ValidationErrors),
}

/// Permission to perform one outbound call
///
/// Issued by [`SubmissionController::begin`]. Its generation ties the eventual
/// [`Completion`] back to the submission that started it.
#[derive(Debug)]
pub struct SubmissionTicket {
    generation: u64,
    id: Uuid,
    request: FitRequest,
}

impl SubmissionTicket {
    /// Perform the call. This is the only suspension point of a submission.
    pub async fn send(self, client: &FitClient) -> Completion {
        let span = tracing::info_span!("fit_submission", id = %self.id);
        let result = client
            .request_fit(&self.request, self.id)
            .instrument(span)
            .await;

        Completion {
            generation: self.generation,
            id: self.id,
            result,
        }
    }

    /// Resolve the ticket with an outcome produced elsewhere
    pub fn resolve(self, result: Result<FitResponse, AdvisorError>) -> Completion {
        Completion {
            generation: self.generation,
            id: self.id,
            result,
        }
    }
}

/// Outcome of one outbound call, waiting to be applied to the controller
#[derive(Debug)]
pub struct Completion {
    generation: u64,
    id: Uuid,
    result: Result<FitResponse, AdvisorError>,
}

/// Owns the submission lifecycle for one form
///
/// `Idle -> Submitting -> Success | Error`, and back to `Submitting` on the
/// next submit. At most one request is in flight: `begin` flips the state to
/// `Submitting` before handing out the ticket that performs the call, and
/// refuses while a ticket is outstanding.
///
/// Every `begin` and `reset` advances a generation counter. A completion
/// from an older generation is dropped, so a response that arrives after the
/// rider reset the form never overwrites the current state.
#[derive(Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
    generation: u64,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    /// Label for the submit trigger; the trigger is disabled while submitting
    pub fn trigger_label(&self) -> &'static str {
        if self.is_submitting() {
            "Calculating..."
        } else {
            "Get Fit Estimate"
        }
    }

    pub fn response(&self) -> Option<&FitResponse> {
        match &self.state {
            SubmissionState::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Display values for the held response, derived fresh on every call
    pub fn projection(&self) -> Option<ResultProjection<'_>> {
        self.response().map(ResultProjection::new)
    }

    /// Enter `Submitting` and issue the ticket for the outbound call
    pub fn begin(&mut self, request: FitRequest) -> Result<SubmissionTicket, SubmitRejected> {
        if self.is_submitting() {
            tracing::warn!("Submit ignored: a fit request is already in flight");
            return Err(SubmitRejected::AlreadySubmitting);
        }

        request.validate()?;

        self.generation += 1;
        self.state = SubmissionState::Submitting;

        let ticket = SubmissionTicket {
            generation: self.generation,
            id: Uuid::new_v4(),
            request,
        };

        tracing::info!(
            "Submitting fit request {} (generation {}, {} pain points)",
            ticket.id,
            ticket.generation,
            ticket.request.pain_points.len()
        );

        Ok(ticket)
    }

    /// Apply a completion. Returns `false` when it was stale and dropped.
    pub fn complete(&mut self, completion: Completion) -> bool {
        if completion.generation != self.generation || !self.is_submitting() {
            tracing::warn!(
                "Discarding stale fit response {} (generation {}, current {})",
                completion.id,
                completion.generation,
                self.generation
            );
            return false;
        }

        self.state = match completion.result {
            Ok(response) => {
                tracing::info!(
                    "Fit request {} succeeded (confidence {:.2})",
                    completion.id,
                    response.confidence
                );
                SubmissionState::Success(response)
            }
            Err(e) => {
                tracing::error!("Fit request {} failed: {}", completion.id, e);
                SubmissionState::Error(e.to_string())
            }
        };
        true
    }

    /// Submit and wait for the outcome
    pub async fn submit(
        &mut self,
        client: &FitClient,
        request: FitRequest,
    ) -> Result<&SubmissionState, SubmitRejected> {
        let ticket = self.begin(request)?;
        let completion = ticket.send(client).await;
        self.complete(completion);
        Ok(&self.state)
    }

    /// Back to `Idle`, dropping any held response or error and orphaning an
    /// in-flight call.
    pub fn reset(&mut self) {
        if self.is_submitting() {
            tracing::info!("Reset while submitting; the in-flight response will be discarded");
        }
        self.generation += 1;
        self.state = SubmissionState::Idle;
    }
}
