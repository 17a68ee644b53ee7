// src/survey/submit.rs

//! Finish sequence: stamp, serialize, post once, record the outcome.
//!
//! Split in three steps so the UI thread never blocks on the network:
//! `begin_submission` (UI thread) -> `SubmissionClient::send` (worker) ->
//! `complete_submission` (UI thread). `submit` runs all three inline.

use crate::context::AppCtx;
use crate::error::{AppError, AppResult};
use std::sync::Arc;

use super::ops::now_timestamp;
use super::types::{SurveyState, FINAL_STAGE};

pub const PAYLOAD_FIELD: &str = "payload";

/// Serialized answers for one attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    pub session_id: String,
    pub completed_at: String,
    /// JSON-encoded response document.
    pub payload: String,
}

pub fn begin_submission(state: &mut SurveyState) -> AppResult<SubmissionTicket> {
    if state.has_submitted {
        return Err(AppError::AlreadySubmitted);
    }
    if state.is_submitting {
        return Err(AppError::SubmissionInFlight);
    }
    if state.stage_index != FINAL_STAGE {
        return Err(AppError::InvalidState(format!(
            "submission requested from stage {}",
            state.stage_index
        )));
    }

    let completed_at = now_timestamp();
    state.document.completed_at = Some(completed_at.clone());

    let payload = serde_json::to_string(&state.document)
        .map_err(|e| AppError::PayloadSerialize(e.to_string()))?;

    state.is_submitting = true;

    tracing::info!(
        session_id = %state.document.meta.session_id,
        completed_at = %completed_at,
        bytes = payload.len(),
        "submission started"
    );

    Ok(SubmissionTicket {
        session_id: state.document.meta.session_id.clone(),
        completed_at,
        payload,
    })
}

/// Applies the outcome of a `send`. Failure leaves the document intact and
/// allows another attempt.
pub fn complete_submission(state: &mut SurveyState, outcome: &AppResult<()>) {
    state.is_submitting = false;

    match outcome {
        Ok(()) => {
            state.has_submitted = true;
            tracing::info!(session_id = %state.document.meta.session_id, "responses submitted");
        }
        Err(e) => {
            tracing::warn!(
                session_id = %state.document.meta.session_id,
                error = %e,
                "submission failed; retry allowed"
            );
        }
    }
}

/// Outbound form post. Returns the HTTP status; transport problems are errors.
pub trait FormPoster: Send + Sync {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> AppResult<u16>;
}

/// Blocking `ureq` agent. No request timeout: resolves on completion or error.
pub struct UreqPoster {
    agent: ureq::Agent,
}

impl UreqPoster {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for UreqPoster {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPoster for UreqPoster {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> AppResult<u16> {
        match self.agent.post(url).send_form(fields) {
            Ok(resp) => Ok(resp.status()),
            Err(ureq::Error::Status(code, _resp)) => Ok(code),
            Err(ureq::Error::Transport(err)) => Err(AppError::SubmitTransport(err.to_string())),
        }
    }
}

#[derive(Clone)]
pub struct SubmissionClient {
    endpoint: Option<String>,
    poster: Arc<dyn FormPoster>,
}

impl SubmissionClient {
    pub fn new(endpoint: Option<String>, poster: Arc<dyn FormPoster>) -> Self {
        Self { endpoint, poster }
    }

    pub fn from_ctx(ctx: &AppCtx) -> Self {
        Self::new(ctx.submit_url.clone(), Arc::new(UreqPoster::new()))
    }

    /// One POST with a single `payload` field. 2xx is success.
    pub fn send(&self, ticket: &SubmissionTicket) -> AppResult<()> {
        let Some(url) = self.endpoint.as_deref() else {
            tracing::warn!("no submit endpoint configured; nothing sent");
            return Err(AppError::NoSubmitEndpoint);
        };

        let status = self
            .poster
            .post_form(url, &[(PAYLOAD_FIELD, ticket.payload.as_str())])?;

        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(AppError::SubmitStatus(status))
        }
    }
}

/// Blocking finish sequence. True once the endpoint accepted the answers.
pub fn submit(state: &mut SurveyState, client: &SubmissionClient) -> bool {
    let ticket = match begin_submission(state) {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!(error = %e, "submission not started");
            return false;
        }
    };

    let outcome = client.send(&ticket);
    complete_submission(state, &outcome);
    outcome.is_ok()
}

// ======================================================
// Unit Tests
// ======================================================
