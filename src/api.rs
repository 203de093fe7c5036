/// Client side of the review-storage service: the submission workflow plus
/// the gloo-net transport it runs over.
use gloo_net::http::Request;
use leptos::logging::{error, log};
use serde::{Deserialize, Serialize};

use crate::auth::TokenSource;
use crate::error::ReviewError;
use crate::models::review::{ReviewDraft, ReviewTarget};

/// Origin of the review-storage service.
pub const API_BASE: &str = "http://localhost:5000";

const DEFAULT_CONFIRMATION: &str = "Review submitted successfully!";

/// Wire body for POST /api/reviews. `booking_id` is omitted entirely when no
/// booking reference was supplied.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<i64>,
    pub service_id: i64,
    pub provider_id: i64,
    pub rating: u8,
    pub comment: String,
}

#[derive(Deserialize, Debug, Default)]
struct SubmitResponse {
    message: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct ErrorBody {
    message: Option<String>,
}

/// One POST to the review-storage service. The workflow is generic over this
/// so tests can substitute a recording transport.
pub trait ReviewTransport {
    async fn post_review(
        &self,
        payload: &ReviewPayload,
        token: &str,
    ) -> Result<Option<String>, ReviewError>;
}

/// gloo-net transport against the review API.
#[derive(Clone, Debug)]
pub struct ReviewApi {
    base: String,
}

impl ReviewApi {
    pub fn new() -> Self {
        Self {
            base: API_BASE.to_string(),
        }
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for ReviewApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewTransport for ReviewApi {
    async fn post_review(
        &self,
        payload: &ReviewPayload,
        token: &str,
    ) -> Result<Option<String>, ReviewError> {
        let url = format!("{}/api/reviews", self.base);
        let response = Request::post(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .json(payload)
            .map_err(|e| ReviewError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ReviewError::Transport(e.to_string()))?;

        if response.ok() {
            // A missing or malformed body still counts as success; the
            // caller falls back to the default confirmation.
            let body: SubmitResponse = response.json().await.unwrap_or_default();
            Ok(body.message)
        } else {
            let status = response.status();
            let status_text = response.status_text();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or(status_text);
            Err(ReviewError::Server { status, message })
        }
    }
}

/// Checks a draft is submittable. Runs before any network access.
pub fn validate_draft(draft: &ReviewDraft) -> Result<(), ReviewError> {
    if draft.rating == 0 || draft.rating > 5 {
        return Err(ReviewError::Validation);
    }
    if draft.comment.trim().is_empty() {
        return Err(ReviewError::Validation);
    }
    Ok(())
}

/// The review submission workflow: validate the draft, resolve the bearer
/// token, send exactly one POST. Returns the user-facing confirmation
/// message. No retry is attempted; the user re-triggers submission manually.
pub async fn submit_review<T, A>(
    transport: &T,
    tokens: &A,
    draft: &ReviewDraft,
    target: &ReviewTarget,
) -> Result<String, ReviewError>
where
    T: ReviewTransport,
    A: TokenSource,
{
    validate_draft(draft)?;

    let token = tokens.token().ok_or(ReviewError::AuthRequired)?;

    let payload = ReviewPayload {
        booking_id: target.booking_id,
        service_id: target.service_id,
        provider_id: target.provider_id,
        rating: draft.rating,
        comment: draft.comment.clone(),
    };
    log!(
        "[API] Submitting review - service {}, booking {:?}",
        payload.service_id,
        payload.booking_id
    );

    match transport.post_review(&payload, &token).await {
        Ok(message) => {
            log!("[API] Review accepted for service {}", payload.service_id);
            Ok(message.unwrap_or_else(|| DEFAULT_CONFIRMATION.to_string()))
        }
        Err(err) => {
            error!("[API] Review submission failed: {}", err);
            Err(err)
        }
    }
}
