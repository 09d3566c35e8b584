//! HTTP API handlers

use crate::app::api::{validate_contact, ContactRequest, ContactResponse};
use crate::config::ContactConfig;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;
use std::time::Instant;

/// EmailJS REST endpoint the contact form is relayed through
const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub contact: Option<ContactConfig>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(contact: Option<ContactConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            contact,
            started_at: Instant::now(),
        }
    }
}

/// Contact relay failure taxonomy
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("contact relay is not configured")]
    NotConfigured,

    #[error("invalid submission: {0}")]
    Invalid(String),

    #[error("relay request failed: {0}")]
    Relay(#[from] reqwest::Error),

    #[error("relay rejected the message (status {0})")]
    Rejected(u16),
}

impl ContactError {
    fn status(&self) -> StatusCode {
        match self {
            ContactError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ContactError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ContactError::Relay(_) | ContactError::Rejected(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ContactError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
    pub contact_enabled: bool,
}

/// GET /api/status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "starlit-portfolio",
        version: env!("PORTFOLIO_VERSION"),
        git_sha: env!("PORTFOLIO_GIT_SHA"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        contact_enabled: state.contact.is_some(),
    })
}

/// POST /api/contact - Relay a contact form submission to the email service.
///
/// The payload is validated again server-side; the client-side checks are
/// advisory only. The send is single-shot - a failed relay is reported, not
/// retried.
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ContactError> {
    let errors = validate_contact(&req);
    if !errors.is_empty() {
        return Err(ContactError::Invalid(errors.join("; ")));
    }

    let contact = state.contact.as_ref().ok_or(ContactError::NotConfigured)?;

    let payload = json!({
        "service_id": contact.service_id,
        "template_id": contact.template_id,
        "user_id": contact.public_key,
        "template_params": {
            "from_name": req.name,
            "from_email": req.email,
            "message": req.message,
        },
    });

    let resp = state
        .http
        .post(EMAILJS_SEND_URL)
        .json(&payload)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        tracing::warn!("Contact relay rejected submission: {}", status);
        return Err(ContactError::Rejected(status.as_u16()));
    }

    tracing::info!("Contact submission relayed for {}", req.email);
    Ok(Json(ContactResponse { sent: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_error_maps_to_http_status() {
        assert_eq!(
            ContactError::NotConfigured.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ContactError::Invalid("bad email".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ContactError::Rejected(400).status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn unconfigured_relay_is_not_a_panic() {
        let state = AppState::new(None);
        assert!(state.contact.is_none());
    }
}
