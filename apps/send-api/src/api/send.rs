//! The send endpoint: authenticate, parse, validate, construct, deliver.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use tracing::{info, warn};

use domain_mailer::{message, SendEmailRequest};

use super::error::ApiError;
use crate::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The scheme check is case-sensitive; anything else is treated as no
/// credentials at all.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(str::trim)
}

/// `POST /send`
///
/// Authenticates the caller, validates and resolves the payload, builds the
/// MIME message, and hands it to the delivery transport. The bearer token is
/// compared by exact, case-sensitive string equality against the configured
/// secret: a missing header or wrong scheme is 401, a present-but-wrong
/// token is 403. Neither reaches the transport.
pub async fn send_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let token = extract_bearer_token(&headers).ok_or(ApiError::Unauthorized)?;
    if token != state.config.auth_token {
        warn!("Rejected send request: bearer token does not match");
        return Err(ApiError::Forbidden);
    }

    let request: SendEmailRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidJson)?;

    let email = request
        .resolve(
            state.config.sender_email.as_deref(),
            state.config.sender_name.as_deref(),
        )
        .map_err(ApiError::Validation)?;

    let raw = message::build(&email).map_err(ApiError::Delivery)?;

    let receipt = state
        .transport
        .send_raw(&raw.envelope, &raw.bytes)
        .await
        .map_err(ApiError::Delivery)?;

    info!(
        to = %email.to,
        subject = %email.subject,
        content_type = email.body_kind.as_mime(),
        transport = state.transport.name(),
        message_id = ?receipt.message_id,
        "Email sent"
    );

    Ok("Email sent successfully")
}
