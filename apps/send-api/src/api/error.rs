//! HTTP error mapping for the send endpoint.
//!
//! Every failure is terminal for the request and surfaces synchronously as a
//! status code plus a short plain-text body. Nothing is retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain_mailer::MailerError;
use thiserror::Error;

/// Request-level errors, one per HTTP outcome.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing `Authorization` header or a non-Bearer scheme.
    #[error("Unauthorized")]
    Unauthorized,

    /// Bearer token present but not matching the configured secret.
    #[error("Forbidden")]
    Forbidden,

    /// Request body is not valid JSON.
    #[error("Bad Request: Invalid JSON")]
    InvalidJson,

    /// Payload validation failed; the message names the failed check.
    #[error("Bad Request: {0}")]
    Validation(MailerError),

    /// Message construction or delivery failed. The underlying message is
    /// echoed in the response body — accepted information disclosure for an
    /// internal tool.
    #[error("Internal Server Error: {0}")]
    Delivery(MailerError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::InvalidJson | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            ApiError::Delivery(err) => tracing::error!("Send failed: {}", err),
            ApiError::Validation(err) => tracing::info!("Rejected payload: {}", err),
            _ => {}
        }

        (status, self.to_string()).into_response()
    }
}
