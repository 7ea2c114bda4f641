//! Error types for the mailer domain.

use thiserror::Error;

/// Result type for mailer operations.
pub type MailerResult<T> = Result<T, MailerError>;

/// Errors that can occur while validating, building, or delivering a message.
#[derive(Debug, Error)]
pub enum MailerError {
    /// One of `to`, `subject`, `content` is absent or empty.
    #[error("Missing required fields")]
    MissingFields,

    /// No sender address in the request and no configured default.
    #[error("Missing \"from\" parameter")]
    MissingFrom,

    /// The supplied contentType failed the syntax or allow-list check.
    #[error("Invalid contentType. Must be \"text/plain\" or \"text/html\"")]
    InvalidContentType,

    /// MIME message construction failed.
    #[error("{0}")]
    Message(String),

    /// The delivery transport rejected or failed the send.
    #[error("{0}")]
    Transport(String),
}

impl MailerError {
    /// Whether this error is a payload-validation failure (as opposed to a
    /// construction or delivery failure).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MailerError::MissingFields | MailerError::MissingFrom | MailerError::InvalidContentType
        )
    }
}

impl From<lettre::error::Error> for MailerError {
    fn from(err: lettre::error::Error) -> Self {
        MailerError::Message(err.to_string())
    }
}

impl From<lettre::address::AddressError> for MailerError {
    fn from(err: lettre::address::AddressError) -> Self {
        MailerError::Message(format!("Invalid address: {}", err))
    }
}
