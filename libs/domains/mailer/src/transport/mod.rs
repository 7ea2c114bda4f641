//! Delivery transports.
//!
//! The gateway hands a fully-formed raw message plus its envelope to a
//! transport. Actual delivery, retries, and bounce handling are the
//! transport's responsibility and entirely opaque to this crate.

mod smtp;

pub use smtp::{SmtpConfig, SmtpTransport};

use async_trait::async_trait;

use crate::error::MailerResult;

// Re-exported so callers can speak the transport's envelope type without
// depending on lettre directly.
pub use lettre::address::Envelope;

/// Outcome of a send accepted by the transport.
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    /// Transport-specific message ID, when one is reported.
    pub message_id: Option<String>,
}

/// Trait for raw-message delivery transports.
///
/// Implementations are substitutable: production uses SMTP, tests use an
/// in-memory fake.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Submit a raw MIME message for delivery to the envelope recipients.
    async fn send_raw(&self, envelope: &Envelope, raw: &[u8]) -> MailerResult<DeliveryReceipt>;

    /// Transport name for logging.
    fn name(&self) -> &'static str;
}
