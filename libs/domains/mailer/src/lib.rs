//! Outbound email domain: payload validation, MIME construction, and the
//! delivery transport boundary.
//!
//! The flow is a straight line, executed once per request:
//!
//! ```text
//! SendEmailRequest (JSON payload)
//!   ↓ resolve()           validation + default fallbacks
//! OutboundEmail
//!   ↓ message::build()    MIME encoding (lettre)
//! RawMessage (envelope + raw bytes)
//!   ↓ MailTransport::send_raw()
//! Delivery
//! ```

pub mod content_type;
pub mod error;
pub mod message;
pub mod models;
pub mod transport;

pub use error::{MailerError, MailerResult};
pub use message::RawMessage;
pub use models::{BodyKind, OutboundEmail, SendEmailRequest};
pub use transport::{DeliveryReceipt, Envelope, MailTransport, SmtpConfig, SmtpTransport};
