//! MIME message construction on top of lettre.

use lettre::Message;
use lettre::address::Envelope;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, SinglePart};

use crate::error::MailerResult;
use crate::models::{BodyKind, OutboundEmail};

/// A constructed MIME message plus the envelope the transport needs.
#[derive(Debug, Clone)]
pub struct RawMessage {
    pub envelope: Envelope,
    pub bytes: Vec<u8>,
}

/// Build the raw MIME byte stream for a resolved email: one sender mailbox
/// (display name + address), one recipient, the subject, and a single body
/// part of the resolved content type.
///
/// Address syntax is checked here, not during payload validation, so a bad
/// address surfaces as a construction failure the same way the MIME layer
/// has always reported it.
pub fn build(email: &OutboundEmail) -> MailerResult<RawMessage> {
    let from = Mailbox::new(Some(email.sender_name.clone()), email.from.parse()?);
    let to = Mailbox::new(None, email.to.parse()?);

    let content_type = match email.body_kind {
        BodyKind::Plain => ContentType::TEXT_PLAIN,
        BodyKind::Html => ContentType::TEXT_HTML,
    };

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.clone())
        .singlepart(
            SinglePart::builder()
                .header(content_type)
                .body(email.body.clone()),
        )?;

    let envelope = message.envelope().clone();

    Ok(RawMessage {
        envelope,
        bytes: message.formatted(),
    })
}
