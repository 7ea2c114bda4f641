//! Data models for the mailer domain.

use serde::Deserialize;

use crate::content_type::{is_valid_content_type, looks_like_html};
use crate::error::{MailerError, MailerResult};

/// Inbound send payload, exactly as posted by the caller.
///
/// Every field is optional at the deserialization layer; `resolve` decides
/// what is actually required so that a missing field produces the endpoint's
/// own validation error rather than a serde message. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendEmailRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub subject: Option<String>,
    pub content: Option<String>,
    pub content_type: Option<String>,
    pub sender_name: Option<String>,
}

/// Resolved body content type. The allow-list admits exactly these two, so
/// nothing else can reach message construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Plain,
    Html,
}

impl BodyKind {
    pub fn as_mime(&self) -> &'static str {
        match self {
            BodyKind::Plain => "text/plain",
            BodyKind::Html => "text/html",
        }
    }
}

/// A validated, fully-resolved message ready for MIME construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub sender_name: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub body_kind: BodyKind,
}

/// Treat empty strings as absent. The endpoint has always used truthiness
/// semantics for both required fields and fallback tiers.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl SendEmailRequest {
    /// Validate the payload and resolve every optional field against the
    /// configured defaults.
    ///
    /// Resolution order:
    /// 1. `to`, `subject`, `content` must be present.
    /// 2. `from`: request value, else `default_sender`.
    /// 3. `contentType`: if supplied, must pass syntax + allow-list; if
    ///    absent, autodetected from the body.
    /// 4. `senderName`: request value, else `default_sender_name`, else the
    ///    resolved from address.
    ///
    /// Address syntax is deliberately not checked here; that is the MIME
    /// layer's concern.
    pub fn resolve(
        &self,
        default_sender: Option<&str>,
        default_sender_name: Option<&str>,
    ) -> MailerResult<OutboundEmail> {
        let (Some(to), Some(subject), Some(content)) = (
            non_empty(self.to.as_ref()),
            non_empty(self.subject.as_ref()),
            non_empty(self.content.as_ref()),
        ) else {
            return Err(MailerError::MissingFields);
        };

        let from = non_empty(self.from.as_ref())
            .or(default_sender.filter(|v| !v.is_empty()))
            .ok_or(MailerError::MissingFrom)?;

        let body_kind = match non_empty(self.content_type.as_ref()) {
            Some(value) if !is_valid_content_type(value) => {
                return Err(MailerError::InvalidContentType);
            }
            Some(value) => {
                if value.eq_ignore_ascii_case("text/html") {
                    BodyKind::Html
                } else {
                    BodyKind::Plain
                }
            }
            None => {
                if looks_like_html(content) {
                    BodyKind::Html
                } else {
                    BodyKind::Plain
                }
            }
        };

        let sender_name = non_empty(self.sender_name.as_ref())
            .or(default_sender_name.filter(|v| !v.is_empty()))
            .unwrap_or(from);

        Ok(OutboundEmail {
            from: from.to_string(),
            sender_name: sender_name.to_string(),
            to: to.to_string(),
            subject: subject.to_string(),
            body: content.to_string(),
            body_kind,
        })
    }
}
