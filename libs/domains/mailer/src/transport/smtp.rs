//! SMTP delivery using lettre.
//!
//! The default configuration targets a local Mailpit/MailHog instance, which
//! is the expected setup for development.

use super::{DeliveryReceipt, MailTransport};
use crate::error::{MailerError, MailerResult};
use async_trait::async_trait;
use lettre::address::Envelope;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::sync::Arc;
use tracing::{debug, error, info};

/// SMTP transport configuration.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server host.
    pub host: String,
    /// SMTP server port.
    pub port: u16,
    /// SMTP username (optional for dev servers like Mailpit).
    pub username: Option<String>,
    /// SMTP password (optional for dev servers like Mailpit).
    pub password: Option<String>,
    /// Whether to use TLS (false for local dev servers).
    pub use_tls: bool,
}

impl SmtpConfig {
    /// Create a new SMTP configuration.
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            username: None,
            password: None,
            use_tls: false,
        }
    }

    /// Read the transport settings from the environment. Defaults target a
    /// local Mailpit/MailHog instance on localhost:1025 without TLS.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("SMTP_PORT")
                .unwrap_or_else(|_| "1025".to_string())
                .parse()
                .unwrap_or(1025),
            username: std::env::var("SMTP_USERNAME").ok(),
            password: std::env::var("SMTP_PASSWORD").ok(),
            use_tls: std::env::var("SMTP_USE_TLS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Builder method to set TLS.
    pub fn with_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }

    /// Builder method to set credentials.
    pub fn with_credentials(mut self, username: String, password: String) -> Self {
        self.username = Some(username);
        self.password = Some(password);
        self
    }
}

/// SMTP delivery transport.
pub struct SmtpTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: Arc<SmtpConfig>,
}

impl SmtpTransport {
    /// Create a new SMTP transport.
    pub fn new(config: SmtpConfig) -> MailerResult<Self> {
        let transport = Self::build_transport(&config)?;
        Ok(Self {
            transport,
            config: Arc::new(config),
        })
    }

    /// Create a transport configured from the environment.
    pub fn from_env() -> MailerResult<Self> {
        Self::new(SmtpConfig::from_env())
    }

    /// Build the lettre transport based on configuration.
    fn build_transport(
        config: &SmtpConfig,
    ) -> MailerResult<AsyncSmtpTransport<Tokio1Executor>> {
        let transport = if config.use_tls {
            // TLS-enabled transport (for production SMTP servers)
            let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| {
                    MailerError::Transport(format!("Failed to create SMTP relay: {}", e))
                })?
                .port(config.port);

            if let (Some(username), Some(password)) = (&config.username, &config.password) {
                builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
            }

            builder.build()
        } else {
            // Non-TLS transport (for local dev servers like Mailpit)
            let mut builder =
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                    .port(config.port);

            if let (Some(username), Some(password)) = (&config.username, &config.password) {
                builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
            }

            builder.build()
        };

        Ok(transport)
    }
}

#[async_trait]
impl MailTransport for SmtpTransport {
    async fn send_raw(&self, envelope: &Envelope, raw: &[u8]) -> MailerResult<DeliveryReceipt> {
        debug!(
            host = %self.config.host,
            port = %self.config.port,
            "Submitting raw message via SMTP"
        );

        let response = self
            .transport
            .send_raw(envelope, raw)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send email via SMTP");
                MailerError::Transport(format!("SMTP send failed: {}", e))
            })?;

        let message_id = response.message().next().map(|s| s.to_string());

        info!(message_id = ?message_id, "Raw message accepted by SMTP server");

        Ok(DeliveryReceipt { message_id })
    }

    fn name(&self) -> &'static str {
        "SMTP"
    }
}

// AsyncSmtpTransport does not implement Clone; rebuild it from the config.
impl Clone for SmtpTransport {
    fn clone(&self) -> Self {
        let transport =
            Self::build_transport(&self.config).expect("Failed to rebuild SMTP transport for clone");
        Self {
            transport,
            config: Arc::clone(&self.config),
        }
    }
}
