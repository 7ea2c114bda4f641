//! Application state management

use std::sync::Arc;

use domain_mailer::MailTransport;

use crate::config::Config;

/// Shared application state
///
/// Read-only after startup: configuration is loaded once and the transport
/// handle is internally thread-safe, so requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub transport: Arc<dyn MailTransport>,
}

impl AppState {
    pub fn new(config: Config, transport: Arc<dyn MailTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }
}
