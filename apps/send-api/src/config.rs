use core_config::{app_info, env_required, server::ServerConfig, AppInfo, ConfigError, FromEnv};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Shared secret callers must present as a bearer token.
    pub auth_token: String,
    /// Default from-address when the payload omits `from`.
    pub sender_email: Option<String>,
    /// Default display name when the payload omits `senderName`.
    pub sender_name: Option<String>,
}

impl FromEnv for Config {
    /// Reads from environment variables:
    /// - `AUTH_TOKEN`: required; startup fails without it
    /// - `SENDER_EMAIL`, `SENDER_NAME`: optional defaults (empty = unset)
    /// - `HOST`, `PORT`, `APP_ENV`: standard server/environment settings
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            auth_token: env_required("AUTH_TOKEN")?,
            sender_email: optional_env("SENDER_EMAIL"),
            sender_name: optional_env("SENDER_NAME"),
        })
    }
}

/// Optional variable where an empty value counts as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_requires_auth_token() {
        temp_env::with_var_unset("AUTH_TOKEN", || {
            let result = Config::from_env();
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("AUTH_TOKEN"));
        });
    }

    #[test]
    fn test_config_with_defaults() {
        temp_env::with_vars(
            [
                ("AUTH_TOKEN", Some("secret")),
                ("SENDER_EMAIL", Some("noreply@x.com")),
                ("SENDER_NAME", None::<&str>),
                ("HOST", None),
                ("PORT", None),
                ("APP_ENV", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.auth_token, "secret");
                assert_eq!(config.sender_email.as_deref(), Some("noreply@x.com"));
                assert!(config.sender_name.is_none());
                assert_eq!(config.server.address(), "0.0.0.0:8080");
                assert_eq!(config.environment, Environment::Development);
            },
        );
    }

    #[test]
    fn test_empty_optional_counts_as_unset() {
        temp_env::with_vars(
            [("AUTH_TOKEN", Some("secret")), ("SENDER_EMAIL", Some(""))],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.sender_email.is_none());
            },
        );
    }
}
