//! Outbound email transport parameters.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::env::EnvSource;

/// Default SMTP port when `EMAIL_PORT` is unset or malformed.
pub const DEFAULT_EMAIL_PORT: u16 = 587;

/// Resolved email section of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Transport backend identifier.
    pub backend: String,

    /// SMTP server hostname.
    pub host: String,

    /// Whether to negotiate TLS.
    pub use_tls: bool,

    /// SMTP server port.
    pub port: u16,

    /// Account username; empty when unset.
    pub user: String,

    /// Account password; empty when unset, never defaulted to a literal.
    pub password: String,
}

impl EmailConfig {
    /// Resolve the email section from the environment.
    ///
    /// A malformed `EMAIL_PORT` falls back to the default with a warning;
    /// assembly never fails on bad input.
    pub fn resolve(env: &impl EnvSource) -> Self {
        let port = env.get("EMAIL_PORT").map_or(DEFAULT_EMAIL_PORT, |raw| {
            raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "EMAIL_PORT is not a valid port; using {DEFAULT_EMAIL_PORT}");
                DEFAULT_EMAIL_PORT
            })
        });

        Self {
            backend: "django.core.mail.backends.smtp.EmailBackend".to_string(),
            host: env.get_or("EMAIL_HOST", "smtp.gmail.com"),
            use_tls: env.get_or("EMAIL_USE_TLS", "True") == "True",
            port,
            user: env.get("EMAIL_HOST_USER").unwrap_or_default(),
            password: env.get("EMAIL_HOST_PASSWORD").unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn test_defaults() {
        let config = EmailConfig::resolve(&MapEnv::new());
        assert_eq!(config.host, "smtp.gmail.com");
        assert_eq!(config.port, 587);
        assert!(config.use_tls);
        assert!(config.user.is_empty());
        assert!(config.password.is_empty());
    }

    #[test]
    fn test_environment_overrides() {
        let env = MapEnv::new()
            .with("EMAIL_HOST", "mail.curelink.example")
            .with("EMAIL_PORT", "2525")
            .with("EMAIL_USE_TLS", "False")
            .with("EMAIL_HOST_USER", "noreply")
            .with("EMAIL_HOST_PASSWORD", "hunter2");
        let config = EmailConfig::resolve(&env);
        assert_eq!(config.host, "mail.curelink.example");
        assert_eq!(config.port, 2525);
        assert!(!config.use_tls);
        assert_eq!(config.user, "noreply");
        assert_eq!(config.password, "hunter2");
    }

    #[test]
    fn test_malformed_port_falls_back() {
        let env = MapEnv::new().with("EMAIL_PORT", "abc");
        assert_eq!(EmailConfig::resolve(&env).port, DEFAULT_EMAIL_PORT);
    }

    #[test]
    fn test_tls_requires_exact_true() {
        let env = MapEnv::new().with("EMAIL_USE_TLS", "true");
        assert!(!EmailConfig::resolve(&env).use_tls);
    }
}
