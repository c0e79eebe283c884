//! The settings snapshot.
//!
//! [`Settings::resolve`] performs one linear pass over an environment
//! source and produces the immutable configuration the rest of the
//! platform runs against. Each section resolves independently; no step
//! inspects another's outcome. Missing optional variables never fail —
//! every setting has a deterministic default.

mod channels;
mod database;
mod email;
mod framework;
mod scheduler;
mod security;
mod staticfiles;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use channels::ChannelLayer;
pub use database::{DatabaseConfig, DatabaseUrl, ServerParams, CONN_MAX_AGE, DEFAULT_SQLITE_FILE};
pub use email::{EmailConfig, DEFAULT_EMAIL_PORT};
pub use framework::{FrameworkConfig, I18nConfig, TemplatesConfig};
pub use scheduler::{ScheduleEntry, SchedulerConfig};
pub use security::{
    ProxySslHeader, SecurityConfig, DEFAULT_ALLOWED_HOSTS, INSECURE_SECRET_KEY,
    LEGACY_TRUSTED_ORIGIN,
};
pub use staticfiles::StaticFilesConfig;

use crate::env::{EnvSource, ProcessEnv};
use crate::error::Result;

/// Immutable configuration snapshot for one process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Application base directory; filesystem defaults hang off it.
    pub base_dir: PathBuf,

    /// Signing key, debug flag, allowlist, trusted origins.
    pub security: SecurityConfig,

    /// Installed apps, middleware, routing, templates, password policy.
    pub framework: FrameworkConfig,

    /// Real-time message layer backend.
    pub channel_layer: ChannelLayer,

    /// Default database descriptor.
    pub database: DatabaseConfig,

    /// Static and media serving locations.
    pub staticfiles: StaticFilesConfig,

    /// Outbound mail transport.
    pub email: EmailConfig,

    /// Task queue and beat schedule.
    pub scheduler: SchedulerConfig,
}

impl Settings {
    /// Resolve the full snapshot from an environment source.
    ///
    /// The only side effects are environment reads and one existence probe
    /// for the static-assets source directory.
    pub fn resolve(env: &impl EnvSource, base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();

        let settings = Self {
            security: SecurityConfig::resolve(env),
            framework: FrameworkConfig::resolve(&base_dir),
            channel_layer: ChannelLayer::default(),
            database: DatabaseConfig::resolve(env, &base_dir),
            staticfiles: StaticFilesConfig::resolve(&base_dir),
            email: EmailConfig::resolve(env),
            scheduler: SchedulerConfig::resolve(env),
            base_dir,
        };

        info!(
            debug = settings.security.debug,
            database = settings.database.url.backend_name(),
            channel_layer = settings.channel_layer.backend_name(),
            scheduler_enabled = settings.scheduler.is_enabled(),
            "settings resolved"
        );

        settings
    }

    /// Resolve from the real process environment, rooted at `base_dir`.
    pub fn from_process_env(base_dir: impl Into<PathBuf>) -> Self {
        Self::resolve(&ProcessEnv, base_dir)
    }

    /// Serialize the full snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Multi-line report of the resolved configuration, with secrets
    /// redacted, suitable for startup logs.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "CureLink configuration:\n\
             - Base dir: {}\n\
             - Debug: {}\n\
             - Allowed hosts: {}\n\
             - Trusted origins: {}\n\
             - Database: {}\n\
             - Channel layer: {}\n\
             - Static root: {}\n\
             - Email: {}:{} (TLS: {})\n\
             - Scheduler: {} ({} scheduled task{})",
            self.base_dir.display(),
            self.security.debug,
            self.security.allowed_hosts.join(", "),
            self.security.csrf_trusted_origins.join(", "),
            self.database.url.backend_name(),
            self.channel_layer.backend_name(),
            self.staticfiles.static_root.display(),
            self.email.host,
            self.email.port,
            self.email.use_tls,
            if self.scheduler.is_enabled() {
                "enabled"
            } else {
                "disabled"
            },
            self.scheduler.beat_schedule.len(),
            if self.scheduler.beat_schedule.len() == 1 {
                ""
            } else {
                "s"
            },
        )
    }
}

/// Resolve a base directory: explicit flag, else the current directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn base_dir_or_cwd(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    match base_dir {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}
