//! Security settings: signing key, debug flag, host allowlist, CSRF trusted
//! origins, and the proxy TLS-termination header.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::env::{split_commas, split_whitespace, EnvSource};

/// Placeholder signing key used when `SECRET_KEY` is unset. Unsafe for
/// anything beyond local development.
pub const INSECURE_SECRET_KEY: &str = "dev-secret-change-me";

/// Static entries every host allowlist starts from.
pub const DEFAULT_ALLOWED_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Fixed origin from an early Render deployment, appended unconditionally.
/// TODO: drop once the curelink3-6.onrender.com deployment is retired.
pub const LEGACY_TRUSTED_ORIGIN: &str = "https://curelink3-6.onrender.com";

/// Header consulted to trust an upstream TLS terminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxySslHeader {
    /// Header name in the framework's request-meta form.
    pub header: String,
    /// Value indicating the original request was HTTPS.
    pub value: String,
}

impl Default for ProxySslHeader {
    fn default() -> Self {
        Self {
            header: "HTTP_X_FORWARDED_PROTO".to_string(),
            value: "https".to_string(),
        }
    }
}

/// Resolved security section of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Cryptographic signing key.
    pub secret_key: String,

    /// Verbose error pages when enabled.
    pub debug: bool,

    /// Hostnames the server accepts requests for. Order preserved,
    /// duplicates tolerated.
    pub allowed_hosts: Vec<String>,

    /// Origins exempt from cross-site request forgery rejection.
    pub csrf_trusted_origins: Vec<String>,

    /// Proxy header trust directive for TLS termination.
    pub proxy_ssl_header: ProxySslHeader,
}

impl SecurityConfig {
    /// Resolve the security section from the environment.
    ///
    /// The allowlist and trusted origins always contain their static
    /// defaults; environment-provided entries are appended, never
    /// substituted.
    pub fn resolve(env: &impl EnvSource) -> Self {
        let secret_key = env.get_or("SECRET_KEY", INSECURE_SECRET_KEY);
        if secret_key == INSECURE_SECRET_KEY {
            warn!("SECRET_KEY is unset; using the insecure development placeholder");
        }

        let debug = env.get("DEBUG").as_deref() == Some("True");
        let render_hostname = env.get("RENDER_EXTERNAL_HOSTNAME");

        Self {
            secret_key,
            debug,
            allowed_hosts: resolve_allowed_hosts(env, render_hostname.as_deref()),
            csrf_trusted_origins: resolve_trusted_origins(env, render_hostname.as_deref()),
            proxy_ssl_header: ProxySslHeader::default(),
        }
    }
}

/// Build the host allowlist: static defaults, then the platform-injected
/// hostname, then the manual comma-separated list.
fn resolve_allowed_hosts(env: &impl EnvSource, render_hostname: Option<&str>) -> Vec<String> {
    let mut hosts: Vec<String> = DEFAULT_ALLOWED_HOSTS
        .iter()
        .map(ToString::to_string)
        .collect();

    if let Some(hostname) = render_hostname {
        hosts.push(hostname.to_string());
    }

    if let Some(extra) = env.get("DJANGO_ALLOWED_HOSTS") {
        hosts.extend(split_commas(&extra));
    }

    hosts
}

/// Build the CSRF trusted-origin list. The env value splits on commas when
/// one is present, otherwise on whitespace; the platform hostname's HTTPS
/// origin and the legacy deployment origin are appended after.
fn resolve_trusted_origins(env: &impl EnvSource, render_hostname: Option<&str>) -> Vec<String> {
    let raw = env.get("CSRF_TRUSTED_ORIGINS").unwrap_or_default();
    let mut origins = if raw.contains(',') {
        split_commas(&raw)
    } else {
        split_whitespace(&raw)
    };

    if let Some(hostname) = render_hostname {
        origins.push(format!("https://{hostname}"));
    }

    warn!(
        origin = LEGACY_TRUSTED_ORIGIN,
        "appending hardcoded legacy trusted origin"
    );
    origins.push(LEGACY_TRUSTED_ORIGIN.to_string());

    origins
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn test_defaults_without_environment() {
        let config = SecurityConfig::resolve(&MapEnv::new());
        assert_eq!(config.secret_key, INSECURE_SECRET_KEY);
        assert!(!config.debug);
        assert_eq!(config.allowed_hosts, vec!["localhost", "127.0.0.1"]);
        assert_eq!(config.csrf_trusted_origins, vec![LEGACY_TRUSTED_ORIGIN]);
    }

    #[test]
    fn test_debug_requires_exact_true() {
        for value in ["true", "1", "yes", "TRUE"] {
            let env = MapEnv::new().with("DEBUG", value);
            assert!(!SecurityConfig::resolve(&env).debug, "{value} should not enable debug");
        }
        let env = MapEnv::new().with("DEBUG", "True");
        assert!(SecurityConfig::resolve(&env).debug);
    }

    #[test]
    fn test_render_hostname_joins_allowlist_and_origins() {
        let env = MapEnv::new().with("RENDER_EXTERNAL_HOSTNAME", "example.com");
        let config = SecurityConfig::resolve(&env);
        assert_eq!(
            config.allowed_hosts,
            vec!["localhost", "127.0.0.1", "example.com"]
        );
        assert!(config
            .csrf_trusted_origins
            .contains(&"https://example.com".to_string()));
    }

    #[test]
    fn test_manual_allowlist_appended_after_defaults() {
        let env = MapEnv::new().with("DJANGO_ALLOWED_HOSTS", " example.com , api.example.com ");
        let config = SecurityConfig::resolve(&env);
        assert_eq!(
            config.allowed_hosts,
            vec!["localhost", "127.0.0.1", "example.com", "api.example.com"]
        );
    }

    #[test]
    fn test_allowlist_keeps_duplicates() {
        let env = MapEnv::new().with("DJANGO_ALLOWED_HOSTS", "localhost,localhost");
        let config = SecurityConfig::resolve(&env);
        assert_eq!(
            config.allowed_hosts,
            vec!["localhost", "127.0.0.1", "localhost", "localhost"]
        );
    }

    #[test]
    fn test_trusted_origins_comma_path() {
        let env = MapEnv::new().with("CSRF_TRUSTED_ORIGINS", "https://a.com,https://b.com");
        let config = SecurityConfig::resolve(&env);
        assert_eq!(
            config.csrf_trusted_origins,
            vec!["https://a.com", "https://b.com", LEGACY_TRUSTED_ORIGIN]
        );
    }

    #[test]
    fn test_trusted_origins_whitespace_path() {
        let env = MapEnv::new().with("CSRF_TRUSTED_ORIGINS", "https://a.com https://b.com");
        let config = SecurityConfig::resolve(&env);
        assert_eq!(
            config.csrf_trusted_origins,
            vec!["https://a.com", "https://b.com", LEGACY_TRUSTED_ORIGIN]
        );
    }

    #[test]
    fn test_legacy_origin_always_last() {
        let env = MapEnv::new()
            .with("CSRF_TRUSTED_ORIGINS", "https://a.com")
            .with("RENDER_EXTERNAL_HOSTNAME", "example.com");
        let config = SecurityConfig::resolve(&env);
        assert_eq!(
            config.csrf_trusted_origins,
            vec!["https://a.com", "https://example.com", LEGACY_TRUSTED_ORIGIN]
        );
    }

    #[test]
    fn test_proxy_ssl_header() {
        let config = SecurityConfig::resolve(&MapEnv::new());
        assert_eq!(config.proxy_ssl_header.header, "HTTP_X_FORWARDED_PROTO");
        assert_eq!(config.proxy_ssl_header.value, "https");
    }
}
