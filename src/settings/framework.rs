//! Static framework wiring: installed applications, the middleware chain,
//! routing entry points, templates, password policy, and localization.
//!
//! Everything here is fixed data. Ordering is load-bearing for the
//! middleware chain (each stage wraps the next), the password validator
//! chain, and template directories.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Template engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Engine backend identifier.
    pub backend: String,
    /// Template search directories, in priority order.
    pub dirs: Vec<PathBuf>,
    /// Also search each installed application's template directory.
    pub app_dirs: bool,
    /// Context-injection hooks, in order.
    pub context_processors: Vec<String>,
}

impl TemplatesConfig {
    fn resolve(base_dir: &Path) -> Self {
        Self {
            backend: "django.template.backends.django.DjangoTemplates".to_string(),
            dirs: vec![base_dir.join("templates")],
            app_dirs: true,
            context_processors: to_strings(&[
                "django.template.context_processors.debug",
                "django.template.context_processors.request",
                "django.contrib.auth.context_processors.auth",
                "django.contrib.messages.context_processors.messages",
            ]),
        }
    }
}

/// Localization settings and feature flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Language tag.
    pub language_code: String,
    /// Timezone identifier.
    pub time_zone: String,
    /// Enable translation machinery.
    pub use_i18n: bool,
    /// Store datetimes timezone-aware.
    pub use_tz: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language_code: "en-us".to_string(),
            time_zone: "UTC".to_string(),
            use_i18n: true,
            use_tz: true,
        }
    }
}

/// Fixed application wiring consumed by the hosting framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkConfig {
    /// Installed application modules, in load order.
    pub installed_apps: Vec<String>,

    /// Middleware chain; each stage wraps the next.
    pub middleware: Vec<String>,

    /// Root URL-routing module.
    pub root_urlconf: String,

    /// WSGI entry point, kept for management commands.
    pub wsgi_application: String,

    /// ASGI entry point, used by the production server.
    pub asgi_application: String,

    /// Template engine configuration.
    pub templates: TemplatesConfig,

    /// Password validator chain, in evaluation order.
    pub auth_password_validators: Vec<String>,

    /// Localization settings.
    pub i18n: I18nConfig,

    /// Default primary-key field type.
    pub default_auto_field: String,

    /// Whether to redirect URLs missing a trailing slash.
    pub append_slash: bool,
}

impl FrameworkConfig {
    /// Build the wiring tables. Only the template directory depends on the
    /// base directory; everything else is constant.
    #[must_use]
    pub fn resolve(base_dir: &Path) -> Self {
        Self {
            installed_apps: to_strings(&[
                "django.contrib.admin",
                "django.contrib.auth",
                "django.contrib.contenttypes",
                "django.contrib.sessions",
                "django.contrib.messages",
                "django.contrib.staticfiles",
                "Users",
                "Hospitals",
                "channels",
            ]),
            middleware: to_strings(&[
                "django.middleware.security.SecurityMiddleware",
                "whitenoise.middleware.WhiteNoiseMiddleware",
                "django.contrib.sessions.middleware.SessionMiddleware",
                "django.middleware.common.CommonMiddleware",
                "django.middleware.csrf.CsrfViewMiddleware",
                "django.contrib.auth.middleware.AuthenticationMiddleware",
                "django.contrib.messages.middleware.MessageMiddleware",
                "django.middleware.clickjacking.XFrameOptionsMiddleware",
            ]),
            root_urlconf: "doctors_app.urls".to_string(),
            wsgi_application: "doctors_app.wsgi.application".to_string(),
            asgi_application: "doctors_app.asgi.application".to_string(),
            templates: TemplatesConfig::resolve(base_dir),
            auth_password_validators: to_strings(&[
                "django.contrib.auth.password_validation.UserAttributeSimilarityValidator",
                "django.contrib.auth.password_validation.MinimumLengthValidator",
                "django.contrib.auth.password_validation.CommonPasswordValidator",
                "django.contrib.auth.password_validation.NumericPasswordValidator",
            ]),
            i18n: I18nConfig::default(),
            default_auto_field: "django.db.models.BigAutoField".to_string(),
            append_slash: false,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
