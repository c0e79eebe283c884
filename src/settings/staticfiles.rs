//! Static-asset and user-upload serving locations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Resolved static/media section of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticFilesConfig {
    /// URL prefix for collected static assets.
    pub static_url: String,

    /// Collection target directory.
    pub static_root: PathBuf,

    /// Source directories scanned at collection time. Empty when the
    /// conventional `static/` directory is absent.
    pub staticfiles_dirs: Vec<PathBuf>,

    /// Storage strategy identifier (compressed, content-hashed manifest).
    pub storage: String,

    /// URL prefix for user-uploaded content.
    pub media_url: String,

    /// Filesystem root for user-uploaded content.
    pub media_root: PathBuf,
}

impl StaticFilesConfig {
    /// Resolve serving locations relative to `base_dir`.
    ///
    /// This is the one step in snapshot assembly that probes the
    /// filesystem: the source-directory list is populated only when
    /// `<base_dir>/static` exists.
    #[must_use]
    pub fn resolve(base_dir: &Path) -> Self {
        let static_src = base_dir.join("static");
        let staticfiles_dirs = if static_src.exists() {
            vec![static_src]
        } else {
            Vec::new()
        };

        Self {
            static_url: "static/".to_string(),
            static_root: base_dir.join("staticfiles"),
            staticfiles_dirs,
            storage: "whitenoise.storage.CompressedManifestStaticFilesStorage".to_string(),
            media_url: "/media/".to_string(),
            media_root: base_dir.join("media"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_join_base_dir() {
        let config = StaticFilesConfig::resolve(Path::new("/srv/curelink"));
        assert_eq!(config.static_root, PathBuf::from("/srv/curelink/staticfiles"));
        assert_eq!(config.media_root, PathBuf::from("/srv/curelink/media"));
        assert_eq!(config.static_url, "static/");
        assert_eq!(config.media_url, "/media/");
    }

    #[test]
    fn test_source_dirs_empty_without_static_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = StaticFilesConfig::resolve(tmp.path());
        assert!(config.staticfiles_dirs.is_empty());
    }

    #[test]
    fn test_source_dirs_populated_when_static_dir_exists() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("static")).unwrap();
        let config = StaticFilesConfig::resolve(tmp.path());
        assert_eq!(config.staticfiles_dirs, vec![tmp.path().join("static")]);
    }
}
