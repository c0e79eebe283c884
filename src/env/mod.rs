//! Environment-lookup capability.
//!
//! Settings resolution takes its environment as an [`EnvSource`] value
//! rather than touching process globals directly. [`ProcessEnv`] is the
//! production source; [`MapEnv`] lets tests resolve against a fixed map
//! without mutating the process environment.

use std::collections::HashMap;

/// Read-only source of environment variables.
pub trait EnvSource {
    /// Look up a variable, returning `None` when unset or not valid Unicode.
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a variable with a fallback default.
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory environment, for tests and tooling.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, returning `self` for chained construction.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Split a comma-separated value, trimming entries and dropping empties.
/// Order is preserved and duplicates are kept.
#[must_use]
pub fn split_commas(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split on whitespace, dropping empty entries.
#[must_use]
pub fn split_whitespace(value: &str) -> Vec<String> {
    value.split_whitespace().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().with("SECRET_KEY", "abc");
        assert_eq!(env.get("SECRET_KEY"), Some("abc".to_string()));
        assert_eq!(env.get("MISSING"), None);
    }

    #[test]
    fn test_get_or_default() {
        let env = MapEnv::new();
        assert_eq!(env.get_or("EMAIL_HOST", "smtp.gmail.com"), "smtp.gmail.com");
    }

    #[test]
    fn test_map_env_from_iter() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.get("B"), Some("2".to_string()));
    }

    #[test]
    fn test_split_commas_trims_and_drops_empties() {
        let parts = split_commas(" a.com , b.com ,, c.com ");
        assert_eq!(parts, vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn test_split_commas_keeps_duplicates_in_order() {
        let parts = split_commas("x.com,y.com,x.com");
        assert_eq!(parts, vec!["x.com", "y.com", "x.com"]);
    }

    #[test]
    fn test_split_whitespace() {
        let parts = split_whitespace("  https://a.com   https://b.com ");
        assert_eq!(parts, vec!["https://a.com", "https://b.com"]);
    }
}
