/// Backend used by production builds when no override is given.
pub const PRODUCTION_API_BASE: &str = "https://api.gitlogs.com";

/// Where the backend lives. An empty `base_url` means same origin (dev proxy).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    /// Resolve the base URL from the build-time override and production flag.
    ///
    /// Priority: a non-blank override, then [`PRODUCTION_API_BASE`] when
    /// `production` is set, then the empty string.
    pub fn resolve(override_url: Option<&str>, production: bool) -> Self {
        let base_url = match override_url.map(str::trim).filter(|value| !value.is_empty()) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None if production => PRODUCTION_API_BASE.to_string(),
            None => String::new(),
        };
        Self {
            base_url,
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `base_url + path`; `path` is expected to start with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_production() {
        let config = BackendConfig::resolve(Some("https://staging.example.com/"), true);
        assert_eq!(config.base_url(), "https://staging.example.com");
        assert_eq!(config.url("/api/health"), "https://staging.example.com/api/health");
    }

    #[test]
    fn production_default_when_no_override() {
        assert_eq!(BackendConfig::resolve(None, true).base_url(), PRODUCTION_API_BASE);
        assert_eq!(BackendConfig::resolve(Some("   "), true).base_url(), PRODUCTION_API_BASE);
    }

    #[test]
    fn dev_build_uses_same_origin() {
        let config = BackendConfig::resolve(None, false);
        assert_eq!(config.base_url(), "");
        assert_eq!(config.url("/api/me"), "/api/me");
    }
}
