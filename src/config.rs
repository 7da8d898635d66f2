//! Catalog client configuration
//!
//! Settings for reaching the catalog API. The CLI fills these from flags and
//! environment variables; library users construct them directly.

use std::time::Duration;

/// Default location of the TVMaze API
pub const DEFAULT_API_URL: &str = "https://api.tvmaze.com";

/// Connection settings for a catalog client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL the endpoint paths are appended to
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl CatalogConfig {
    /// Creates a configuration pointing at a different API location
    ///
    /// A trailing slash is dropped so endpoint paths can be appended directly.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the per-request timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "https://api.tvmaze.com");
        assert_eq!(config.timeout, None);
        assert!(config.user_agent.starts_with("show_finder/"));
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = CatalogConfig::default().with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }
}
