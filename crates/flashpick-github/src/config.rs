//! Public configuration for the GitHub release catalog.
//!
//! The internal config is derived from this one when the client is built.

use std::time::Duration;

/// Default GitHub REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default upstream repository publishing the wheels.
pub const DEFAULT_REPO: &str = "Dao-AILab/flash-attention";

/// Configuration for the GitHub release catalog.
///
/// # Example
///
/// ```
/// use flashpick_github::GitHubCatalogConfig;
/// use std::time::Duration;
///
/// let config = GitHubCatalogConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct GitHubCatalogConfig {
    /// Base URL of the GitHub API
    pub(crate) base_url: String,
    /// `owner/name` of the repository
    pub(crate) repo: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Optional bearer token (raises rate limits)
    pub(crate) token: Option<String>,
    /// Number of releases listed in recent mode
    pub(crate) page_size: u8,
}

impl Default for GitHubCatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            repo: DEFAULT_REPO.to_string(),
            user_agent: concat!("flashpick/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(20),
            token: None,
            page_size: 10,
        }
    }
}

impl GitHubCatalogConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the GitHub API.
    ///
    /// Defaults to `https://api.github.com`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the `owner/name` repository to list releases from.
    #[must_use]
    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = repo.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 20 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional bearer token.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Set how many releases recent mode lists.
    ///
    /// Clamped to GitHub's `1..=100` page size range.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u8) -> Self {
        self.page_size = page_size.clamp(1, 100);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GitHubCatalogConfig::new();
        assert_eq!(config.base_url, "https://api.github.com");
        assert_eq!(config.repo, "Dao-AILab/flash-attention");
        assert!(config.user_agent.starts_with("flashpick/"));
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert!(config.token.is_none());
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GitHubCatalogConfig::new()
            .with_base_url("https://ghe.example.com/api/v3")
            .with_repo("acme/wheels")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5))
            .with_token("secret")
            .with_page_size(30);

        assert_eq!(config.base_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.repo, "acme/wheels");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.token, Some("secret".to_string()));
        assert_eq!(config.page_size, 30);
    }

    #[test]
    fn test_page_size_is_clamped() {
        assert_eq!(GitHubCatalogConfig::new().with_page_size(0).page_size, 1);
        assert_eq!(GitHubCatalogConfig::new().with_page_size(200).page_size, 100);
    }

    #[test]
    fn test_optional_token() {
        let with_token = GitHubCatalogConfig::new().with_optional_token(Some("t".to_string()));
        assert_eq!(with_token.token, Some("t".to_string()));

        let without_token = GitHubCatalogConfig::new().with_optional_token(None);
        assert!(without_token.token.is_none());
    }
}
