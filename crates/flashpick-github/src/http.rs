//! HTTP backend abstraction for the GitHub API.
//!
//! The production backend is a thin reqwest wrapper. Tests swap in
//! [`testing::FakeBackend`] with canned responses.

use crate::config::GitHubCatalogConfig;
use crate::error::{GitHubError, GitHubResult};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Media type recommended by the GitHub REST API.
const GITHUB_JSON: &str = "application/vnd.github+json";

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// Non-success statuses come back as [`GitHubError::ApiRequestFailed`].
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> GitHubResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// A single attempt is made per request; failures surface immediately.
pub struct ReqwestBackend {
    client: reqwest::Client,
    auth_token: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &GitHubCatalogConfig) -> GitHubResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            auth_token: config.token.clone(),
        })
    }

    /// Build a request with optional authentication.
    fn build_request(&self, url: &Url) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url.as_str());
        if let Some(ref token) = self.auth_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        request
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> GitHubResult<T> {
        debug!(%url, "GET");
        let response = self.build_request(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_backend_creation() {
        let backend = ReqwestBackend::new(&GitHubCatalogConfig::default()).unwrap();
        assert!(backend.auth_token.is_none());
    }

    #[test]
    fn test_reqwest_backend_with_token() {
        let config = GitHubCatalogConfig::new().with_token("test_token");
        let backend = ReqwestBackend::new(&config).unwrap();
        assert_eq!(backend.auth_token, Some("test_token".to_string()));

        let request = backend
            .build_request(&Url::parse("https://api.github.com/").unwrap())
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer test_token"
        );
    }

    mod fake_backend_tests {
        use super::super::testing::*;
        use super::*;
        use serde_json::json;

        #[tokio::test]
        async fn test_fake_backend_returns_canned_response() {
            let backend = FakeBackend::new()
                .with_response("releases", CannedResponse::Json(json!({"tag_name": "v1"})));

            let url = Url::parse("https://example.com/releases").unwrap();
            let result: serde_json::Value = backend.get_json(&url).await.unwrap();

            assert_eq!(result["tag_name"], "v1");
            assert_eq!(backend.requests(), ["https://example.com/releases"]);
        }

        #[tokio::test]
        async fn test_fake_backend_returns_404_for_unknown_url() {
            let backend = FakeBackend::new();
            let url = Url::parse("https://example.com/unknown").unwrap();

            let result: GitHubResult<serde_json::Value> = backend.get_json(&url).await;
            assert!(result.unwrap_err().is_not_found());
        }

        #[tokio::test]
        async fn test_fake_backend_canned_status() {
            let backend =
                FakeBackend::new().with_response("limited", CannedResponse::Status(403));
            let url = Url::parse("https://example.com/limited").unwrap();

            let result: GitHubResult<serde_json::Value> = backend.get_json(&url).await;
            assert!(matches!(
                result,
                Err(GitHubError::ApiRequestFailed { status: 403, .. })
            ));
        }
    }
}
