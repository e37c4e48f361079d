//! Internal error types for GitHub operations.
//!
//! Query errors are mapped to [`flashpick_core::CatalogError`] at the port
//! boundary; only construction errors leave the crate as [`GitHubError`].

use thiserror::Error;

/// Result type alias for GitHub operations.
pub type GitHubResult<T> = Result<T, GitHubError>;

/// Errors related to GitHub API operations.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// API request failed with an HTTP error status.
    #[error("GitHub API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The repository setting is not `owner/name`.
    #[error("Invalid repository '{repo}', expected owner/name")]
    InvalidRepo {
        /// The rejected value
        repo: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl GitHubError {
    /// Whether this is a 404 from the API.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiRequestFailed { status: 404, .. })
    }
}
