//! GitHub release catalog client.
//!
//! Generic over an HTTP backend so tests can inject canned responses.

use crate::config::GitHubCatalogConfig;
use crate::error::{GitHubError, GitHubResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{CatalogConfig, GitHubRelease};
use crate::url::{build_recent_releases_url, build_release_by_tag_url};
use tracing::debug;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default release catalog using the reqwest HTTP backend.
pub type DefaultReleaseCatalog = GitHubReleaseCatalog<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Lists release assets of one GitHub repository.
///
/// External code should use [`DefaultReleaseCatalog`] through
/// `ReleaseCatalogPort`.
pub struct GitHubReleaseCatalog<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: CatalogConfig,
}

impl DefaultReleaseCatalog {
    /// Create a new catalog with the given configuration.
    pub fn new(config: &GitHubCatalogConfig) -> GitHubResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    fn to_internal_config(config: &GitHubCatalogConfig) -> GitHubResult<CatalogConfig> {
        let (owner, name) = split_repo(&config.repo)?;
        Ok(CatalogConfig {
            base_url: Url::parse(&config.base_url)?,
            owner,
            name,
            page_size: config.page_size,
        })
    }
}

/// Split `owner/name`, rejecting anything else.
fn split_repo(repo: &str) -> GitHubResult<(String, String)> {
    match repo.trim().split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(GitHubError::InvalidRepo {
            repo: repo.to_string(),
        }),
    }
}

impl<B: HttpBackend> GitHubReleaseCatalog<B> {
    /// Create a catalog with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: CatalogConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Fetch one release by version; `None` when the tag does not exist.
    pub(crate) async fn release_by_version(
        &self,
        version: &str,
    ) -> GitHubResult<Option<GitHubRelease>> {
        let url = build_release_by_tag_url(&self.config, version);
        match self.backend.get_json::<GitHubRelease>(&url).await {
            Ok(release) => Ok(Some(release)),
            Err(err) if err.is_not_found() => {
                debug!(%version, "Release tag not found");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Fetch the most recent `v`-tagged releases, newest first.
    pub(crate) async fn recent_releases(&self) -> GitHubResult<Vec<GitHubRelease>> {
        let url = build_recent_releases_url(&self.config);
        let releases: Vec<GitHubRelease> = self.backend.get_json(&url).await?;
        let total = releases.len();

        let versioned: Vec<_> = releases
            .into_iter()
            .filter(|release| release.tag_name.starts_with('v'))
            .collect();
        debug!(total, kept = versioned.len(), "Recent releases listed");
        Ok(versioned)
    }
}
