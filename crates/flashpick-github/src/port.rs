//! `ReleaseCatalogPort` implementation for `GitHubReleaseCatalog`.

use async_trait::async_trait;
use flashpick_core::{CatalogError, ReleaseAsset, ReleaseCatalogPort};

use crate::client::GitHubReleaseCatalog;
use crate::error::GitHubError;
use crate::http::HttpBackend;
use crate::models::GitHubRelease;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `GitHubError` to core `CatalogError`.
fn map_error(err: GitHubError) -> CatalogError {
    match err {
        GitHubError::ApiRequestFailed { status, url } => CatalogError::Http { status, url },
        GitHubError::Network(e) => CatalogError::Network(e.to_string()),
        GitHubError::JsonParse(e) => CatalogError::InvalidResponse(e.to_string()),
        e @ (GitHubError::InvalidRepo { .. } | GitHubError::InvalidUrl(_)) => {
            CatalogError::InvalidResponse(e.to_string())
        }
    }
}

/// Flatten release assets, keeping release order.
fn to_assets(releases: impl IntoIterator<Item = GitHubRelease>) -> Vec<ReleaseAsset> {
    releases
        .into_iter()
        .flat_map(|release| release.assets)
        .map(|asset| ReleaseAsset::new(asset.name, asset.browser_download_url))
        .collect()
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> ReleaseCatalogPort for GitHubReleaseCatalog<B> {
    async fn fetch_by_version(&self, version: &str) -> Result<Vec<ReleaseAsset>, CatalogError> {
        let release = self.release_by_version(version).await.map_err(map_error)?;
        Ok(to_assets(release))
    }

    async fn fetch_recent(&self) -> Result<Vec<ReleaseAsset>, CatalogError> {
        let releases = self.recent_releases().await.map_err(map_error)?;
        Ok(to_assets(releases))
    }
}
