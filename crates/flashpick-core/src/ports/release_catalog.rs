//! Release catalog port.
//!
//! The catalog lists the files attached to releases of the upstream
//! project. Two lookup modes exist; the asset selector does not care which
//! one produced the list.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::ReleaseAsset;

/// Errors surfaced by a release catalog.
///
/// A missing tagged release is not an error; it yields an empty list.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The registry answered with a failure status.
    #[error("Release registry returned HTTP {status} for {url}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// URL that was requested.
        url: String,
    },

    /// The request could not be completed (DNS, TLS, timeout, ...).
    #[error("Release registry request failed: {0}")]
    Network(String),

    /// The registry answered with something that does not parse.
    #[error("Invalid response from release registry: {0}")]
    InvalidResponse(String),
}

/// Which releases to list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "version", rename_all = "snake_case")]
pub enum CatalogQuery {
    /// Assets of a single tagged release.
    Tagged(String),
    /// Assets of the most recent releases, newest first.
    Recent,
}

/// Port for querying the release registry.
#[async_trait]
pub trait ReleaseCatalogPort: Send + Sync {
    /// List assets of the release tagged for `version`.
    ///
    /// Returns an empty list when the release does not exist.
    async fn fetch_by_version(&self, version: &str) -> Result<Vec<ReleaseAsset>, CatalogError>;

    /// List assets of the most recent releases, newest release first.
    async fn fetch_recent(&self) -> Result<Vec<ReleaseAsset>, CatalogError>;

    /// Dispatch on a [`CatalogQuery`].
    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<ReleaseAsset>, CatalogError> {
        match query {
            CatalogQuery::Tagged(version) => self.fetch_by_version(version).await,
            CatalogQuery::Recent => self.fetch_recent().await,
        }
    }
}
