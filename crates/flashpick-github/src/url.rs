//! URL construction helpers for the GitHub releases API.

use crate::models::CatalogConfig;
use url::Url;

/// Release tag for an artifact version (`2.5.8` → `v2.5.8`).
///
/// A version that already carries the `v` prefix is used as is.
pub fn release_tag(version: &str) -> String {
    if version.starts_with('v') {
        version.to_string()
    } else {
        format!("v{version}")
    }
}

/// `{base}/repos/{owner}/{name}/releases` plus `suffix`.
fn releases_url(config: &CatalogConfig, suffix: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!(
        "{base_path}/repos/{}/{}/releases{suffix}",
        config.owner, config.name
    ));
    url
}

/// URL of a single tagged release.
pub fn build_release_by_tag_url(config: &CatalogConfig, version: &str) -> Url {
    releases_url(config, &format!("/tags/{}", release_tag(version)))
}

/// URL listing the most recent releases.
pub fn build_recent_releases_url(config: &CatalogConfig) -> Url {
    let mut url = releases_url(config, "");
    url.set_query(Some(&format!("per_page={}", config.page_size)));
    url
}
