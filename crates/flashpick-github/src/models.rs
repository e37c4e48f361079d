//! GitHub API response types and internal configuration.

use serde::Deserialize;
use url::Url;

/// A release as returned by the releases endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRelease {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<GitHubAsset>,
}

/// A file attached to a release.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// Internal configuration, validated from `GitHubCatalogConfig`.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: Url,
    pub owner: String,
    pub name: String,
    pub page_size: u8,
}

#[cfg(test)]
impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://api.github.com").unwrap(),
            owner: "Dao-AILab".to_string(),
            name: "flash-attention".to_string(),
            page_size: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_deserializes_from_api_shape() {
        let json = r#"{
            "tag_name": "v2.5.8",
            "name": "v2.5.8",
            "prerelease": false,
            "assets": [
                {
                    "name": "flash_attn-2.5.8+cu122torch2.3cxx11abiFALSE-cp310-cp310-linux_x86_64.whl",
                    "browser_download_url": "https://github.com/Dao-AILab/flash-attention/releases/download/v2.5.8/a.whl",
                    "size": 123
                }
            ]
        }"#;

        let release: GitHubRelease = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "v2.5.8");
        assert_eq!(release.assets.len(), 1);
        assert!(release.assets[0].browser_download_url.ends_with("a.whl"));
    }

    #[test]
    fn test_release_without_assets_field() {
        let release: GitHubRelease = serde_json::from_str(r#"{"tag_name": "v1.0"}"#).unwrap();
        assert!(release.assets.is_empty());
    }
}
