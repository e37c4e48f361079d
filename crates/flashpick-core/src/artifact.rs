//! Identity of the artifact being resolved.
//!
//! These are pure domain constants with no infrastructure dependencies.

use serde::Serialize;

/// Version resolved when the user does not pass `--version`.
pub const DEFAULT_ARTIFACT_VERSION: &str = "2.5.8";

/// Wheel distribution name as it appears in filenames.
pub const DEFAULT_DISTRIBUTION: &str = "flash_attn";

/// Package name as pip knows it.
pub const DEFAULT_PACKAGE: &str = "flash-attn";

/// The artifact the resolver looks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSpec {
    /// Distribution name used in wheel filenames.
    pub distribution: String,
    /// Package name used for uninstall.
    pub package: String,
    /// Version used when none is requested.
    pub default_version: String,
}

impl Default for ArtifactSpec {
    fn default() -> Self {
        Self {
            distribution: DEFAULT_DISTRIBUTION.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            default_version: DEFAULT_ARTIFACT_VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_artifact() {
        let spec = ArtifactSpec::default();
        assert_eq!(spec.distribution, "flash_attn");
        assert_eq!(spec.package, "flash-attn");
        assert_eq!(spec.default_version, DEFAULT_ARTIFACT_VERSION);
    }
}
