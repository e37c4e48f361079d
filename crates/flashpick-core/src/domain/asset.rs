//! Release assets and pattern-ordered selection.

use globset::{Glob, GlobMatcher};
use serde::Serialize;
use tracing::{debug, trace};

use super::CandidatePattern;

/// A downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseAsset {
    /// File name as listed by the registry.
    pub name: String,
    /// Direct download URL.
    pub download_url: String,
}

impl ReleaseAsset {
    /// Create a new asset entry.
    pub fn new(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            download_url: download_url.into(),
        }
    }
}

/// Compile a glob pattern, skipping ones that do not parse.
fn compile(pattern: &str) -> Option<GlobMatcher> {
    match Glob::new(pattern) {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(e) => {
            trace!(pattern, error = %e, "Skipping invalid glob pattern");
            None
        }
    }
}

/// Pick the first asset matching the highest-preference pattern.
///
/// Patterns are the outer loop: a match on an earlier pattern wins even when
/// a later pattern would match an asset that appears earlier in `assets`.
pub fn select_asset<'a>(
    assets: &'a [ReleaseAsset],
    patterns: &[CandidatePattern],
) -> Option<&'a ReleaseAsset> {
    for pattern in patterns {
        let Some(matcher) = compile(pattern.as_str()) else {
            continue;
        };
        if let Some(asset) = assets.iter().find(|a| matcher.is_match(&a.name)) {
            debug!(
                pattern = pattern.as_str(),
                asset = %asset.name,
                "Candidate pattern matched"
            );
            return Some(asset);
        }
        trace!(pattern = pattern.as_str(), "No asset matched pattern");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AbiVariant, CandidateRequest, ComputeTag, Detected, FrameworkVersion, InterpreterTag,
        PlatformTag, generate_candidates,
    };

    fn asset(name: &str) -> ReleaseAsset {
        ReleaseAsset::new(name, format!("https://example.invalid/{name}"))
    }

    fn candidates(compute: ComputeTag) -> Vec<CandidatePattern> {
        let framework = FrameworkVersion::from_reported("2.3.1");
        let interpreter = InterpreterTag::cpython(3, 10);
        generate_candidates(&CandidateRequest {
            distribution: "flash_attn",
            version: "2.5.8",
            compute_tag: compute,
            framework_version: &framework,
            abi: AbiVariant::Cxx11AbiFalse,
            interpreter_tag: Detected::Known(&interpreter),
            platform: &PlatformTag::LinuxX86_64,
        })
    }

    fn glob_matches(pattern: &str, name: &str) -> bool {
        compile(pattern).is_some_and(|m| m.is_match(name))
    }

    #[test]
    fn test_glob_semantics() {
        assert!(glob_matches("pkg-*.whl", "pkg-1.0.whl"));
        assert!(glob_matches("pkg-?.whl", "pkg-1.whl"));
        assert!(!glob_matches("pkg-?.whl", "pkg-10.whl"));
        assert!(glob_matches("a+b.whl", "a+b.whl"));
    }

    #[test]
    fn test_empty_asset_list_selects_nothing() {
        assert!(select_asset(&[], &candidates(ComputeTag::new(12, 1))).is_none());
    }

    #[test]
    fn test_exact_beats_relaxed_even_when_listed_later() {
        let assets = vec![
            asset("flash_attn-2.5.8+cu12torch2.3cxx11abiFALSE-cp310-cp310-linux_x86_64.whl"),
            asset("flash_attn-2.5.8+cu122torch2.3cxx11abiFALSE-cp310-cp310-linux_x86_64.whl"),
        ];

        let chosen = select_asset(&assets, &candidates(ComputeTag::new(12, 2))).unwrap();
        assert_eq!(chosen.name, assets[1].name);
    }

    #[test]
    fn test_falls_back_to_major_only_cuda_tag() {
        let assets = vec![
            asset("flash_attn-2.5.8+cu118torch2.3cxx11abiFALSE-cp310-cp310-linux_x86_64.whl"),
            asset("flash_attn-2.5.8+cu12torch2.3cxx11abiFALSE-cp310-cp310-linux_x86_64.whl"),
        ];

        let chosen = select_asset(&assets, &candidates(ComputeTag::new(12, 3))).unwrap();
        assert_eq!(chosen.name, assets[1].name);
    }

    #[test]
    fn test_interpreter_wildcard_accepts_abi_suffix() {
        let assets = vec![asset(
            "flash_attn-2.5.8+cu121torch2.3cxx11abiFALSE-cp310-cp310t-linux_x86_64.whl",
        )];

        let chosen = select_asset(&assets, &candidates(ComputeTag::new(12, 1)));
        assert_eq!(chosen, Some(&assets[0]));
    }

    #[test]
    fn test_wrong_abi_variant_never_matches() {
        let assets = vec![asset(
            "flash_attn-2.5.8+cu121torch2.3cxx11abiTRUE-cp310-cp310-linux_x86_64.whl",
        )];

        assert!(select_asset(&assets, &candidates(ComputeTag::new(12, 1))).is_none());
    }
}
