//! Wheel resolution: fingerprint → candidates → catalog → selection.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::artifact::ArtifactSpec;
use crate::domain::{
    AbiVariant, CandidatePattern, CandidateRequest, ComputeTag, Detected, EnvironmentFingerprint,
    ReleaseAsset, generate_candidates, select_asset,
};
use crate::ports::{CatalogError, CatalogQuery, EnvironmentProbePort, ReleaseCatalogPort};

/// Errors that stop the resolution pipeline.
///
/// A plan that simply found no matching wheel is not an error; see
/// [`ResolutionPlan::selected`].
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The framework could not be imported at all.
    #[error("Could not import torch. Please install a CUDA-enabled PyTorch first.")]
    FrameworkMissing {
        /// What was detected before giving up.
        fingerprint: Box<EnvironmentFingerprint>,
    },

    /// Neither torch nor nvcc reported a CUDA version.
    #[error(
        "Could not detect CUDA version. Ensure your PyTorch is CUDA-enabled or nvcc is installed."
    )]
    ComputeTagUnresolved {
        /// What was detected before giving up.
        fingerprint: Box<EnvironmentFingerprint>,
    },

    /// The release registry failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ResolveError {
    /// The fingerprint captured before a precondition failure, if any.
    pub fn fingerprint(&self) -> Option<&EnvironmentFingerprint> {
        match self {
            Self::FrameworkMissing { fingerprint } | Self::ComputeTagUnresolved { fingerprint } => {
                Some(fingerprint)
            }
            Self::Catalog(_) => None,
        }
    }
}

/// Strip one leading `v` from a user-supplied version (`v2.5.8` → `2.5.8`).
///
/// Wheel names carry the bare version; only release tags are `v`-prefixed.
fn normalize_version(version: &str) -> &str {
    let trimmed = version.trim();
    trimmed.strip_prefix('v').unwrap_or(trimmed)
}

/// User-controlled resolution options.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Artifact version; `None` means default version, recent releases.
    pub version: Option<String>,
    /// ABI variant; `None` means the policy default.
    pub abi: Option<AbiVariant>,
}

/// Where the chosen ABI variant came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbiSource {
    /// Passed by the user.
    Explicit,
    /// Filled in by policy.
    PolicyDefault,
}

/// The ABI variant used for candidate generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AbiChoice {
    pub variant: AbiVariant,
    pub source: AbiSource,
}

impl AbiChoice {
    /// Apply the ABI policy: explicit choice wins, otherwise the default.
    ///
    /// The detected torch flag is never used to pick a variant; a mismatch
    /// with the default only produces a warning.
    pub fn decide(requested: Option<AbiVariant>, detected: Detected<bool>) -> Self {
        if let Some(variant) = requested {
            debug!(abi = %variant, "Using requested ABI variant");
            return Self {
                variant,
                source: AbiSource::Explicit,
            };
        }

        let variant = AbiVariant::POLICY_DEFAULT;
        info!(abi = %variant, "No ABI variant requested, using policy default");
        if let Detected::Known(flag) = detected {
            let native = AbiVariant::from_flag(flag);
            if native != variant {
                warn!(
                    detected = %native,
                    chosen = %variant,
                    "torch reports a different C++11 ABI than the default; consider --abi {native}"
                );
            }
        }

        Self {
            variant,
            source: AbiSource::PolicyDefault,
        }
    }
}

/// Outcome of a resolution run.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionPlan {
    pub fingerprint: EnvironmentFingerprint,
    pub compute_tag: ComputeTag,
    pub abi: AbiChoice,
    pub version: String,
    pub query: CatalogQuery,
    pub candidates: Vec<CandidatePattern>,
    /// Selected wheel, `None` when no candidate matched.
    pub selected: Option<ReleaseAsset>,
}

/// Run all detectors once and assemble a fingerprint.
pub fn collect_fingerprint(probe: &dyn EnvironmentProbePort) -> EnvironmentFingerprint {
    let runtime = probe.inspect_runtime();
    let toolchain = probe.toolchain_compute_tag();
    let platform = probe.platform();

    if !platform.is_supported() {
        warn!(
            %platform,
            "Auto-handling is currently for Linux x86_64 only; continuing anyway"
        );
    }

    let fingerprint = EnvironmentFingerprint::new(runtime, toolchain, platform);
    debug!(?fingerprint, "Environment fingerprint collected");
    fingerprint
}

/// Resolves the wheel matching the host.
pub struct Resolver<'a> {
    probe: &'a dyn EnvironmentProbePort,
    catalog: &'a dyn ReleaseCatalogPort,
    artifact: ArtifactSpec,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over the given ports.
    pub fn new(
        probe: &'a dyn EnvironmentProbePort,
        catalog: &'a dyn ReleaseCatalogPort,
        artifact: ArtifactSpec,
    ) -> Self {
        Self {
            probe,
            catalog,
            artifact,
        }
    }

    /// The artifact being resolved.
    pub const fn artifact(&self) -> &ArtifactSpec {
        &self.artifact
    }

    /// Fingerprint the host and resolve a wheel for it.
    pub async fn plan(&self, options: &ResolveOptions) -> Result<ResolutionPlan, ResolveError> {
        let fingerprint = collect_fingerprint(self.probe);
        self.plan_for(fingerprint, options).await
    }

    /// Resolve a wheel for an already collected fingerprint.
    ///
    /// Preconditions are checked before the catalog is contacted, so a
    /// missing framework or CUDA version never causes network traffic.
    pub async fn plan_for(
        &self,
        fingerprint: EnvironmentFingerprint,
        options: &ResolveOptions,
    ) -> Result<ResolutionPlan, ResolveError> {
        let Detected::Known(framework_version) = fingerprint.framework_version.clone() else {
            return Err(ResolveError::FrameworkMissing {
                fingerprint: Box::new(fingerprint),
            });
        };

        let Some(compute_tag) = fingerprint.resolved_compute_tag() else {
            return Err(ResolveError::ComputeTagUnresolved {
                fingerprint: Box::new(fingerprint),
            });
        };
        if fingerprint.framework_compute_tag.is_unknown() {
            info!(%compute_tag, "torch reports no CUDA runtime, using nvcc version");
        }

        let abi = AbiChoice::decide(options.abi, fingerprint.cxx11_abi);

        let (version, query) = match options.version.as_deref().map(normalize_version) {
            Some(version) => (version.to_string(), CatalogQuery::Tagged(version.to_string())),
            None => (self.artifact.default_version.clone(), CatalogQuery::Recent),
        };

        let candidates = generate_candidates(&CandidateRequest {
            distribution: &self.artifact.distribution,
            version: &version,
            compute_tag,
            framework_version: &framework_version,
            abi: abi.variant,
            interpreter_tag: fingerprint.interpreter_tag.as_ref(),
            platform: &fingerprint.platform,
        });
        debug!(?candidates, "Candidate patterns generated");

        info!(?query, "Fetching release assets");
        let assets = self.catalog.fetch(&query).await?;
        info!(count = assets.len(), "Release assets fetched");

        let selected = select_asset(&assets, &candidates).cloned();
        match &selected {
            Some(asset) => info!(asset = %asset.name, "Matching wheel found"),
            None => warn!(version = %version, "No matching wheel found"),
        }

        Ok(ResolutionPlan {
            fingerprint,
            compute_tag,
            abi,
            version,
            query,
            candidates,
            selected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_version() {
        assert_eq!(normalize_version("2.5.8"), "2.5.8");
        assert_eq!(normalize_version("v2.5.8"), "2.5.8");
        assert_eq!(normalize_version(" v2.6.3 "), "2.6.3");
        assert_eq!(normalize_version("vv1"), "v1");
    }

    #[test]
    fn test_abi_explicit_choice_wins() {
        let choice = AbiChoice::decide(Some(AbiVariant::Cxx11AbiTrue), Detected::Known(false));
        assert_eq!(choice.variant, AbiVariant::Cxx11AbiTrue);
        assert_eq!(choice.source, AbiSource::Explicit);
    }

    #[test]
    fn test_abi_policy_default_ignores_detection() {
        for detected in [Detected::Known(true), Detected::Known(false), Detected::Unknown] {
            let choice = AbiChoice::decide(None, detected);
            assert_eq!(choice.variant, AbiVariant::Cxx11AbiFalse);
            assert_eq!(choice.source, AbiSource::PolicyDefault);
        }
    }

    #[test]
    fn test_resolve_error_messages() {
        let err = ResolveError::Catalog(CatalogError::Network("timed out".to_string()));
        assert!(err.to_string().contains("timed out"));
        assert!(err.fingerprint().is_none());
    }
}
