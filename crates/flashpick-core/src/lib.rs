#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod artifact;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use artifact::{
    ArtifactSpec, DEFAULT_ARTIFACT_VERSION, DEFAULT_DISTRIBUTION, DEFAULT_PACKAGE,
};
pub use domain::{
    AbiVariant, CandidatePattern, CandidateRequest, ComputeTag, Detected, EnvironmentFingerprint,
    FrameworkReport, FrameworkVersion, InterpreterTag, PlatformTag, Relaxation, ReleaseAsset,
    RuntimeInspection, generate_candidates, resolve_compute_tag, select_asset,
};
pub use ports::{
    CatalogError, CatalogQuery, EnvironmentProbePort, InstallError, PackageInstallerPort,
    ReleaseCatalogPort,
};
pub use services::{
    AbiChoice, AbiSource, DoctorReport, ResolutionPlan, ResolveError, ResolveOptions, Resolver,
    collect_fingerprint, diagnose,
};
