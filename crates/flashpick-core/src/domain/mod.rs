//! Domain types and pure pipeline steps.
//!
//! Nothing in here performs I/O. Detectors live behind ports; this module
//! only combines what they report.

mod asset;
mod candidates;
mod compute;
mod detected;
mod fingerprint;
mod platform;

pub use asset::{ReleaseAsset, select_asset};
pub use candidates::{
    AbiVariant, CandidatePattern, CandidateRequest, Relaxation, generate_candidates,
};
pub use compute::{ComputeTag, resolve_compute_tag};
pub use detected::Detected;
pub use fingerprint::{
    EnvironmentFingerprint, FrameworkReport, FrameworkVersion, InterpreterTag, RuntimeInspection,
};
pub use platform::PlatformTag;
