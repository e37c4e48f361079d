//! Environment probe port for fingerprinting the host.
//!
//! # Design Notes
//!
//! - Core owns the trait and types (pure)
//! - Runtime owns the implementation (active probing via `Command::new`)
//! - CLI injects the probe via main.rs

use crate::domain::{ComputeTag, Detected, PlatformTag, RuntimeInspection};

/// Port for the three independent environment detectors.
///
/// None of these methods fail: anything that cannot be determined comes back
/// as [`Detected::Unknown`].
pub trait EnvironmentProbePort: Send + Sync {
    /// Inspect the Python runtime and the installed framework, if any.
    fn inspect_runtime(&self) -> RuntimeInspection;

    /// Ask the local CUDA compiler for its version.
    fn toolchain_compute_tag(&self) -> Detected<ComputeTag>;

    /// Platform tag of the host.
    fn platform(&self) -> PlatformTag;
}
