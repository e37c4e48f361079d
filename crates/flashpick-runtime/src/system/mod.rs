//! Environment probe implementation for flashpick-runtime.
//!
//! `DefaultEnvironmentProbe` implements `EnvironmentProbePort` from
//! flashpick-core by running the configured interpreter and CUDA compiler.

mod commands;
mod nvcc;
mod python;

use std::ffi::OsString;

use flashpick_core::{ComputeTag, Detected, EnvironmentProbePort, PlatformTag, RuntimeInspection};
use tracing::debug;

pub use commands::{CapturedOutput, capture};
pub use nvcc::{ToolchainProbeOutcome, parse_release, probe_toolchain};
pub use python::{
    INSPECTION_SCRIPT, RawRuntimeReport, inspect_runtime, interpret_report, parse_report,
};

/// Interpreter used when none is configured.
#[cfg(windows)]
pub const DEFAULT_PYTHON: &str = "python";
/// Interpreter used when none is configured.
#[cfg(not(windows))]
pub const DEFAULT_PYTHON: &str = "python3";

/// CUDA compiler used when none is configured.
pub const DEFAULT_NVCC: &str = "nvcc";

/// Platform tag of the running host.
pub fn detect_platform() -> PlatformTag {
    PlatformTag::from_os_arch(std::env::consts::OS, std::env::consts::ARCH)
}

/// Default implementation of `EnvironmentProbePort`.
///
/// Construct it in the CLI composition root and pass it to the resolver.
///
/// # Example
///
/// ```no_run
/// use flashpick_core::EnvironmentProbePort;
/// use flashpick_runtime::DefaultEnvironmentProbe;
///
/// let probe = DefaultEnvironmentProbe::new("python3", "nvcc");
/// let runtime = probe.inspect_runtime();
/// ```
#[derive(Debug, Clone)]
pub struct DefaultEnvironmentProbe {
    python: OsString,
    nvcc: OsString,
}

impl DefaultEnvironmentProbe {
    /// Create a probe for the given interpreter and compiler.
    pub fn new(python: impl Into<OsString>, nvcc: impl Into<OsString>) -> Self {
        Self {
            python: python.into(),
            nvcc: nvcc.into(),
        }
    }
}

impl Default for DefaultEnvironmentProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON, DEFAULT_NVCC)
    }
}

impl EnvironmentProbePort for DefaultEnvironmentProbe {
    fn inspect_runtime(&self) -> RuntimeInspection {
        inspect_runtime(&self.python)
    }

    fn toolchain_compute_tag(&self) -> Detected<ComputeTag> {
        let outcome = probe_toolchain(&self.nvcc);
        debug!(?outcome, "Toolchain probe finished");
        outcome.detected()
    }

    fn platform(&self) -> PlatformTag {
        let platform = detect_platform();
        debug!(%platform, "Platform detected");
        platform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_platform_is_stable() {
        assert_eq!(detect_platform(), detect_platform());
    }

    #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
    #[test]
    fn test_linux_x86_64_host_is_supported() {
        assert!(detect_platform().is_supported());
    }

    #[test]
    fn test_probe_with_missing_tools() {
        let probe = DefaultEnvironmentProbe::new("flashpick-no-python", "flashpick-no-nvcc");
        assert_eq!(probe.inspect_runtime(), RuntimeInspection::default());
        assert_eq!(probe.toolchain_compute_tag(), Detected::Unknown);
    }
}
