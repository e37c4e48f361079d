//! CUDA toolchain probe (`nvcc -V`).

use std::ffi::OsStr;
use std::sync::LazyLock;

use flashpick_core::{ComputeTag, Detected};
use regex::Regex;
use tracing::debug;

use super::commands::capture;

/// Release marker in `nvcc -V` output, e.g. `release 12.1, V12.1.105`.
static RELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"release\s+(\d+)\.(\d+)").expect("valid regex"));

/// What probing the toolchain produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainProbeOutcome {
    /// The compiler could not be started.
    NotFound,
    /// It ran but no release version was found in its output.
    Unparsable,
    /// A release version was found.
    Found(ComputeTag),
}

impl ToolchainProbeOutcome {
    /// Collapse to the detector result.
    pub const fn detected(&self) -> Detected<ComputeTag> {
        match self {
            Self::Found(tag) => Detected::Known(*tag),
            Self::NotFound | Self::Unparsable => Detected::Unknown,
        }
    }
}

/// Extract the CUDA release from compiler output.
pub fn parse_release(text: &str) -> Option<ComputeTag> {
    let caps = RELEASE.captures(text)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    Some(ComputeTag::new(major, minor))
}

/// Run `<nvcc> -V` and parse its output regardless of exit status.
pub fn probe_toolchain(nvcc: &OsStr) -> ToolchainProbeOutcome {
    let output = match capture(nvcc, &["-V"]) {
        Ok(output) => output,
        Err(e) => {
            debug!(nvcc = %nvcc.to_string_lossy(), error = %e, "nvcc not found");
            return ToolchainProbeOutcome::NotFound;
        }
    };

    if !output.status.success() {
        debug!(status = ?output.status.code(), "nvcc exited unsuccessfully, parsing output anyway");
    }

    match parse_release(&output.combined()) {
        Some(tag) => {
            debug!(%tag, "nvcc reports CUDA release");
            ToolchainProbeOutcome::Found(tag)
        }
        None => {
            debug!("nvcc output has no parsable release version");
            ToolchainProbeOutcome::Unparsable
        }
    }
}
