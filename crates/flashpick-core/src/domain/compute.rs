//! CUDA compute-library tags and the precedence rule that combines them.

use std::fmt;

use serde::{Serialize, Serializer};

use super::Detected;

/// Prefix used by the release registry for CUDA builds.
const CUDA_MARKER: &str = "cu";

/// CUDA toolkit version a wheel was compiled against, e.g. `cu121`.
///
/// Both the framework detector and the toolchain probe build tags through
/// this type, so the two sources render identically. The minor component is
/// absent only when the framework reported a bare major version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComputeTag {
    major: u32,
    minor: Option<u32>,
}

impl ComputeTag {
    /// Create a tag from a CUDA `major.minor` pair.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor: Some(minor),
        }
    }

    /// Create a tag from a bare CUDA major version (`cu12`).
    pub const fn from_major(major: u32) -> Self {
        Self { major, minor: None }
    }

    /// Parse a CUDA version as torch reports it: `12.1`, `11.8.89` or `12`.
    ///
    /// Components past the minor are ignored. Anything non-numeric is `None`.
    pub fn parse_version(version: &str) -> Option<Self> {
        let mut parts = version.trim().split('.');
        let major = parts.next()?.trim().parse().ok()?;
        match parts.next() {
            None => Some(Self::from_major(major)),
            Some(minor) => Some(Self::new(major, minor.trim().parse().ok()?)),
        }
    }

    /// CUDA major version.
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// CUDA minor version, if one was reported.
    pub const fn minor(&self) -> Option<u32> {
        self.minor
    }

    /// Tag with the minor component dropped, e.g. `cu12` for `cu121`.
    pub fn major_only(&self) -> String {
        format!("{CUDA_MARKER}{}", self.major)
    }
}

impl fmt::Display for ComputeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.minor {
            Some(minor) => write!(f, "{CUDA_MARKER}{}{minor}", self.major),
            None => write!(f, "{CUDA_MARKER}{}", self.major),
        }
    }
}

impl Serialize for ComputeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Combine framework-reported and toolchain-probed tags.
///
/// The framework's own report always wins and the toolchain is only a
/// fallback. `None` means the compute tag is unresolved.
pub fn resolve_compute_tag(
    framework: Detected<ComputeTag>,
    toolchain: Detected<ComputeTag>,
) -> Option<ComputeTag> {
    framework.or(toolchain).known()
}
