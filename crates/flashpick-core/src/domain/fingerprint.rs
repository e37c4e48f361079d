//! Environment fingerprint: everything the resolver knows about the host.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use super::{ComputeTag, Detected, PlatformTag};

/// Python ABI identifier, e.g. `cp310`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterpreterTag(String);

impl InterpreterTag {
    /// Tag for a `CPython` `major.minor` runtime.
    pub fn cpython(major: u32, minor: u32) -> Self {
        Self(format!("cp{major}{minor}"))
    }

    /// The raw tag string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterpreterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for InterpreterTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Framework (torch) version as used in wheel names, normally `major.minor`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameworkVersion(String);

impl FrameworkVersion {
    /// Normalize a self-reported version string.
    ///
    /// The local build suffix (`+cu121`) is stripped and the remainder reduced
    /// to `major.minor`. When that fails the stripped string is kept verbatim.
    pub fn from_reported(raw: &str) -> Self {
        let public = raw.split('+').next().unwrap_or(raw).trim();
        match parse_major_minor(public) {
            Some((major, minor)) => Self(format!("{major}.{minor}")),
            None => Self(public.to_string()),
        }
    }

    /// The normalized version string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrameworkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for FrameworkVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Public PEP 440 version: optional `v` and epoch, a dotted release, then
/// optional pre, post and dev segments. The local `+...` part is already gone.
static PUBLIC_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^v?(?:\d+!)?(?P<release>\d+(?:\.\d+)*)(?:[-_.]?(?:a|b|c|rc|alpha|beta|pre|preview)[-_.]?\d*)?(?:-\d+|[-_.]?(?:post|rev|r)[-_.]?\d*)?(?:[-_.]?dev[-_.]?\d*)?$",
    )
    .expect("valid regex")
});

/// Parse `major.minor` from a PEP 440 version string.
///
/// `2.1.0a0` parses as `(2, 1)` and `v2.1` as `(2, 1)`. A missing minor
/// component reads as `0`. Anything that is not a valid version is `None`.
fn parse_major_minor(version: &str) -> Option<(u32, u32)> {
    let caps = PUBLIC_VERSION.captures(version.trim())?;
    let mut release = caps.name("release")?.as_str().split('.');
    let major = release.next()?.parse().ok()?;
    let minor = match release.next() {
        Some(part) => part.parse().ok()?,
        None => 0,
    };
    Some((major, minor))
}

/// What the framework reports about itself.
///
/// Every field is independently optional. An entirely unknown report means
/// the framework could not be imported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameworkReport {
    /// Normalized framework version.
    pub version: Detected<FrameworkVersion>,
    /// CUDA tag the framework was built against.
    pub compute_tag: Detected<ComputeTag>,
    /// C++11 ABI build flag.
    pub cxx11_abi: Detected<bool>,
}

impl FrameworkReport {
    /// Report for a framework that is not installed.
    pub const fn absent() -> Self {
        Self {
            version: Detected::Unknown,
            compute_tag: Detected::Unknown,
            cxx11_abi: Detected::Unknown,
        }
    }
}

/// Result of inspecting the language runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeInspection {
    /// Interpreter ABI tag.
    pub interpreter_tag: Detected<InterpreterTag>,
    /// Framework self-report.
    pub framework: FrameworkReport,
}

/// Immutable snapshot of the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentFingerprint {
    pub interpreter_tag: Detected<InterpreterTag>,
    pub framework_version: Detected<FrameworkVersion>,
    pub framework_compute_tag: Detected<ComputeTag>,
    pub toolchain_compute_tag: Detected<ComputeTag>,
    pub cxx11_abi: Detected<bool>,
    pub platform: PlatformTag,
}

impl EnvironmentFingerprint {
    /// Assemble a fingerprint from independent detector outputs.
    pub fn new(
        runtime: RuntimeInspection,
        toolchain_compute_tag: Detected<ComputeTag>,
        platform: PlatformTag,
    ) -> Self {
        Self {
            interpreter_tag: runtime.interpreter_tag,
            framework_version: runtime.framework.version,
            framework_compute_tag: runtime.framework.compute_tag,
            toolchain_compute_tag,
            cxx11_abi: runtime.framework.cxx11_abi,
            platform,
        }
    }

    /// Whether the framework is installed at all.
    pub const fn has_framework(&self) -> bool {
        self.framework_version.is_known()
    }

    /// Resolved compute tag, framework first.
    pub fn resolved_compute_tag(&self) -> Option<ComputeTag> {
        super::resolve_compute_tag(self.framework_compute_tag, self.toolchain_compute_tag)
    }
}
