//! Platform tags as they appear in wheel filenames.

use std::fmt;

use serde::{Serialize, Serializer};

/// Platform tag for the host machine.
///
/// Only [`PlatformTag::LinuxX86_64`] is fully supported for automatic
/// resolution. The other variants are still returned so the pipeline can run
/// (and simply not find a match) instead of failing up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlatformTag {
    /// 64-bit Linux on x86-64.
    LinuxX86_64,
    /// 64-bit Linux on ARM.
    LinuxAarch64,
    /// Windows.
    WinAmd64,
    /// macOS.
    MacOsx,
    /// Unrecognized OS, carrying its raw name.
    Other(String),
}

impl PlatformTag {
    /// Map an OS name and CPU architecture to a platform tag.
    ///
    /// Names follow `std::env::consts::{OS, ARCH}`.
    pub fn from_os_arch(os: &str, arch: &str) -> Self {
        match (os, arch) {
            ("linux", "x86_64") => Self::LinuxX86_64,
            ("linux", "aarch64") => Self::LinuxAarch64,
            ("windows", _) => Self::WinAmd64,
            ("macos", _) => Self::MacOsx,
            (other, _) => Self::Other(other.to_string()),
        }
    }

    /// Whether prebuilt wheels are published for this platform.
    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::LinuxX86_64)
    }

    /// Tag string used in wheel filenames.
    pub fn as_str(&self) -> &str {
        match self {
            Self::LinuxX86_64 => "linux_x86_64",
            Self::LinuxAarch64 => "linux_aarch64",
            Self::WinAmd64 => "win_amd64",
            Self::MacOsx => "macosx",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PlatformTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
