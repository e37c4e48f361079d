//! Candidate wheel filename generation.
//!
//! The registry names wheels
//! `{dist}-{version}+{cuda}torch{torch}{abi}-{py}-{py}-{platform}.whl`, but
//! not every release follows that exactly. The generator produces an ordered
//! list of glob patterns, most specific first; the selector tries them in
//! that order and stops at the first hit.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::warn;

use super::{ComputeTag, Detected, FrameworkVersion, InterpreterTag, PlatformTag};

/// Wildcard used in place of the interpreter tag when it could not be read.
const ANY_CPYTHON: &str = "cp*";

/// C++11 ABI variant of a published wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AbiVariant {
    /// Built with `_GLIBCXX_USE_CXX11_ABI=0` (pip-distributed torch).
    #[serde(rename = "FALSE")]
    Cxx11AbiFalse,
    /// Built with `_GLIBCXX_USE_CXX11_ABI=1`.
    #[serde(rename = "TRUE")]
    Cxx11AbiTrue,
}

impl AbiVariant {
    /// Variant used when the user does not choose one.
    pub const POLICY_DEFAULT: Self = Self::Cxx11AbiFalse;

    /// Variant matching a detected torch build flag.
    pub const fn from_flag(cxx11_abi: bool) -> Self {
        if cxx11_abi {
            Self::Cxx11AbiTrue
        } else {
            Self::Cxx11AbiFalse
        }
    }

    /// Filename token, always present in the wheel name.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Cxx11AbiFalse => "cxx11abiFALSE",
            Self::Cxx11AbiTrue => "cxx11abiTRUE",
        }
    }

    /// The opposite variant, for "try the other one" hints.
    pub const fn other(self) -> Self {
        match self {
            Self::Cxx11AbiFalse => Self::Cxx11AbiTrue,
            Self::Cxx11AbiTrue => Self::Cxx11AbiFalse,
        }
    }

    /// Short flag value (`FALSE` / `TRUE`).
    pub const fn flag_value(self) -> &'static str {
        match self {
            Self::Cxx11AbiFalse => "FALSE",
            Self::Cxx11AbiTrue => "TRUE",
        }
    }
}

impl fmt::Display for AbiVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag_value())
    }
}

impl FromStr for AbiVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("false") {
            Ok(Self::Cxx11AbiFalse)
        } else if s.eq_ignore_ascii_case("true") {
            Ok(Self::Cxx11AbiTrue)
        } else {
            Err(format!("invalid ABI variant '{s}', expected FALSE or TRUE"))
        }
    }
}

/// Which naming relaxation a pattern represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relaxation {
    /// Fully specific filename.
    Exact,
    /// CUDA tag reduced to its major version (`cu12`).
    ComputeMajorOnly,
    /// Wildcard suffix on the interpreter ABI tag (`cp313-cp313*`).
    InterpreterWildcard,
}

/// One glob pattern for a wheel filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePattern {
    pattern: String,
    relaxation: Relaxation,
}

impl CandidatePattern {
    /// Wrap a raw glob pattern.
    pub fn new(pattern: impl Into<String>, relaxation: Relaxation) -> Self {
        Self {
            pattern: pattern.into(),
            relaxation,
        }
    }

    /// The glob pattern text.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The relaxation that produced this pattern.
    pub const fn relaxation(&self) -> Relaxation {
        self.relaxation
    }
}

impl fmt::Display for CandidatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl Serialize for CandidatePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.pattern)
    }
}

/// Inputs to the candidate generator.
#[derive(Debug, Clone)]
pub struct CandidateRequest<'a> {
    /// Wheel distribution name (`flash_attn`).
    pub distribution: &'a str,
    /// Artifact version to look for.
    pub version: &'a str,
    /// Resolved CUDA tag.
    pub compute_tag: ComputeTag,
    /// Framework version (`2.5`).
    pub framework_version: &'a FrameworkVersion,
    /// ABI variant to request.
    pub abi: AbiVariant,
    /// Interpreter tag, possibly unknown.
    pub interpreter_tag: Detected<&'a InterpreterTag>,
    /// Host platform tag.
    pub platform: &'a PlatformTag,
}

/// Generate candidate patterns in strict preference order.
///
/// The returned list always holds exactly three patterns:
/// exact, compute-major-only, interpreter-wildcard.
pub fn generate_candidates(request: &CandidateRequest<'_>) -> Vec<CandidatePattern> {
    let interpreter = match request.interpreter_tag {
        Detected::Known(tag) => tag.as_str(),
        Detected::Unknown => {
            warn!("Interpreter tag unknown, matching any CPython ABI ({ANY_CPYTHON})");
            ANY_CPYTHON
        }
    };

    let name = |cuda: &str, py_pair: &str| {
        format!(
            "{dist}-{version}+{cuda}torch{torch}{abi}-{py_pair}-{platform}.whl",
            dist = request.distribution,
            version = request.version,
            torch = request.framework_version,
            abi = request.abi.token(),
            platform = request.platform,
        )
    };

    let exact_cuda = request.compute_tag.to_string();
    let exact_pair = format!("{interpreter}-{interpreter}");

    vec![
        CandidatePattern {
            pattern: name(&exact_cuda, &exact_pair),
            relaxation: Relaxation::Exact,
        },
        CandidatePattern {
            pattern: name(&request.compute_tag.major_only(), &exact_pair),
            relaxation: Relaxation::ComputeMajorOnly,
        },
        CandidatePattern {
            pattern: name(&exact_cuda, &format!("{interpreter}-{interpreter}*")),
            relaxation: Relaxation::InterpreterWildcard,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request<'a>(
        framework: &'a FrameworkVersion,
        interpreter: Detected<&'a InterpreterTag>,
        platform: &'a PlatformTag,
        abi: AbiVariant,
    ) -> CandidateRequest<'a> {
        CandidateRequest {
            distribution: "flash_attn",
            version: "2.5.8",
            compute_tag: ComputeTag::new(12, 1),
            framework_version: framework,
            abi,
            interpreter_tag: interpreter,
            platform,
        }
    }

    #[test]
    fn test_exact_pattern_matches_registry_naming() {
        let framework = FrameworkVersion::from_reported("2.5.1+cu121");
        let interpreter = InterpreterTag::cpython(3, 10);
        let platform = PlatformTag::LinuxX86_64;

        let patterns = generate_candidates(&request(
            &framework,
            Detected::Known(&interpreter),
            &platform,
            AbiVariant::Cxx11AbiFalse,
        ));

        assert_eq!(
            patterns[0].as_str(),
            "flash_attn-2.5.8+cu121torch2.5cxx11abiFALSE-cp310-cp310-linux_x86_64.whl"
        );
    }

    #[test]
    fn test_preference_order() {
        let framework = FrameworkVersion::from_reported("2.3.0");
        let interpreter = InterpreterTag::cpython(3, 11);
        let platform = PlatformTag::LinuxX86_64;

        let patterns = generate_candidates(&request(
            &framework,
            Detected::Known(&interpreter),
            &platform,
            AbiVariant::Cxx11AbiTrue,
        ));

        let kinds: Vec<_> = patterns.iter().map(CandidatePattern::relaxation).collect();
        assert_eq!(
            kinds,
            [
                Relaxation::Exact,
                Relaxation::ComputeMajorOnly,
                Relaxation::InterpreterWildcard
            ]
        );
        assert_eq!(
            patterns[1].as_str(),
            "flash_attn-2.5.8+cu12torch2.3cxx11abiTRUE-cp311-cp311-linux_x86_64.whl"
        );
        assert_eq!(
            patterns[2].as_str(),
            "flash_attn-2.5.8+cu121torch2.3cxx11abiTRUE-cp311-cp311*-linux_x86_64.whl"
        );
    }

    #[test]
    fn test_unknown_interpreter_uses_wildcard() {
        let framework = FrameworkVersion::from_reported("2.2.2");
        let platform = PlatformTag::LinuxX86_64;

        let patterns = generate_candidates(&request(
            &framework,
            Detected::Unknown,
            &platform,
            AbiVariant::Cxx11AbiFalse,
        ));

        assert_eq!(patterns.len(), 3);
        assert!(patterns[0].as_str().contains("-cp*-cp*-linux_x86_64.whl"));
    }

    #[test]
    fn test_abi_variant_parsing() {
        assert_eq!("FALSE".parse::<AbiVariant>(), Ok(AbiVariant::Cxx11AbiFalse));
        assert_eq!("true".parse::<AbiVariant>(), Ok(AbiVariant::Cxx11AbiTrue));
        assert!("maybe".parse::<AbiVariant>().is_err());
        assert_eq!(AbiVariant::POLICY_DEFAULT.token(), "cxx11abiFALSE");
        assert_eq!(AbiVariant::Cxx11AbiFalse.other(), AbiVariant::Cxx11AbiTrue);
        assert_eq!(AbiVariant::from_flag(true), AbiVariant::Cxx11AbiTrue);
    }
}
