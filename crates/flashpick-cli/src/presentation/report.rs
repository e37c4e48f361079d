//! Report rendering.

use std::io::{self, Write};

use flashpick_core::{
    AbiSource, AbiVariant, CandidatePattern, CatalogQuery, ComputeTag, Detected, DoctorReport,
    EnvironmentFingerprint, FrameworkVersion, InterpreterTag, PlatformTag, ResolutionPlan,
    ResolveError,
};
use serde::Serialize;

use crate::error::CliError;

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Flat view of a resolution plan, as printed by `plan` and `install`.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub python_tag: Detected<&'a InterpreterTag>,
    pub torch_mm: Detected<&'a FrameworkVersion>,
    pub torch_cuda: Detected<ComputeTag>,
    pub nvcc_cuda: Detected<ComputeTag>,
    pub chosen_cu_tag: ComputeTag,
    pub cxx11_abi_detected: Detected<bool>,
    pub abi: AbiVariant,
    pub abi_source: AbiSource,
    pub platform: &'a PlatformTag,
    pub version: &'a str,
    pub query: &'a CatalogQuery,
    pub candidates: &'a [CandidatePattern],
    pub found_asset: Option<&'a str>,
    pub download_url: Option<&'a str>,
}

impl<'a> PlanReport<'a> {
    /// Build the view from a plan.
    pub fn from_plan(plan: &'a ResolutionPlan) -> Self {
        let fingerprint = &plan.fingerprint;
        Self {
            python_tag: fingerprint.interpreter_tag.as_ref(),
            torch_mm: fingerprint.framework_version.as_ref(),
            torch_cuda: fingerprint.framework_compute_tag,
            nvcc_cuda: fingerprint.toolchain_compute_tag,
            chosen_cu_tag: plan.compute_tag,
            cxx11_abi_detected: fingerprint.cxx11_abi,
            abi: plan.abi.variant,
            abi_source: plan.abi.source,
            platform: &fingerprint.platform,
            version: &plan.version,
            query: &plan.query,
            candidates: &plan.candidates,
            found_asset: plan.selected.as_ref().map(|a| a.name.as_str()),
            download_url: plan.selected.as_ref().map(|a| a.download_url.as_str()),
        }
    }
}

/// What was detected when resolution stopped on a missing precondition.
#[derive(Debug, Serialize)]
pub struct PreconditionReport<'a> {
    pub error: String,
    pub fingerprint: &'a EnvironmentFingerprint,
}

impl<'a> PreconditionReport<'a> {
    /// Build the view for precondition failures; `None` for other errors.
    pub fn from_error(err: &'a ResolveError) -> Option<Self> {
        err.fingerprint().map(|fingerprint| Self {
            error: err.to_string(),
            fingerprint,
        })
    }
}

/// Pretty-print a value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Hint lines shown when nothing matched.
pub fn no_match_hints(plan: &ResolutionPlan) -> Vec<String> {
    let mut hints = vec![format!(
        "No matching wheel found. Try specifying --version or switching --abi {}.",
        plan.abi.variant.other()
    )];
    if !plan.fingerprint.platform.is_supported() {
        hints.push(format!(
            "Prebuilt wheels are published for linux_x86_64; this host is {}.",
            plan.fingerprint.platform
        ));
    }
    hints
}

/// Print no-match hints and the patterns that were tried on stderr.
pub fn print_no_match_hints(plan: &ResolutionPlan) {
    for hint in no_match_hints(plan) {
        eprintln!("{YELLOW}{hint}{RESET}");
    }
    eprintln!("{BOLD}Patterns tried:{RESET}");
    for candidate in &plan.candidates {
        eprintln!("  {candidate}");
    }
}

/// Print doctor advice on stderr.
pub fn print_advice(report: &DoctorReport) {
    if report.advice.is_empty() {
        eprintln!("{GREEN}✓ Environment looks ready for flashpick install{RESET}");
        return;
    }
    eprintln!("{BOLD}Advice:{RESET}");
    for line in &report.advice {
        eprintln!("  {YELLOW}!{RESET} {line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashpick_core::{AbiChoice, CatalogError, FrameworkReport, ReleaseAsset, RuntimeInspection};

    fn plan(selected: Option<ReleaseAsset>, platform: PlatformTag) -> ResolutionPlan {
        let fingerprint = EnvironmentFingerprint::new(
            RuntimeInspection {
                interpreter_tag: Detected::Known(InterpreterTag::cpython(3, 10)),
                framework: FrameworkReport {
                    version: Detected::Known(FrameworkVersion::from_reported("2.5.1")),
                    compute_tag: Detected::Known(ComputeTag::new(12, 1)),
                    cxx11_abi: Detected::Unknown,
                },
            },
            Detected::Unknown,
            platform,
        );
        ResolutionPlan {
            fingerprint,
            compute_tag: ComputeTag::new(12, 1),
            abi: AbiChoice {
                variant: AbiVariant::Cxx11AbiFalse,
                source: AbiSource::PolicyDefault,
            },
            version: "2.5.8".to_string(),
            query: CatalogQuery::Recent,
            candidates: Vec::new(),
            selected,
        }
    }

    #[test]
    fn test_plan_report_fields() {
        let plan = plan(
            Some(ReleaseAsset::new("a.whl", "https://example.invalid/a.whl")),
            PlatformTag::LinuxX86_64,
        );
        let json = serde_json::to_value(PlanReport::from_plan(&plan)).unwrap();

        assert_eq!(json["python_tag"], "cp310");
        assert_eq!(json["torch_mm"], "2.5");
        assert_eq!(json["torch_cuda"], "cu121");
        assert!(json["nvcc_cuda"].is_null());
        assert_eq!(json["chosen_cu_tag"], "cu121");
        assert_eq!(json["abi"], "FALSE");
        assert_eq!(json["abi_source"], "policy_default");
        assert_eq!(json["platform"], "linux_x86_64");
        assert_eq!(json["query"]["mode"], "recent");
        assert_eq!(json["found_asset"], "a.whl");
        assert_eq!(json["download_url"], "https://example.invalid/a.whl");
    }

    #[test]
    fn test_no_match_hints() {
        let hints = no_match_hints(&plan(None, PlatformTag::LinuxX86_64));
        assert_eq!(
            hints,
            ["No matching wheel found. Try specifying --version or switching --abi TRUE."]
        );

        let hints = no_match_hints(&plan(None, PlatformTag::MacOsx));
        assert_eq!(hints.len(), 2);
        assert!(hints[1].contains("macosx"));
    }

    #[test]
    fn test_precondition_report_carries_fingerprint() {
        let fingerprint = EnvironmentFingerprint::new(
            RuntimeInspection {
                interpreter_tag: Detected::Known(InterpreterTag::cpython(3, 11)),
                framework: FrameworkReport::absent(),
            },
            Detected::Known(ComputeTag::new(12, 4)),
            PlatformTag::LinuxX86_64,
        );
        let err = ResolveError::FrameworkMissing {
            fingerprint: Box::new(fingerprint),
        };

        let report = PreconditionReport::from_error(&err).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert!(json["error"].as_str().unwrap().contains("Could not import torch"));
        assert_eq!(json["fingerprint"]["platform"], "linux_x86_64");
        assert_eq!(json["fingerprint"]["toolchain_compute_tag"], "cu124");
    }

    #[test]
    fn test_registry_errors_have_no_precondition_report() {
        let err = ResolveError::Catalog(CatalogError::Network("down".to_string()));
        assert!(PreconditionReport::from_error(&err).is_none());
    }
}
