//! Environment diagnosis for the `doctor` command.

use serde::Serialize;

use crate::domain::{AbiVariant, ComputeTag, Detected, EnvironmentFingerprint};

/// Suggested torch install command, pointing at the CUDA 12.1 index.
const TORCH_INSTALL_HINT: &str = "pip install torch torchvision --index-url https://download.pytorch.org/whl/cu121";

/// Fingerprint plus human-readable advice.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorReport {
    pub fingerprint: EnvironmentFingerprint,
    /// Compute tag the resolver would use, if any.
    pub compute_tag: Option<ComputeTag>,
    pub advice: Vec<String>,
}

impl DoctorReport {
    /// Whether the environment looks ready for `install`.
    pub fn is_ready(&self) -> bool {
        self.fingerprint.has_framework()
            && self.compute_tag.is_some()
            && self.fingerprint.platform.is_supported()
    }
}

/// Inspect a fingerprint and collect advice. Never fails.
pub fn diagnose(fingerprint: EnvironmentFingerprint) -> DoctorReport {
    let mut advice = Vec::new();
    let compute_tag = fingerprint.resolved_compute_tag();

    if !fingerprint.has_framework() {
        advice.push(format!(
            "torch not found. Install a CUDA-enabled PyTorch, e.g. {TORCH_INSTALL_HINT}"
        ));
    }

    if !fingerprint.platform.is_supported() {
        advice.push(
            "Official wheels primarily target Linux x86_64. Other platforms may require \
             building from source or third-party wheels."
                .to_string(),
        );
    }

    if fingerprint.interpreter_tag.is_unknown() {
        advice.push(
            "Could not read the Python version. Check that the configured interpreter runs \
             (--python or FLASHPICK_PYTHON)."
                .to_string(),
        );
    }

    if fingerprint.has_framework() {
        match (fingerprint.framework_compute_tag, fingerprint.toolchain_compute_tag) {
            (Detected::Unknown, Detected::Unknown) => advice.push(
                "No CUDA version detected: torch appears to be CPU-only and nvcc was not found."
                    .to_string(),
            ),
            (Detected::Unknown, Detected::Known(nvcc)) => advice.push(format!(
                "torch reports no CUDA runtime; falling back to nvcc ({nvcc}). \
                 Install a CUDA-enabled torch build for a reliable match."
            )),
            (Detected::Known(torch), Detected::Known(nvcc)) if torch != nvcc => {
                advice.push(format!(
                    "torch was built against {torch} but nvcc reports {nvcc}; the torch build is used."
                ));
            }
            _ => {}
        }

        match fingerprint.cxx11_abi {
            Detected::Unknown => advice.push(
                "Could not read torch's C++11 ABI flag. If no wheel matches, try both --abi FALSE and --abi TRUE."
                    .to_string(),
            ),
            Detected::Known(flag) => {
                let native = AbiVariant::from_flag(flag);
                if native != AbiVariant::POLICY_DEFAULT {
                    advice.push(format!(
                        "torch was built with cxx11abi {native}; pass --abi {native} to plan/install."
                    ));
                }
            }
        }
    }

    DoctorReport {
        fingerprint,
        compute_tag,
        advice,
    }
}
