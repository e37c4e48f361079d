//! Python runtime and torch inspection.
//!
//! The configured interpreter runs a short script that prints one JSON line.
//! Interpretation of that line is a pure function so it can be tested
//! without Python.

use std::ffi::OsStr;

use flashpick_core::{
    ComputeTag, Detected, FrameworkReport, FrameworkVersion, InterpreterTag, RuntimeInspection,
};
use serde::Deserialize;
use tracing::debug;

use super::commands::capture;

/// Inspection script. Never raises; torch import failure is reported in JSON.
pub const INSPECTION_SCRIPT: &str = r#"
import json, sys
info = {"python": [sys.version_info[0], sys.version_info[1]]}
try:
    import torch
except Exception as exc:
    info["torch_error"] = repr(exc)
else:
    info["torch"] = str(torch.__version__)
    cuda = getattr(getattr(torch, "version", None), "cuda", None)
    info["torch_cuda"] = None if cuda is None else str(cuda)
    try:
        info["cxx11_abi"] = bool(torch._C._GLIBCXX_USE_CXX11_ABI)
    except Exception:
        info["cxx11_abi"] = None
print(json.dumps(info))
"#;

/// Raw script output.
#[derive(Debug, Default, Deserialize)]
pub struct RawRuntimeReport {
    #[serde(default)]
    pub python: Option<(u32, u32)>,
    #[serde(default)]
    pub torch: Option<String>,
    #[serde(default)]
    pub torch_cuda: Option<String>,
    #[serde(default)]
    pub cxx11_abi: Option<bool>,
    #[serde(default)]
    pub torch_error: Option<String>,
}

/// Parse the last non-empty stdout line as a report.
pub fn parse_report(stdout: &str) -> Option<RawRuntimeReport> {
    let line = stdout.lines().rev().find(|line| !line.trim().is_empty())?;
    serde_json::from_str(line.trim()).ok()
}

/// Turn a raw report into detector results.
pub fn interpret_report(raw: RawRuntimeReport) -> RuntimeInspection {
    let interpreter_tag =
        Detected::from(raw.python.map(|(major, minor)| InterpreterTag::cpython(major, minor)));

    let framework = match raw.torch {
        Some(version) => FrameworkReport {
            version: Detected::Known(FrameworkVersion::from_reported(&version)),
            compute_tag: Detected::from(raw.torch_cuda.as_deref().and_then(ComputeTag::parse_version)),
            cxx11_abi: Detected::from(raw.cxx11_abi),
        },
        None => {
            if let Some(err) = raw.torch_error {
                debug!(error = %err, "torch import failed");
            }
            FrameworkReport::absent()
        }
    };

    RuntimeInspection {
        interpreter_tag,
        framework,
    }
}

/// Run the inspection script with `python`.
pub fn inspect_runtime(python: &OsStr) -> RuntimeInspection {
    let output = match capture(python, &[OsStr::new("-c"), OsStr::new(INSPECTION_SCRIPT)]) {
        Ok(output) => output,
        Err(e) => {
            debug!(python = %python.to_string_lossy(), error = %e, "Python could not be started");
            return RuntimeInspection::default();
        }
    };

    if !output.status.success() {
        debug!(
            status = ?output.status.code(),
            stderr = %output.stderr.trim(),
            "Inspection script failed"
        );
        return RuntimeInspection::default();
    }

    let Some(raw) = parse_report(&output.stdout) else {
        debug!(stdout = %output.stdout.trim(), "Inspection output did not parse");
        return RuntimeInspection::default();
    };

    let inspection = interpret_report(raw);
    debug!(?inspection, "Python runtime inspected");
    inspection
}
