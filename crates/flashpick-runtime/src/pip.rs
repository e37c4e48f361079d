//! pip-backed package installer.

use std::ffi::OsString;
use std::process::Command;

use flashpick_core::{InstallError, PackageInstallerPort};
use tracing::{debug, info};

/// Installs and removes packages with `python -m pip`.
///
/// pip's own output goes straight to the terminal.
#[derive(Debug, Clone)]
pub struct PipInstaller {
    python: OsString,
}

impl PipInstaller {
    /// Installer driving pip through `python`.
    pub fn new(python: impl Into<OsString>) -> Self {
        Self {
            python: python.into(),
        }
    }

    fn run_pip(&self, action: &str, args: &[&str]) -> Result<(), InstallError> {
        let program = self.python.to_string_lossy().into_owned();
        debug!(%program, ?args, "Running pip");

        let status = Command::new(&self.python)
            .args(["-m", "pip"])
            .args(args)
            .status()
            .map_err(|e| InstallError::Launch {
                program,
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(InstallError::Failed {
                action: action.to_string(),
                code: status.code().unwrap_or(-1),
            })
        }
    }
}

impl PackageInstallerPort for PipInstaller {
    fn uninstall(&self, package: &str) -> Result<(), InstallError> {
        info!(%package, "Uninstalling package");
        self.run_pip("uninstall", &["uninstall", package, "-y"])
    }

    fn install_from_url(&self, url: &str) -> Result<(), InstallError> {
        info!(%url, "Installing wheel");
        self.run_pip("install", &["install", "--no-cache-dir", url])
    }
}
