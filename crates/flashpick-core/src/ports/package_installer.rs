//! Package manager port.

use thiserror::Error;

/// Errors from the package manager.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The package manager could not be started.
    #[error("Failed to launch {program}: {reason}")]
    Launch {
        /// Program that was invoked.
        program: String,
        /// Underlying error message.
        reason: String,
    },

    /// The package manager ran and reported failure.
    #[error("{action} failed with exit code {code}")]
    Failed {
        /// What was being attempted (`install`, `uninstall`).
        action: String,
        /// Exit code, `-1` if terminated by a signal.
        code: i32,
    },
}

/// Port for the package manager that installs resolved wheels.
///
/// Uninstall is best-effort at the call site; implementations still report
/// its failure so callers can log it.
pub trait PackageInstallerPort: Send + Sync {
    /// Remove an installed package by name.
    fn uninstall(&self, package: &str) -> Result<(), InstallError>;

    /// Install directly from a download URL.
    fn install_from_url(&self, url: &str) -> Result<(), InstallError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = InstallError::Failed {
            action: "install".to_string(),
            code: 1,
        };
        assert_eq!(err.to_string(), "install failed with exit code 1");

        let err = InstallError::Launch {
            program: "python3".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert!(err.to_string().contains("python3"));
    }
}
