//! CLI error types and exit codes.
//!
//! Every user-facing failure maps to a distinct exit code; the message is
//! printed by `main` before exiting.

use flashpick_core::{CatalogError, InstallError, ResolveError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required environment fact is missing (torch, CUDA version).
    #[error("{0}")]
    Precondition(String),

    /// Resolution ran but no wheel matched.
    #[error("{0}")]
    NoMatch(String),

    /// The release registry could not be queried.
    #[error("{0}")]
    Registry(String),

    /// pip could not install the wheel.
    #[error("Installation failed: {0}")]
    Install(String),

    /// The report could not be written.
    #[error("Failed to write report: {0}")]
    Output(String),

    /// Invalid configuration (repository, API URL, ...).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to exit code.
    ///
    /// - 2: fatal precondition
    /// - 3: no matching wheel
    /// - 64-78: see sysexits.h
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Precondition(_) => 2,
            Self::NoMatch(_) => 3,
            Self::Install(_) => 71,  // EX_OSERR
            Self::Registry(_) | Self::Output(_) => 74, // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::FrameworkMissing { .. } | ResolveError::ComputeTagUnresolved { .. } => {
                Self::Precondition(err.to_string())
            }
            ResolveError::Catalog(catalog) => catalog.into(),
        }
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        Self::Registry(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<InstallError> for CliError {
    fn from(err: InstallError) -> Self {
        Self::Install(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            CliError::Precondition(String::new()),
            CliError::NoMatch(String::new()),
            CliError::Registry(String::new()),
            CliError::Install(String::new()),
            CliError::Config(String::new()),
        ];
        let codes: Vec<_> = errors.iter().map(CliError::exit_code).collect();
        assert_eq!(codes, [2, 3, 74, 71, 78]);
    }

    #[test]
    fn test_catalog_error_maps_to_io_code() {
        let err: CliError = ResolveError::Catalog(CatalogError::Http {
            status: 500,
            url: "https://api.github.com/x".to_string(),
        })
        .into();
        assert_eq!(err.exit_code(), 74);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_install_error_maps_to_oserr() {
        let err: CliError = InstallError::Failed {
            action: "install".to_string(),
            code: 1,
        }
        .into();
        assert_eq!(err.exit_code(), 71);
        assert_eq!(err.to_string(), "Installation failed: install failed with exit code 1");
    }
}
