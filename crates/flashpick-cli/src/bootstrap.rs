//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together:
//! - Environment probe (via flashpick-runtime)
//! - Release catalog (via flashpick-github)
//! - pip installer (via flashpick-runtime)
//!
//! Handlers receive a `CliContext` and only see the core ports.

use std::time::Duration;

use flashpick_core::{
    ArtifactSpec, EnvironmentProbePort, PackageInstallerPort, ReleaseCatalogPort, Resolver,
};
use flashpick_github::{DefaultReleaseCatalog, GitHubCatalogConfig};
use flashpick_runtime::{DefaultEnvironmentProbe, PipInstaller};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Registry request timeout.
const REGISTRY_TIMEOUT: Duration = Duration::from_secs(20);

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Python interpreter.
    pub python: String,
    /// CUDA compiler.
    pub nvcc: String,
    /// GitHub API root.
    pub api_url: String,
    /// `owner/name` repository.
    pub repo: String,
    /// Optional GitHub token.
    pub github_token: Option<String>,
}

impl CliConfig {
    /// Take configuration from parsed global options.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            python: cli.python.clone(),
            nvcc: cli.nvcc.clone(),
            api_url: cli.api_url.clone(),
            repo: cli.repo.clone(),
            github_token: cli.github_token.clone().filter(|t| !t.trim().is_empty()),
        }
    }
}

/// Fully composed context for CLI commands.
///
/// An invalid catalog configuration is kept as an error and only reported
/// by commands that resolve a wheel.
pub struct CliContext {
    probe: Box<dyn EnvironmentProbePort>,
    catalog: Result<Box<dyn ReleaseCatalogPort>, String>,
    installer: Box<dyn PackageInstallerPort>,
    artifact: ArtifactSpec,
}

impl CliContext {
    /// Assemble a context from port implementations.
    pub fn new(
        probe: Box<dyn EnvironmentProbePort>,
        catalog: Box<dyn ReleaseCatalogPort>,
        installer: Box<dyn PackageInstallerPort>,
    ) -> Self {
        Self {
            probe,
            catalog: Ok(catalog),
            installer,
            artifact: ArtifactSpec::default(),
        }
    }

    /// Access the environment probe.
    pub fn probe(&self) -> &dyn EnvironmentProbePort {
        self.probe.as_ref()
    }

    /// Access the package installer.
    pub fn installer(&self) -> &dyn PackageInstallerPort {
        self.installer.as_ref()
    }

    /// The artifact being resolved.
    pub const fn artifact(&self) -> &ArtifactSpec {
        &self.artifact
    }

    /// A resolver over this context's ports.
    ///
    /// Fails with [`CliError::Config`] when the catalog could not be built.
    pub fn resolver(&self) -> Result<Resolver<'_>, CliError> {
        let catalog = self
            .catalog
            .as_ref()
            .map_err(|reason| CliError::Config(reason.clone()))?;
        Ok(Resolver::new(
            self.probe.as_ref(),
            catalog.as_ref(),
            self.artifact.clone(),
        ))
    }
}

/// Bootstrap the CLI application.
///
/// Never fails: catalog configuration errors surface from
/// [`CliContext::resolver`].
pub fn bootstrap(config: &CliConfig) -> CliContext {
    debug!(
        python = %config.python,
        nvcc = %config.nvcc,
        api_url = %config.api_url,
        repo = %config.repo,
        "Bootstrapping"
    );

    let catalog_config = GitHubCatalogConfig::new()
        .with_base_url(config.api_url.clone())
        .with_repo(config.repo.clone())
        .with_timeout(REGISTRY_TIMEOUT)
        .with_optional_token(config.github_token.clone());
    let catalog = DefaultReleaseCatalog::new(&catalog_config)
        .map(|catalog| Box::new(catalog) as Box<dyn ReleaseCatalogPort>)
        .map_err(|e| {
            debug!(error = %e, "Release catalog unavailable");
            e.to_string()
        });

    CliContext {
        probe: Box::new(DefaultEnvironmentProbe::new(&config.python, &config.nvcc)),
        catalog,
        installer: Box::new(PipInstaller::new(&config.python)),
        artifact: ArtifactSpec::default(),
    }
}
