//! Main CLI parser and top-level argument handling.
//!
//! Global options double as configuration: each one falls back to an
//! environment variable, and `.env` is loaded before parsing.

use clap::Parser;
use flashpick_github::{DEFAULT_API_URL, DEFAULT_REPO};
use flashpick_runtime::system::{DEFAULT_NVCC, DEFAULT_PYTHON};

use crate::commands::Commands;

/// Resolve and install the prebuilt flash-attn wheel for this machine.
#[derive(Debug, Parser)]
#[command(name = "flashpick")]
#[command(about = "Pick the prebuilt flash-attn wheel matching this Python, PyTorch and CUDA")]
#[command(version)]
pub struct Cli {
    /// Python interpreter to inspect and install into
    #[arg(long, global = true, env = "FLASHPICK_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: String,

    /// CUDA compiler used when torch reports no CUDA version
    #[arg(long, global = true, env = "FLASHPICK_NVCC", default_value = DEFAULT_NVCC)]
    pub nvcc: String,

    /// GitHub API root
    #[arg(long = "api-url", global = true, env = "FLASHPICK_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Repository publishing the wheels (owner/name)
    #[arg(long, global = true, env = "FLASHPICK_REPO", default_value = DEFAULT_REPO)]
    pub repo: String,

    /// GitHub token, raises API rate limits
    #[arg(long = "github-token", global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AbiFlag;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "flashpick",
            "--verbose",
            "--python",
            "/opt/venv/bin/python",
            "--repo",
            "acme/wheels",
            "doctor",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.python, "/opt/venv/bin/python");
        assert_eq!(cli.repo, "acme/wheels");
        assert!(matches!(cli.command, Commands::Doctor));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["flashpick", "plan", "--nvcc", "/usr/local/cuda/bin/nvcc"]);
        assert_eq!(cli.nvcc, "/usr/local/cuda/bin/nvcc");
    }

    #[test]
    fn test_install_args() {
        let cli = Cli::parse_from([
            "flashpick",
            "install",
            "--version",
            "2.6.3",
            "--abi",
            "TRUE",
            "--dry-run",
        ]);
        let Commands::Install(args) = cli.command else {
            panic!("expected install");
        };
        assert_eq!(args.version.as_deref(), Some("2.6.3"));
        assert_eq!(args.abi, Some(AbiFlag::True));
        assert!(args.dry_run);
    }

    #[test]
    fn test_abi_is_case_insensitive() {
        let cli = Cli::parse_from(["flashpick", "plan", "--abi", "false"]);
        let Commands::Plan(args) = cli.command else {
            panic!("expected plan");
        };
        assert_eq!(args.abi, Some(AbiFlag::False));
    }

    #[test]
    fn test_invalid_abi_is_rejected() {
        assert!(Cli::try_parse_from(["flashpick", "plan", "--abi", "maybe"]).is_err());
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["flashpick"]).is_err());
    }
}
