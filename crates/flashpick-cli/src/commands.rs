//! Subcommands and their arguments.

use clap::{Args, Subcommand, ValueEnum};
use flashpick_core::{AbiVariant, ResolveOptions};

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve the matching wheel and print a JSON report
    Plan(ResolveArgs),

    /// Resolve the matching wheel and install it with pip
    Install(ResolveArgs),

    /// Uninstall flash-attn (best effort)
    Uninstall,

    /// Show the detected environment and advice
    Doctor,
}

/// Options shared by `plan` and `install`.
#[derive(Debug, Clone, Default, Args)]
pub struct ResolveArgs {
    /// flash-attn version to look for (default: 2.5.8, searching recent releases)
    #[arg(long)]
    pub version: Option<String>,

    /// C++11 ABI variant of the wheel (default: FALSE)
    #[arg(long, value_enum, ignore_case = true)]
    pub abi: Option<AbiFlag>,

    /// Print the resolved URL instead of installing (plan never installs)
    #[arg(long)]
    pub dry_run: bool,
}

impl ResolveArgs {
    /// Convert to resolver options.
    pub fn to_options(&self) -> ResolveOptions {
        ResolveOptions {
            version: self.version.clone(),
            abi: self.abi.map(AbiVariant::from),
        }
    }
}

/// `--abi` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AbiFlag {
    #[value(name = "FALSE")]
    False,
    #[value(name = "TRUE")]
    True,
}

impl From<AbiFlag> for AbiVariant {
    fn from(flag: AbiFlag) -> Self {
        match flag {
            AbiFlag::False => Self::Cxx11AbiFalse,
            AbiFlag::True => Self::Cxx11AbiTrue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_options() {
        let args = ResolveArgs {
            version: Some("2.5.8".to_string()),
            abi: Some(AbiFlag::True),
            dry_run: false,
        };
        let options = args.to_options();
        assert_eq!(options.version.as_deref(), Some("2.5.8"));
        assert_eq!(options.abi, Some(AbiVariant::Cxx11AbiTrue));

        let defaults = ResolveArgs::default().to_options();
        assert!(defaults.version.is_none());
        assert!(defaults.abi.is_none());
    }
}
