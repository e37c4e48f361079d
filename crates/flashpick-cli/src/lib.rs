#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings (used by integration tests)
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use mockall as _;

// Used by main.rs only
use anyhow as _;
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{AbiFlag, Commands, ResolveArgs};
pub use error::CliError;
pub use parser::Cli;
