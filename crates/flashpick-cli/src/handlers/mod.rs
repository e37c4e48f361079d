//! Command handlers.
//!
//! Handlers take a `CliContext` and the parsed arguments, print their output
//! and return a `CliError` for anything that should change the exit code.

pub mod doctor;
pub mod install;
pub mod plan;
pub mod uninstall;
