#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod pip;
pub mod system;

pub use pip::PipInstaller;
pub use system::DefaultEnvironmentProbe;

// Silence unused dev-dependency warnings (used by integration tests)
#[cfg(test)]
use tempfile as _;
