//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core pipeline expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `std::process` types in any signature
//! - Detector ports never return errors; absence is `Detected::Unknown`
//! - Only the catalog and the installer can fail

pub mod environment_probe;
pub mod package_installer;
pub mod release_catalog;

pub use environment_probe::EnvironmentProbePort;
pub use package_installer::{InstallError, PackageInstallerPort};
pub use release_catalog::{CatalogError, CatalogQuery, ReleaseCatalogPort};
