#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultReleaseCatalog is used through ReleaseCatalogPort, not its generic form
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultReleaseCatalog;

// Configuration
pub use config::{DEFAULT_API_URL, DEFAULT_REPO, GitHubCatalogConfig};

// Errors (construction only; queries report CatalogError)
pub use error::GitHubError;
