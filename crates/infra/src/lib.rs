//! # Packlist Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The reqwest-based ERP submission client
//! - The JSON-file session store for edit-state persistence
//! - The CSV spreadsheet adapter (export and bulk-PWNID re-import)
//! - The configuration loader
//! - Error conversions from external crates into the domain error
//!
//! ## Architecture
//! - Implements traits defined in `packlist-core`
//! - Depends on `packlist-domain` and `packlist-core`
//! - Contains all "impure" code (network, filesystem)

pub mod config;
pub mod errors;
pub mod erp;
pub mod spreadsheet;
pub mod storage;

// Re-export commonly used items
pub use erp::{ErpClientConfig, ErpRestClient};
pub use errors::InfraError;
pub use storage::FileSessionStore;
