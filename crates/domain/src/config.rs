//! Application configuration structures
//!
//! Loading lives in the infra crate; these are the plain data shapes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{AUTOSAVE_DEBOUNCE_MS, DEFAULT_ERP_TIMEOUT_SECS};

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub erp: ErpConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub reconcile: ReconcileConfig,
}

/// ERP submission endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErpConfig {
    /// Full URL of the packing list submission endpoint.
    pub endpoint_url: String,
    #[serde(default = "default_erp_timeout")]
    pub timeout_secs: u64,
}

/// Durable session storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per session key.
    pub dir: PathBuf,
}

/// Reconciliation behaviour settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    #[serde(default = "default_debounce_ms")]
    pub autosave_debounce_ms: u64,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self { autosave_debounce_ms: AUTOSAVE_DEBOUNCE_MS }
    }
}

const fn default_erp_timeout() -> u64 {
    DEFAULT_ERP_TIMEOUT_SECS
}

const fn default_debounce_ms() -> u64 {
    AUTOSAVE_DEBOUNCE_MS
}
