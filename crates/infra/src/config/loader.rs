//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes a few well-known paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `PACKLIST_ERP_ENDPOINT`: ERP submission endpoint URL (required)
//! - `PACKLIST_ERP_TIMEOUT_SECS`: ERP request timeout in seconds
//! - `PACKLIST_STORAGE_DIR`: Session storage directory (required)
//! - `PACKLIST_AUTOSAVE_DEBOUNCE_MS`: Autosave quiet period in milliseconds

use std::path::{Path, PathBuf};

use packlist_domain::constants::{AUTOSAVE_DEBOUNCE_MS, DEFAULT_ERP_TIMEOUT_SECS};
use packlist_domain::{
    Config, ErpConfig, PacklistError, ReconcileConfig, Result, StorageConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `PacklistError::Config` if configuration cannot be loaded from
/// either source.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `PacklistError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<Config> {
    let endpoint_url = env_var("PACKLIST_ERP_ENDPOINT")?;
    let timeout_secs = env_u64("PACKLIST_ERP_TIMEOUT_SECS", DEFAULT_ERP_TIMEOUT_SECS)?;
    let storage_dir = env_var("PACKLIST_STORAGE_DIR")?;
    let autosave_debounce_ms =
        env_u64("PACKLIST_AUTOSAVE_DEBOUNCE_MS", AUTOSAVE_DEBOUNCE_MS)?;

    Ok(Config {
        erp: ErpConfig { endpoint_url, timeout_secs },
        storage: StorageConfig { dir: PathBuf::from(storage_dir) },
        reconcile: ReconcileConfig { autosave_debounce_ms },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes `config.{json,toml}` and
/// `packlist.{json,toml}` in the current directory and its parent. Format is
/// detected by extension.
///
/// # Errors
/// Returns `PacklistError::Config` if no file is found or parsing fails.
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => probe_config_paths().ok_or_else(|| {
            PacklistError::Config("no configuration file found".into())
        })?,
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        PacklistError::Config(format!("failed to read {}: {e}", path.display()))
    })?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(|e| {
            PacklistError::Config(format!("invalid JSON in {}: {e}", path.display()))
        })?,
        Some("toml") => toml::from_str(&contents).map_err(|e| {
            PacklistError::Config(format!("invalid TOML in {}: {e}", path.display()))
        })?,
        other => {
            return Err(PacklistError::Config(format!(
                "unsupported config extension: {other:?}"
            )))
        }
    };

    tracing::info!(path = %path.display(), "configuration loaded from file");
    Ok(config)
}

fn probe_config_paths() -> Option<PathBuf> {
    let names = ["config.json", "config.toml", "packlist.json", "packlist.toml"];
    let bases = [PathBuf::from("."), PathBuf::from("..")];

    for base in &bases {
        for name in &names {
            let candidate = base.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| PacklistError::Config(format!("missing environment variable {name}")))
}

fn env_u64(name: &str, default: u64) -> Result<u64> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|e| PacklistError::Config(format!("invalid value for {name}: {e}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "erp": {{ "endpoint_url": "https://erp.example.com/packing-lists" }},
                "storage": {{ "dir": "{}" }}
            }}"#,
            dir.path().join("sessions").display()
        )
        .unwrap();

        let config = load_from_file(Some(&path)).unwrap();
        assert_eq!(config.erp.endpoint_url, "https://erp.example.com/packing-lists");
        assert_eq!(config.erp.timeout_secs, DEFAULT_ERP_TIMEOUT_SECS);
        assert_eq!(config.reconcile.autosave_debounce_ms, AUTOSAVE_DEBOUNCE_MS);
    }

    #[test]
    fn loads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[erp]\nendpoint_url = \"https://erp.example.com/pl\"\ntimeout_secs = 10\n\n\
             [storage]\ndir = \"/tmp/packlist-sessions\"\n",
        )
        .unwrap();

        let config = load_from_file(Some(&path)).unwrap();
        assert_eq!(config.erp.timeout_secs, 10);
        assert_eq!(config.storage.dir, PathBuf::from("/tmp/packlist-sessions"));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "erp: {}").unwrap();

        let err = load_from_file(Some(&path)).unwrap_err();
        assert!(matches!(err, PacklistError::Config(_)));
    }
}
