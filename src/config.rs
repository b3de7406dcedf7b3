//! Configuration file support for nmap2lists.
//!
//! Provides YAML-based configuration through `nmap2lists.config.yml` files.
//! The only setting is the default output directory; the category rule
//! table is built in.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::error::ListsError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "nmap2lists.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    pub output_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Names of keys that are not understood, sorted
    pub fn unknown_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.unknown_fields.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| ListsError::InvalidConfig {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).map_err(|e| ListsError::InvalidConfig {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?
    };

    validate_config(path, &config)?;
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(path: &Path, config: &ConfigFile) -> Result<()> {
    if let Some(dir) = &config.output_dir {
        if dir.as_os_str().is_empty() {
            return Err(ListsError::InvalidConfig {
                path: path.to_path_buf(),
                details: "output_dir must not be empty".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Resolves the output directory: CLI flag, then config file, then `default`.
pub fn resolve_output_dir(
    cli_dir: Option<&Path>,
    config: Option<&ConfigFile>,
    default: &Path,
) -> PathBuf {
    cli_dir
        .map(Path::to_path_buf)
        .or_else(|| config.and_then(|c| c.output_dir.clone()))
        .unwrap_or_else(|| default.to_path_buf())
}
