use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::copy::DEFAULT_CHUNK_SIZE;
use crate::file_name::NAME_MAX;

/// Global configuration loaded from `~/.config/rawcopy/config.toml`.
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawcopyConfig {
    /// Bytes read from the input per chunk.
    pub chunk_size: usize,
    /// Longest accepted file name in bytes (1..=255).
    pub max_name_len: usize,
    /// Warn when the output extension differs from the input extension.
    pub warn_extension_mismatch: bool,
    /// fsync the output file after the copy completes.
    pub sync_output: bool,
}

impl Default for RawcopyConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_name_len: NAME_MAX,
            warn_extension_mismatch: true,
            sync_output: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("chunk_size must be greater than 0")]
    ZeroChunkSize,
    #[error("max_name_len must be between 1 and 255, got {0}")]
    NameLenOutOfRange(usize),
}

impl RawcopyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.max_name_len == 0 || self.max_name_len > NAME_MAX {
            return Err(ConfigError::NameLenOutOfRange(self.max_name_len));
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rawcopy")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RawcopyConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RawcopyConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Parse and validate the configuration file at `path`.
pub fn load_from(path: &Path) -> Result<RawcopyConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: RawcopyConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = RawcopyConfig::default();
        assert_eq!(cfg.chunk_size, 1024);
        assert_eq!(cfg.max_name_len, 255);
        assert!(cfg.warn_extension_mismatch);
        assert!(!cfg.sync_output);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = RawcopyConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: RawcopyConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            chunk_size = 4096
        "#;
        let cfg: RawcopyConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.chunk_size, 4096);
        assert_eq!(cfg.max_name_len, 255);
        assert!(cfg.warn_extension_mismatch);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            chunk_size = 65536
            max_name_len = 64
            warn_extension_mismatch = false
            sync_output = true
        "#;
        let cfg: RawcopyConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.chunk_size, 65536);
        assert_eq!(cfg.max_name_len, 64);
        assert!(!cfg.warn_extension_mismatch);
        assert!(cfg.sync_output);
    }

    #[test]
    fn validate_rejects_zero_chunk() {
        let cfg = RawcopyConfig {
            chunk_size: 0,
            ..RawcopyConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroChunkSize));
    }

    #[test]
    fn validate_rejects_name_len_out_of_range() {
        for len in [0, 256, 4096] {
            let cfg = RawcopyConfig {
                max_name_len: len,
                ..RawcopyConfig::default()
            };
            assert_eq!(cfg.validate(), Err(ConfigError::NameLenOutOfRange(len)));
        }
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "sync_output = true\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert!(cfg.sync_output);
        assert_eq!(cfg.chunk_size, 1024);
    }

    #[test]
    fn load_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "chunk_size = 0\n").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("chunk_size must be greater than 0"));
    }

    #[test]
    fn load_from_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "chunk_size = \"big\"\n").unwrap();
        assert!(load_from(&path).is_err());
    }
}
