//! # Configuration
//!
//! Catalog configuration is managed by [`confique`], which handles layered
//! loading from a TOML file, environment variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `CATALOGO_DATA_DIR`, `CATALOGO_QUOTA_BYTES`.
//! 2. **Config file**: the TOML file passed to [`CatalogConfig::load`], if any.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir (via `directories`) | Where the collection files live |
//! | `quota_bytes` | `5242880` | Byte quota of the storage medium, `0` for none |

use crate::error::{CatalogError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// About what browser local storage allows per origin.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

const FALLBACK_DATA_DIR: &str = ".catalogo";

/// Configuration for the catalog, stored in `catalogo.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory holding the collection files.
    /// When absent, the OS-specific data directory is used.
    #[config(env = "CATALOGO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Maximum total size of stored data in bytes. 0 disables the quota.
    #[config(env = "CATALOGO_QUOTA_BYTES", default = 5242880)]
    pub quota_bytes: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }
}

impl CatalogConfig {
    /// Loads configuration from the environment, then `file` (if given),
    /// then the compiled defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// The configured data directory, else the OS data directory, else
    /// `./.catalogo`.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        ProjectDirs::from("br", "catalogo", "catalogo")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
    }

    /// The quota to enforce, if any.
    pub fn quota(&self) -> Option<usize> {
        (self.quota_bytes > 0).then_some(self.quota_bytes)
    }
}
