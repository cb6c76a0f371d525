use super::backend::{check_quota, StorageBackend};
use crate::error::{CatalogError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const VALUE_EXT: &str = "json";

/// Filesystem backend: one `<key>.json` file per key inside `root`.
pub struct FsBackend {
    root: PathBuf,
    quota: Option<usize>,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root, quota: None }
    }

    /// Limits the total footprint (keys plus file sizes) of stored entries.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key.starts_with('.')
            || key.contains(|c| c == '/' || c == '\\')
            || key.contains("..")
        {
            return Err(CatalogError::StorageUnavailable(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.root.join(format!("{}.{}", key, VALUE_EXT)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CatalogError::Io)?;
        }
        Ok(())
    }

    fn used_by_others(&self, key: &str) -> Result<usize> {
        if !self.root.exists() {
            return Ok(0);
        }

        let mut used = 0usize;
        for entry in fs::read_dir(&self.root).map_err(CatalogError::Io)? {
            let path = entry.map_err(CatalogError::Io)?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(VALUE_EXT) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if stem == key || stem.starts_with('.') {
                continue;
            }
            let size = fs::metadata(&path).map_err(CatalogError::Io)?.len() as usize;
            used += stem.len() + size;
        }
        Ok(used)
    }
}

impl StorageBackend for FsBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(CatalogError::Io)?;
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let target = self.key_path(key)?;
        self.ensure_dir()?;
        check_quota(self.quota, self.used_by_others(key)?, key, value)?;

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        let written = fs::write(&tmp, value).and_then(|()| fs::rename(&tmp, &target));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(CatalogError::Io(e));
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(path).map_err(CatalogError::Io)?;
        }
        Ok(())
    }
}
