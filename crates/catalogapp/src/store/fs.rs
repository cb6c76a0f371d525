use super::fs_backend::FsBackend;
use super::record_store::RecordStore;
use crate::config::CatalogConfig;
use std::path::PathBuf;

pub type FileStore = RecordStore<FsBackend>;

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        RecordStore::with_backend(FsBackend::new(root))
    }

    /// Opens the store described by `config`: its data directory and quota.
    pub fn from_config(config: &CatalogConfig) -> Self {
        let mut backend = FsBackend::new(config.resolve_data_dir());
        if let Some(quota) = config.quota() {
            backend = backend.with_quota(quota);
        }
        RecordStore::with_backend(backend)
    }

    pub fn root(&self) -> PathBuf {
        self.backend.root().to_path_buf()
    }
}
