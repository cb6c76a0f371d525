//! # Storage Layer
//!
//! This module owns the three record collections and the key-value medium they
//! live in.
//!
//! ## Two Levels
//!
//! - [`backend::StorageBackend`]: the raw medium. String keys, string values,
//!   `get_item` / `set_item` / `remove_item`. It knows nothing about records.
//! - [`record_store::RecordStore`]: the typed layer. It maps each
//!   [`Collection`](crate::model::Collection) to a fixed key, assigns ids,
//!   stamps timestamps, and implements export/import and backup/restore.
//!
//! ## Consistency Mechanism
//!
//! Every mutation is a whole-collection read-modify-write:
//!
//! 1. Read the collection's JSON array.
//! 2. Change it in memory (append, merge, filter).
//! 3. Write the full array back as a single value.
//!
//! Backends guarantee that step 3 is atomic, so a failed write leaves the
//! previous array in place. There is exactly one writer (the calling thread);
//! two processes writing the same data directory race, last write wins.
//!
//! ## Degrading Reads
//!
//! - Missing collection → empty.
//! - Malformed JSON or medium read failure → empty for `get_all` (logged at
//!   `warn`), an error for mutations (`MalformedStoredData` or the medium's
//!   error), so a write never clobbers data that could not be read.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: `RecordStore<MemBackend>`, for tests and embedding.
//! - [`fs::FileStore`]: `RecordStore<FsBackend>`, one JSON file per key.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── catalogo_usuarios.json   # [User, ...]
//! ├── catalogo_produtos.json   # [Product, ...]
//! ├── catalogo_contatos.json   # [ContactMessage, ...]
//! └── catalogo_backup.json     # Snapshot
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod ids;
pub mod mem_backend;
pub mod memory;
pub mod record_store;
pub mod snapshot;

pub use record_store::RecordStore;
pub use snapshot::Snapshot;

/// Key holding the most recent backup snapshot.
pub const BACKUP_KEY: &str = "catalogo_backup";

/// Record counts at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub user_count: usize,
    pub product_count: usize,
    pub contact_count: usize,
    pub as_of: DateTime<Utc>,
}
