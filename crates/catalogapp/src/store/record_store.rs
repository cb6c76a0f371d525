use super::backend::StorageBackend;
use super::ids::IdGenerator;
use super::snapshot::Snapshot;
use super::{Stats, BACKUP_KEY};
use crate::error::{CatalogError, Result};
use crate::model::{Collection, ContactMessage, Product, Record, RecordId, User};
use chrono::Utc;
use tracing::{debug, info, warn};

const EMPTY_COLLECTION: &str = "[]";

pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    ids: IdGenerator,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Wraps `backend` and makes sure all three collections exist.
    ///
    /// A failure to write the empty collections is logged, not returned:
    /// reads treat a missing collection as empty anyway.
    pub fn with_backend(backend: B) -> Self {
        let store = Self {
            backend,
            ids: IdGenerator::new(),
        };
        if let Err(e) = store.init() {
            warn!(error = %e, "could not initialize collections");
        }
        store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn init(&self) -> Result<()> {
        for collection in Collection::ALL {
            let key = collection.storage_key();
            if !self.backend.contains_key(key)? {
                self.backend.set_item(key, EMPTY_COLLECTION)?;
                debug!(%collection, "initialized empty collection");
            }
        }
        let stats = self.stats();
        info!(
            users = stats.user_count,
            products = stats.product_count,
            contacts = stats.contact_count,
            "storage initialized"
        );
        Ok(())
    }

    /// Reads one collection. A missing value reads as empty; a value that
    /// does not parse is `MalformedStoredData`, so mutations never write over it.
    fn read_collection<R: Record>(&self) -> Result<Vec<R>> {
        let collection = R::COLLECTION;
        let Some(raw) = self.backend.get_item(collection.storage_key())? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| CatalogError::MalformedStoredData {
            collection,
            reason: e.to_string(),
        })
    }

    fn write_collection<R: Record>(&self, records: &[R]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.backend.set_item(R::COLLECTION.storage_key(), &raw)
    }

    // --- CRUD ---

    /// Creates a record from `draft` with a fresh id and timestamps.
    ///
    /// The whole collection is written back as one value; if that write fails
    /// the stored collection is unchanged and the error is returned.
    pub fn create<R: Record>(&self, draft: R::Draft) -> Result<R> {
        let collection = R::COLLECTION;
        let mut records = self.read_collection::<R>()?;

        let max_existing = records.iter().map(Record::id).max().unwrap_or(0);
        let id = self.ids.next_id(max_existing);
        let record = R::from_draft(id, draft, Utc::now());
        records.push(record.clone());

        self.write_collection(&records).map_err(|e| {
            warn!(%collection, error = %e, "failed to persist new record");
            e
        })?;
        info!(%collection, id, "record created");
        Ok(record)
    }

    /// All records of a collection in insertion order.
    /// Never fails: an unreadable medium or a malformed value degrades to an
    /// empty list.
    pub fn get_all<R: Record>(&self) -> Vec<R> {
        self.read_collection().unwrap_or_else(|e| {
            warn!(collection = %R::COLLECTION, error = %e, "failed to read collection");
            Vec::new()
        })
    }

    pub fn get_by_id<R: Record>(&self, id: RecordId) -> Option<R> {
        self.get_all::<R>().into_iter().find(|r| r.id() == id)
    }

    /// Merges `patch` over the record with `id` and persists the collection.
    pub fn update<R: Record>(&self, id: RecordId, patch: R::Patch) -> Result<R> {
        let collection = R::COLLECTION;
        let mut records = self.read_collection::<R>()?;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(CatalogError::NotFound { collection, id })?;

        record.apply_patch(patch, Utc::now());
        let updated = record.clone();

        self.write_collection(&records)?;
        info!(%collection, id, "record updated");
        Ok(updated)
    }

    /// Removes the record with `id`. Deleting an unknown id succeeds and
    /// leaves the collection untouched.
    pub fn delete<R: Record>(&self, id: RecordId) -> Result<()> {
        let collection = R::COLLECTION;
        let mut records = self.read_collection::<R>()?;
        let before = records.len();
        records.retain(|r| r.id() != id);

        if records.len() == before {
            debug!(%collection, id, "delete of unknown id ignored");
            return Ok(());
        }

        self.write_collection(&records)?;
        info!(%collection, id, "record deleted");
        Ok(())
    }

    // --- Aggregates & bulk ---

    pub fn stats(&self) -> Stats {
        Stats {
            user_count: self.get_all::<User>().len(),
            product_count: self.get_all::<Product>().len(),
            contact_count: self.get_all::<ContactMessage>().len(),
            as_of: Utc::now(),
        }
    }

    pub fn export_all(&self) -> Snapshot {
        Snapshot::full(self.get_all(), self.get_all(), self.get_all())
    }

    /// Overwrites every collection present in `snapshot`; absent ones are
    /// left as they are. Each collection is replaced atomically, one at a time.
    pub fn import_all(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(users) = &snapshot.usuarios {
            self.write_collection(users)?;
        }
        if let Some(products) = &snapshot.produtos {
            self.write_collection(products)?;
        }
        if let Some(contacts) = &snapshot.contatos {
            self.write_collection(contacts)?;
        }
        info!(records = snapshot.record_count(), "snapshot imported");
        Ok(())
    }

    /// Drops all three collections and re-creates them empty. Irreversible;
    /// the backup key is not touched.
    pub fn clear_all(&self) -> Result<()> {
        for collection in Collection::ALL {
            self.backend.remove_item(collection.storage_key())?;
        }
        self.init()?;
        info!("all collections cleared");
        Ok(())
    }

    // --- Backup ---

    pub fn backup(&self) -> Result<Snapshot> {
        let snapshot = self.export_all();
        self.backend.set_item(BACKUP_KEY, &snapshot.to_json()?)?;
        info!(records = snapshot.record_count(), "backup written");
        Ok(snapshot)
    }

    pub fn has_backup(&self) -> bool {
        self.backend.contains_key(BACKUP_KEY).unwrap_or(false)
    }

    /// Imports the stored backup. Fails with `BackupNotFound` when there is none.
    pub fn restore(&self) -> Result<()> {
        let raw = self
            .backend
            .get_item(BACKUP_KEY)?
            .ok_or(CatalogError::BackupNotFound)?;
        let snapshot = Snapshot::from_json(&raw)?;
        self.import_all(&snapshot)?;
        info!("backup restored");
        Ok(())
    }
}
