use crate::error::{CatalogError, Result};

/// Abstract interface for the raw key-value medium.
///
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (collections, ids, timestamps).
/// Keys and values are plain strings; values are JSON documents.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    /// Returns Err only on actual medium failures.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic: either the whole value is written or the old one stays.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;

    fn contains_key(&self, key: &str) -> Result<bool> {
        Ok(self.get_item(key)?.is_some())
    }
}

/// Checks a pending write against a byte quota.
///
/// `used_by_others` is the footprint of every entry except the one being
/// written. Footprint of an entry is `key.len() + value.len()`.
pub(crate) fn check_quota(
    quota: Option<usize>,
    used_by_others: usize,
    key: &str,
    value: &str,
) -> Result<()> {
    let Some(quota) = quota else {
        return Ok(());
    };
    let needed = used_by_others + key.len() + value.len();
    if needed > quota {
        return Err(CatalogError::QuotaExceeded { needed, quota });
    }
    Ok(())
}
