use super::backend::{check_quota, StorageBackend};
use crate::error::{CatalogError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend, the stand-in for a browser's local storage.
///
/// Uses `RefCell` for interior mutability since the catalog is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    items: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    quota: Option<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the total footprint (keys plus values) of stored entries.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to plant a raw value, bypassing quota and error simulation.
    pub fn raw_insert(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    fn used_by_others(&self, key: &str) -> usize {
        self.items
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageBackend for MemBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CatalogError::StorageUnavailable(
                "Simulated write error".to_string(),
            ));
        }
        check_quota(self.quota, self.used_by_others(key), key, value)?;

        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CatalogError::StorageUnavailable(
                "Simulated write error".to_string(),
            ));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
