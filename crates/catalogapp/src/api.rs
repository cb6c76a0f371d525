//! # Application Context
//!
//! [`CatalogApi`] is the single entry point for catalog operations. It owns the
//! one [`RecordStore`] and the one [`ValidationEngine`] of a running
//! application and hands them to the command functions; there is no global
//! state anywhere in the crate.
//!
//! ## Role and Responsibilities
//!
//! The API:
//! - **Dispatches** to the matching command in `commands/*.rs`
//! - **Normalizes inputs** (a form name such as `"user-form"` becomes a [`FormId`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not render, prompt for confirmation or print anything. A UI that
//! needs "are you sure?" before [`CatalogApi::clear_all`] asks before calling.
//!
//! ## Generic Over StorageBackend
//!
//! `CatalogApi<B: StorageBackend>` runs on any medium:
//! - Production: `CatalogApi<FsBackend>` via [`CatalogApi::open`]
//! - Testing: `CatalogApi<MemBackend>` via [`CatalogApi::in_memory`]
//!
//! API tests check dispatch and argument handling only; command logic and
//! storage behavior are tested in their own modules.

use crate::commands::{self, CmdResult};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::model::{ContactMessage, Product, ProductPatch, RecordId, User, UserPatch};
use crate::store::backend::StorageBackend;
use crate::store::fs::FileStore;
use crate::store::fs_backend::FsBackend;
use crate::store::mem_backend::MemBackend;
use crate::store::memory::InMemoryStore;
use crate::store::{RecordStore, Snapshot, Stats};
use crate::validation::{
    FieldValidationResult, FieldValues, FormId, FormValidation, ValidationEngine,
};
use std::path::Path;
use tracing::info;

pub struct CatalogApi<B: StorageBackend> {
    store: RecordStore<B>,
    engine: ValidationEngine,
}

impl CatalogApi<FsBackend> {
    /// File-backed catalog at the configured data directory.
    pub fn open(config: &CatalogConfig) -> Self {
        let store = FileStore::from_config(config);
        info!(root = %store.root().display(), "catalog opened");
        Self::new(store)
    }
}

impl CatalogApi<MemBackend> {
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }
}

impl<B: StorageBackend> CatalogApi<B> {
    pub fn new(store: RecordStore<B>) -> Self {
        Self {
            store,
            engine: ValidationEngine::new(),
        }
    }

    pub fn with_engine(store: RecordStore<B>, engine: ValidationEngine) -> Self {
        Self { store, engine }
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    // --- Forms ---

    pub fn submit_user(&self, values: &FieldValues) -> Result<CmdResult> {
        commands::create::submit_user(&self.store, &self.engine, values)
    }

    pub fn submit_product(&self, values: &FieldValues) -> Result<CmdResult> {
        commands::create::submit_product(&self.store, &self.engine, values)
    }

    pub fn submit_contact(&self, values: &FieldValues) -> Result<CmdResult> {
        commands::create::submit_contact(&self.store, &self.engine, values)
    }

    /// Dispatches on a form name (`"user"`, `"product-form"`, ...).
    pub fn submit(&self, form: &str, values: &FieldValues) -> Result<CmdResult> {
        match form.parse::<FormId>()? {
            FormId::User => self.submit_user(values),
            FormId::Product => self.submit_product(values),
            FormId::Contact => self.submit_contact(values),
        }
    }

    pub fn validate(&self, form: FormId, values: &FieldValues) -> FormValidation {
        self.engine.validate_form(form, values)
    }

    pub fn validate_field(&self, form: FormId, field: &str, raw: &str) -> FieldValidationResult {
        self.engine.validate_field(form, field, raw)
    }

    // --- Records ---

    pub fn update_user(&self, id: RecordId, patch: UserPatch) -> Result<CmdResult> {
        commands::update::run::<B, User>(&self.store, id, patch)
    }

    pub fn update_product(&self, id: RecordId, patch: ProductPatch) -> Result<CmdResult> {
        commands::update::run::<B, Product>(&self.store, id, patch)
    }

    pub fn delete_user(&self, id: RecordId) -> Result<CmdResult> {
        commands::delete::run::<B, User>(&self.store, id)
    }

    pub fn delete_product(&self, id: RecordId) -> Result<CmdResult> {
        commands::delete::run::<B, Product>(&self.store, id)
    }

    pub fn delete_contact(&self, id: RecordId) -> Result<CmdResult> {
        commands::delete::run::<B, ContactMessage>(&self.store, id)
    }

    pub fn list_users(&self) -> CmdResult {
        commands::list::run::<B, User>(&self.store)
    }

    pub fn list_products(&self) -> CmdResult {
        commands::list::run::<B, Product>(&self.store)
    }

    pub fn list_contacts(&self) -> CmdResult {
        commands::list::run::<B, ContactMessage>(&self.store)
    }

    pub fn get_user(&self, id: RecordId) -> Option<User> {
        self.store.get_by_id(id)
    }

    pub fn get_product(&self, id: RecordId) -> Option<Product> {
        self.store.get_by_id(id)
    }

    pub fn get_contact(&self, id: RecordId) -> Option<ContactMessage> {
        self.store.get_by_id(id)
    }

    // --- Catalog-wide ---

    pub fn stats(&self) -> Stats {
        self.store.stats()
    }

    pub fn export(&self) -> CmdResult {
        commands::export::export(&self.store)
    }

    pub fn import(&self, snapshot: &Snapshot) -> Result<CmdResult> {
        commands::export::import(&self.store, snapshot)
    }

    pub fn export_to_file(&self, path: &Path) -> Result<CmdResult> {
        commands::export::export_to_file(&self.store, path)
    }

    pub fn import_from_file(&self, path: &Path) -> Result<CmdResult> {
        commands::export::import_from_file(&self.store, path)
    }

    pub fn clear_all(&self) -> Result<CmdResult> {
        commands::clear::run(&self.store)
    }

    pub fn backup(&self) -> Result<CmdResult> {
        commands::backup::backup(&self.store)
    }

    pub fn restore(&self) -> Result<CmdResult> {
        commands::backup::restore(&self.store)
    }

    pub fn has_backup(&self) -> bool {
        self.store.has_backup()
    }
}
