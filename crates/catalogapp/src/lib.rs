//! # Catalog Architecture
//!
//! Catalogapp is a **UI-agnostic catalog library**: users, products and contact
//! messages, validated by declarative form rules and kept in a local key-value
//! medium. Whatever draws the forms (a web page, a TUI, a test) talks to it
//! through [`api::CatalogApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Application context: one store, one validation engine    │
//! │  - Normalizes inputs, returns structured Result types       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validate-then-save submissions, CRUD, export, backup     │
//! │  - Returns CmdResult with leveled messages                  │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                              │
//!                  ▼                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Validation (validation/)    │ │  Storage (store/)          │
//! │  - Static rule table         │ │  - RecordStore over a      │
//! │  - Field and form checks     │ │    StorageBackend          │
//! │                              │ │  - FsBackend / MemBackend  │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! [`routes`] and [`template`] are small pure helpers for the page shell: hash
//! to page lookup and `{{placeholder}}` substitution.
//!
//! ## No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or touches a terminal.
//! Diagnostics go through `tracing`; installing a subscriber is the host's job.
//! The only filesystem access is [`store::fs_backend::FsBackend`] and the
//! explicit file export/import commands.
//!
//! ## Testing Strategy
//!
//! - **Store and commands**: `#[cfg(test)]` modules over [`store::memory::InMemoryStore`]
//! - **Filesystem**: integration tests under `tests/` with `tempfile` directories
//! - **Validation**: table-driven checks against the built-in rule set

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;
pub mod template;
pub mod validation;

pub use api::CatalogApi;
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
