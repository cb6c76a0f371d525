//! # Command Layer
//!
//! This module contains the controller logic of the catalog. Each command lives
//! in its own submodule and is a plain function over a
//! [`RecordStore`](crate::store::RecordStore) (and, for
//! submissions, a [`ValidationEngine`](crate::validation::ValidationEngine)).
//!
//! ## What Commands Do
//!
//! - Validate submitted field values before anything is persisted
//! - Turn valid field values into typed drafts and store them
//! - Return a structured [`CmdResult`]: affected/listed records, the form's
//!   validation outcome, stats or snapshots, and leveled messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Rendering**: no HTML, no DOM, no terminal output
//! - **Confirmation prompts**: destructive commands run when called; asking the
//!   user first is the caller's job
//! - **Timing**: notices carry no lifetime; dismissing them is a UI concern
//!
//! ## Failure Reporting
//!
//! A rejected form or a failed save is not an `Err`: it is a `CmdResult` with an
//! error-level message (and, for forms, the per-field outcome). `Err` is kept
//! for conditions the caller asked about explicitly, such as updating an id
//! that does not exist or restoring without a backup.
//!
//! ## Command Modules
//!
//! - [`create`]: Validate-and-save submissions for the three forms
//! - [`list`]: List a collection
//! - [`update`]: Merge a patch into a record
//! - [`delete`]: Remove a record
//! - [`stats`]: Record counts
//! - [`export`]: Snapshot export/import, in memory or to a file
//! - [`clear`]: Wipe all collections
//! - [`backup`]: Backup and restore

use crate::model::{ContactMessage, Product, Record, User};
use crate::store::{Snapshot, Stats};
use crate::validation::FormValidation;
use serde::Serialize;

pub mod backup;
pub mod clear;
pub mod create;
pub mod delete;
pub mod export;
pub mod list;
pub mod stats;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CmdResult {
    pub affected_users: Vec<User>,
    pub affected_products: Vec<Product>,
    pub affected_contacts: Vec<ContactMessage>,
    pub listed_users: Vec<User>,
    pub listed_products: Vec<Product>,
    pub listed_contacts: Vec<ContactMessage>,
    pub validation: Option<FormValidation>,
    pub stats: Option<Stats>,
    pub snapshot: Option<Snapshot>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.add_message(message);
        self
    }

    /// True unless some message has error level.
    pub fn is_success(&self) -> bool {
        !self
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Per-record wording and the `CmdResult` slots a record kind fills.
pub trait CmdRecord: Record {
    /// Capitalized noun used in notices ("Usuário", "Produto", "Contato").
    const LABEL: &'static str;
    /// Notice shown when the collection is empty.
    const EMPTY_NOTICE: &'static str;

    fn push_affected(self, result: &mut CmdResult);
    fn push_listed(records: Vec<Self>, result: &mut CmdResult);
}

impl CmdRecord for User {
    const LABEL: &'static str = "Usuário";
    const EMPTY_NOTICE: &'static str = "Nenhum usuário cadastrado.";

    fn push_affected(self, result: &mut CmdResult) {
        result.affected_users.push(self);
    }

    fn push_listed(records: Vec<Self>, result: &mut CmdResult) {
        result.listed_users = records;
    }
}

impl CmdRecord for Product {
    const LABEL: &'static str = "Produto";
    const EMPTY_NOTICE: &'static str = "Nenhum produto cadastrado.";

    fn push_affected(self, result: &mut CmdResult) {
        result.affected_products.push(self);
    }

    fn push_listed(records: Vec<Self>, result: &mut CmdResult) {
        result.listed_products = records;
    }
}

impl CmdRecord for ContactMessage {
    const LABEL: &'static str = "Contato";
    const EMPTY_NOTICE: &'static str = "Nenhuma mensagem recebida.";

    fn push_affected(self, result: &mut CmdResult) {
        result.affected_contacts.push(self);
    }

    fn push_listed(records: Vec<Self>, result: &mut CmdResult) {
        result.listed_contacts = records;
    }
}
