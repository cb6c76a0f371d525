//! # Snapshot Format
//!
//! A snapshot is the portable, point-in-time form of the whole catalog. It is
//! used for export/import and is what the backup key holds.
//!
//! ```json
//! {
//!   "usuarios": [ ... ],
//!   "produtos": [ ... ],
//!   "contatos": [ ... ],
//!   "dataExportacao": "2024-05-01T10:00:00Z",
//!   "versao": "1.0"
//! }
//! ```
//!
//! Every member is optional on input. On import, an absent collection is left
//! untouched in the store; a present one (even `[]`) replaces it.

use crate::error::Result;
use crate::model::{ContactMessage, Product, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuarios: Option<Vec<User>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produtos: Option<Vec<Product>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contatos: Option<Vec<ContactMessage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_exportacao: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versao: Option<String>,
}

impl Snapshot {
    pub fn full(
        usuarios: Vec<User>,
        produtos: Vec<Product>,
        contatos: Vec<ContactMessage>,
    ) -> Self {
        Self {
            usuarios: Some(usuarios),
            produtos: Some(produtos),
            contatos: Some(contatos),
            data_exportacao: Some(Utc::now()),
            versao: Some(SNAPSHOT_VERSION.to_string()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn record_count(&self) -> usize {
        self.usuarios.as_ref().map_or(0, Vec::len)
            + self.produtos.as_ref().map_or(0, Vec::len)
            + self.contatos.as_ref().map_or(0, Vec::len)
    }
}
