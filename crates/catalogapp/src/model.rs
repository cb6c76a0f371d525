//! # Domain Model
//!
//! The catalog keeps three kinds of records, each living in its own
//! [`Collection`]:
//!
//! | Record             | Collection  | Storage key          |
//! |--------------------|-------------|----------------------|
//! | [`User`]           | `usuarios`  | `catalogo_usuarios`  |
//! | [`Product`]        | `produtos`  | `catalogo_produtos`  |
//! | [`ContactMessage`] | `contatos`  | `catalogo_contatos`  |
//!
//! Field names on disk are the Portuguese camelCase names used by the
//! snapshot format (`dataCriacao`, `dataAtualizacao`, `dataEnvio`), so
//! exported data stays portable.
//!
//! ## Drafts and Patches
//!
//! Every record type has two companions:
//! - a **draft**: what a caller supplies to create a record (no id, no timestamps);
//! - a **patch**: all-optional fields merged over an existing record on update.
//!
//! The [`Record`] trait ties a record to its collection, draft and patch so the
//! store can be written once, generically.
//!
//! ## Timestamps
//!
//! - `dataCriacao` / `dataEnvio` are set once at creation.
//! - `dataAtualizacao` starts equal to `dataCriacao` and only moves on update.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type RecordId = i64;

/// Category assigned to products created without one.
pub const DEFAULT_CATEGORY: &str = "geral";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Users,
    Products,
    Contacts,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Users,
        Collection::Products,
        Collection::Contacts,
    ];

    /// Key under which the collection's JSON array is persisted.
    pub fn storage_key(self) -> &'static str {
        match self {
            Collection::Users => "catalogo_usuarios",
            Collection::Products => "catalogo_produtos",
            Collection::Contacts => "catalogo_contatos",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Collection::Users => "usuarios",
            Collection::Products => "produtos",
            Collection::Contacts => "contatos",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A persisted entity bound to one collection.
pub trait Record: Serialize + DeserializeOwned + Clone + fmt::Debug {
    const COLLECTION: Collection;

    type Draft;
    type Patch;

    fn id(&self) -> RecordId;

    /// Builds the stored record from a draft. Both creation and update
    /// timestamps (where the record has them) are set to `now`.
    fn from_draft(id: RecordId, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Merges the fields present in `patch`, refreshing the update timestamp.
    fn apply_patch(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

// --- User ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub nome: String,
    pub email: String,
    pub idade: i64,
    pub telefone: String,
    pub data_criacao: DateTime<Utc>,
    pub data_atualizacao: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub nome: String,
    pub email: String,
    pub idade: i64,
    pub telefone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPatch {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub idade: Option<i64>,
    pub telefone: Option<String>,
}

impl Record for User {
    const COLLECTION: Collection = Collection::Users;
    type Draft = UserDraft;
    type Patch = UserPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: UserDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            nome: draft.nome,
            email: draft.email,
            idade: draft.idade,
            telefone: draft.telefone,
            data_criacao: now,
            data_atualizacao: now,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch, now: DateTime<Utc>) {
        if let Some(nome) = patch.nome {
            self.nome = nome;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(idade) = patch.idade {
            self.idade = idade;
        }
        if let Some(telefone) = patch.telefone {
            self.telefone = telefone;
        }
        self.data_atualizacao = now;
    }
}

// --- Product ---

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,
    pub nome: String,
    pub preco: f64,
    pub estoque: i64,
    #[serde(default = "default_category")]
    pub categoria: String,
    pub data_criacao: DateTime<Utc>,
    pub data_atualizacao: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub nome: String,
    pub preco: f64,
    pub estoque: i64,
    #[serde(default)]
    pub categoria: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    pub nome: Option<String>,
    pub preco: Option<f64>,
    pub estoque: Option<i64>,
    pub categoria: Option<String>,
}

/// Blank or missing categories fall back to [`DEFAULT_CATEGORY`].
pub fn normalize_category(categoria: Option<String>) -> String {
    match categoria {
        Some(c) if !c.trim().is_empty() => c,
        _ => default_category(),
    }
}

impl Record for Product {
    const COLLECTION: Collection = Collection::Products;
    type Draft = ProductDraft;
    type Patch = ProductPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: ProductDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            nome: draft.nome,
            preco: draft.preco,
            estoque: draft.estoque,
            categoria: normalize_category(draft.categoria),
            data_criacao: now,
            data_atualizacao: now,
        }
    }

    fn apply_patch(&mut self, patch: ProductPatch, now: DateTime<Utc>) {
        if let Some(nome) = patch.nome {
            self.nome = nome;
        }
        if let Some(preco) = patch.preco {
            self.preco = preco;
        }
        if let Some(estoque) = patch.estoque {
            self.estoque = estoque;
        }
        if let Some(categoria) = patch.categoria {
            self.categoria = normalize_category(Some(categoria));
        }
        self.data_atualizacao = now;
    }
}

// --- Contact messages ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: RecordId,
    pub nome: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assunto: Option<String>,
    pub mensagem: String,
    pub data_envio: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub nome: String,
    pub email: String,
    #[serde(default)]
    pub assunto: Option<String>,
    pub mensagem: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPatch {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub assunto: Option<String>,
    pub mensagem: Option<String>,
}

impl Record for ContactMessage {
    const COLLECTION: Collection = Collection::Contacts;
    type Draft = ContactDraft;
    type Patch = ContactPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: ContactDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            nome: draft.nome,
            email: draft.email,
            assunto: draft.assunto,
            mensagem: draft.mensagem,
            data_envio: now,
        }
    }

    // Messages carry only a send timestamp, which never moves.
    fn apply_patch(&mut self, patch: ContactPatch, _now: DateTime<Utc>) {
        if let Some(nome) = patch.nome {
            self.nome = nome;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(assunto) = patch.assunto {
            self.assunto = Some(assunto);
        }
        if let Some(mensagem) = patch.mensagem {
            self.mensagem = mensagem;
        }
    }
}
