//! Snapshot export and import.
//!
//! [`export`] and [`import`] work on an in-memory [`Snapshot`]. The `_file`
//! variants read and write the same JSON document on disk.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::store::backend::StorageBackend;
use crate::store::{RecordStore, Snapshot};
use std::fs;
use std::path::Path;

pub fn export<B: StorageBackend>(store: &RecordStore<B>) -> CmdResult {
    let snapshot = store.export_all();
    let count = snapshot.record_count();
    CmdResult {
        snapshot: Some(snapshot),
        ..Default::default()
    }
    .with_message(CmdMessage::success(format!(
        "Dados exportados: {} registros",
        count
    )))
}

pub fn import<B: StorageBackend>(store: &RecordStore<B>, snapshot: &Snapshot) -> Result<CmdResult> {
    store.import_all(snapshot)?;
    let mut result = CmdResult {
        stats: Some(store.stats()),
        ..Default::default()
    };
    if snapshot.usuarios.is_none() && snapshot.produtos.is_none() && snapshot.contatos.is_none() {
        result.add_message(CmdMessage::warning("Nenhuma coleção no arquivo importado."));
    } else {
        result.add_message(CmdMessage::success("Dados importados com sucesso!"));
    }
    Ok(result)
}

pub fn export_to_file<B: StorageBackend>(store: &RecordStore<B>, path: &Path) -> Result<CmdResult> {
    let snapshot = store.export_all();
    fs::write(path, snapshot.to_json()?).map_err(CatalogError::Io)?;

    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Dados exportados: {} registros",
        snapshot.record_count()
    )));
    result.snapshot = Some(snapshot);
    result.add_message(CmdMessage::info(format!("Arquivo: {}", path.display())));
    Ok(result)
}

pub fn import_from_file<B: StorageBackend>(
    store: &RecordStore<B>,
    path: &Path,
) -> Result<CmdResult> {
    let raw = fs::read_to_string(path).map_err(CatalogError::Io)?;
    let snapshot = Snapshot::from_json(&raw)?;
    import(store, &snapshot)
}
