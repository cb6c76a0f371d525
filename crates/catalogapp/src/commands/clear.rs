use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

/// Wipes every collection. The caller is expected to have confirmed.
pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    store.clear_all()?;
    Ok(CmdResult {
        stats: Some(store.stats()),
        ..Default::default()
    }
    .with_message(CmdMessage::info("Todos os dados foram apagados!")))
}
