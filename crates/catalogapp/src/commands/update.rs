use crate::commands::{CmdMessage, CmdRecord, CmdResult};
use crate::error::Result;
use crate::model::RecordId;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

/// Merges `patch` into the record with `id`. An unknown id is an error.
pub fn run<B: StorageBackend, R: CmdRecord>(
    store: &RecordStore<B>,
    id: RecordId,
    patch: R::Patch,
) -> Result<CmdResult> {
    let record = store.update::<R>(id, patch)?;

    let mut result = CmdResult::default();
    record.push_affected(&mut result);
    result.add_message(CmdMessage::success(format!(
        "{} atualizado com sucesso!",
        R::LABEL
    )));
    Ok(result)
}
