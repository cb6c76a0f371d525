use crate::commands::CmdResult;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> CmdResult {
    CmdResult {
        stats: Some(store.stats()),
        ..Default::default()
    }
}
