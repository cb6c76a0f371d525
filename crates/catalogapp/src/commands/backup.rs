use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

/// Stores the current catalog under the backup key, replacing any older backup.
pub fn backup<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let snapshot = store.backup()?;
    Ok(CmdResult {
        snapshot: Some(snapshot),
        ..Default::default()
    }
    .with_message(CmdMessage::success("Backup realizado com sucesso!")))
}

/// Imports the stored backup. Without one this is `BackupNotFound`.
pub fn restore<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    store.restore()?;
    Ok(CmdResult {
        stats: Some(store.stats()),
        ..Default::default()
    }
    .with_message(CmdMessage::success("Backup restaurado com sucesso!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::clear;
    use crate::error::CatalogError;
    use crate::model::User;
    use crate::store::memory::fixtures::StoreFixture;
    use assert_matches::assert_matches;

    #[test]
    fn restore_after_clear() {
        let fixture = StoreFixture::new().with_users(2).with_products(1);
        let users = fixture.store.get_all::<User>();

        backup(&fixture.store).unwrap();
        clear::run(&fixture.store).unwrap();
        let result = restore(&fixture.store).unwrap();

        let stats = result.stats.unwrap();
        assert_eq!(stats.user_count, 2);
        assert_eq!(stats.product_count, 1);
        assert_eq!(fixture.store.get_all::<User>(), users);
    }

    #[test]
    fn restore_without_backup_fails() {
        let fixture = StoreFixture::new();
        assert_matches!(restore(&fixture.store), Err(CatalogError::BackupNotFound));
    }
}
