use crate::commands::{CmdMessage, CmdRecord, CmdResult};
use crate::error::Result;
use crate::model::RecordId;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

/// Removes the record with `id`. Unknown ids succeed without a change.
pub fn run<B: StorageBackend, R: CmdRecord>(
    store: &RecordStore<B>,
    id: RecordId,
) -> Result<CmdResult> {
    store.delete::<R>(id)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "{} excluído com sucesso!",
        R::LABEL
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactMessage, Product, User};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_record() {
        let fixture = StoreFixture::new().with_users(2);
        let users = fixture.store.get_all::<User>();

        let result = run::<_, User>(&fixture.store, users[0].id).unwrap();

        assert!(result.is_success());
        assert_eq!(result.messages[0].content, "Usuário excluído com sucesso!");
        assert_eq!(fixture.store.get_all::<User>(), vec![users[1].clone()]);
    }

    #[test]
    fn deleting_twice_succeeds() {
        let fixture = StoreFixture::new().with_products(1);
        let id = fixture.store.get_all::<Product>()[0].id;

        assert!(run::<_, Product>(&fixture.store, id).is_ok());
        assert!(run::<_, Product>(&fixture.store, id).is_ok());
        assert!(fixture.store.get_all::<Product>().is_empty());
    }

    #[test]
    fn other_collections_untouched() {
        let fixture = StoreFixture::new().with_users(1).with_contacts(1);
        let id = fixture.store.get_all::<ContactMessage>()[0].id;

        run::<_, ContactMessage>(&fixture.store, id).unwrap();

        assert_eq!(fixture.store.stats().user_count, 1);
        assert_eq!(fixture.store.stats().contact_count, 0);
    }
}
