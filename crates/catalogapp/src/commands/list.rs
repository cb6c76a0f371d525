use crate::commands::{CmdMessage, CmdRecord, CmdResult};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

/// Lists a collection in insertion order. Never fails.
pub fn run<B: StorageBackend, R: CmdRecord>(store: &RecordStore<B>) -> CmdResult {
    let records = store.get_all::<R>();
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info(R::EMPTY_NOTICE));
    }
    R::push_listed(records, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactMessage, Product, User};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_in_insertion_order() {
        let fixture = StoreFixture::new().with_products(3);
        let result = run::<_, Product>(&fixture.store);
        let names: Vec<&str> = result
            .listed_products
            .iter()
            .map(|p| p.nome.as_str())
            .collect();
        assert_eq!(names, ["Produto Teste 1", "Produto Teste 2", "Produto Teste 3"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_collection_gets_notice() {
        let fixture = StoreFixture::new();
        let result = run::<_, User>(&fixture.store);
        assert!(result.listed_users.is_empty());
        assert_eq!(result.messages[0].content, "Nenhum usuário cadastrado.");

        let result = run::<_, ContactMessage>(&fixture.store);
        assert_eq!(result.messages[0].content, "Nenhuma mensagem recebida.");
    }
}
