use super::mem_backend::MemBackend;
use super::record_store::RecordStore;

pub type InMemoryStore = RecordStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        RecordStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ContactDraft, ContactMessage, Product, ProductDraft, User, UserDraft};

    pub fn user_draft(nome: &str) -> UserDraft {
        UserDraft {
            nome: nome.to_string(),
            email: "teste@email.com".to_string(),
            idade: 25,
            telefone: "11999999999".to_string(),
        }
    }

    pub fn product_draft(nome: &str) -> ProductDraft {
        ProductDraft {
            nome: nome.to_string(),
            preco: 99.99,
            estoque: 10,
            categoria: Some("teste".to_string()),
        }
    }

    pub fn contact_draft(nome: &str) -> ContactDraft {
        ContactDraft {
            nome: nome.to_string(),
            email: "contato@email.com".to_string(),
            assunto: Some("duvida".to_string()),
            mensagem: "Gostaria de mais informações.".to_string(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_users(self, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .create::<User>(user_draft(&format!("Usuário Teste {}", i + 1)))
                    .unwrap();
            }
            self
        }

        pub fn with_products(self, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .create::<Product>(product_draft(&format!("Produto Teste {}", i + 1)))
                    .unwrap();
            }
            self
        }

        pub fn with_contacts(self, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .create::<ContactMessage>(contact_draft(&format!("Contato {}", i + 1)))
                    .unwrap();
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use crate::model::{Product, User};

    #[test]
    fn fixture_populates_collections() {
        let fixture = StoreFixture::new().with_users(2).with_products(3);
        let stats = fixture.store.stats();
        assert_eq!(stats.user_count, 2);
        assert_eq!(stats.product_count, 3);
        assert_eq!(stats.contact_count, 0);

        let users = fixture.store.get_all::<User>();
        assert_eq!(users[0].nome, "Usuário Teste 1");
        let products = fixture.store.get_all::<Product>();
        assert_eq!(products[2].nome, "Produto Teste 3");
    }
}
