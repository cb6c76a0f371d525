//! Form submissions: validate, convert to a draft, save.
//!
//! Each form maps its field values onto a draft after validation passes:
//!
//! | Form      | Draft field  | Source field | Conversion                       |
//! |-----------|--------------|--------------|----------------------------------|
//! | user      | `idade`      | `idade`      | number, decimal part dropped     |
//! | product   | `preco`      | `preco`      | number                           |
//! | product   | `estoque`    | `estoque`    | number, decimal part dropped     |
//! | product   | `categoria`  | `categoria`  | blank → `"geral"`                |
//! | contact   | `assunto`    | `assunto`    | kept with the message            |
//!
//! Text fields are stored trimmed, the same value validation saw.

use crate::commands::{CmdMessage, CmdRecord, CmdResult};
use crate::error::Result;
use crate::model::{ContactDraft, ContactMessage, Product, ProductDraft, User, UserDraft};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use crate::validation::rules::parse_number;
use crate::validation::{FieldValues, FormId, ValidationEngine};
use tracing::{debug, warn};

pub const INVALID_FORM_NOTICE: &str = "Corrija os erros no formulário!";

pub fn submit_user<B: StorageBackend>(
    store: &RecordStore<B>,
    engine: &ValidationEngine,
    values: &FieldValues,
) -> Result<CmdResult> {
    submit::<B, User>(
        store,
        engine,
        FormId::User,
        values,
        user_draft,
        "Usuário cadastrado com sucesso!",
        "Erro ao cadastrar usuário!",
    )
}

pub fn submit_product<B: StorageBackend>(
    store: &RecordStore<B>,
    engine: &ValidationEngine,
    values: &FieldValues,
) -> Result<CmdResult> {
    submit::<B, Product>(
        store,
        engine,
        FormId::Product,
        values,
        product_draft,
        "Produto cadastrado com sucesso!",
        "Erro ao cadastrar produto!",
    )
}

pub fn submit_contact<B: StorageBackend>(
    store: &RecordStore<B>,
    engine: &ValidationEngine,
    values: &FieldValues,
) -> Result<CmdResult> {
    submit::<B, ContactMessage>(
        store,
        engine,
        FormId::Contact,
        values,
        contact_draft,
        "Mensagem enviada com sucesso!",
        "Erro ao enviar mensagem!",
    )
}

fn submit<B: StorageBackend, R: CmdRecord>(
    store: &RecordStore<B>,
    engine: &ValidationEngine,
    form: FormId,
    values: &FieldValues,
    to_draft: fn(&FieldValues) -> Option<R::Draft>,
    saved_notice: &str,
    failed_notice: &str,
) -> Result<CmdResult> {
    let validation = engine.validate_form(form, values);
    let all_valid = validation.all_valid;
    let mut result = CmdResult {
        validation: Some(validation),
        ..Default::default()
    };

    if !all_valid {
        debug!(%form, "submission rejected by validation");
        return Ok(result.with_message(CmdMessage::error(INVALID_FORM_NOTICE)));
    }
    let Some(draft) = to_draft(values) else {
        warn!(%form, "validated values do not fit the record fields");
        return Ok(result.with_message(CmdMessage::error(failed_notice)));
    };

    match store.create::<R>(draft) {
        Ok(record) => {
            record.push_affected(&mut result);
            result.add_message(CmdMessage::success(saved_notice));
        }
        Err(e) => {
            warn!(%form, collection = %R::COLLECTION, error = %e, "submission could not be saved");
            result.add_message(CmdMessage::error(failed_notice));
        }
    }
    Ok(result)
}

// --- Field conversion ---

fn text(values: &FieldValues, field: &str) -> String {
    values
        .get(field)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

fn number(values: &FieldValues, field: &str) -> Option<f64> {
    values.get(field).and_then(|v| parse_number(v.trim()))
}

/// Whole part of a number; `None` when it does not fit in an `i64`.
fn integer(values: &FieldValues, field: &str) -> Option<i64> {
    let n = number(values, field)?.trunc();
    (n >= i64::MIN as f64 && n < i64::MAX as f64).then_some(n as i64)
}

pub fn user_draft(values: &FieldValues) -> Option<UserDraft> {
    Some(UserDraft {
        nome: text(values, "nome"),
        email: text(values, "email"),
        idade: integer(values, "idade")?,
        telefone: text(values, "telefone"),
    })
}

pub fn product_draft(values: &FieldValues) -> Option<ProductDraft> {
    let categoria = text(values, "categoria");
    Some(ProductDraft {
        nome: text(values, "nome"),
        preco: number(values, "preco")?,
        estoque: integer(values, "estoque")?,
        categoria: (!categoria.is_empty()).then_some(categoria),
    })
}

pub fn contact_draft(values: &FieldValues) -> Option<ContactDraft> {
    let assunto = text(values, "assunto");
    Some(ContactDraft {
        nome: text(values, "nome"),
        email: text(values, "email"),
        assunto: (!assunto.is_empty()).then_some(assunto),
        mensagem: text(values, "mensagem"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;
    use crate::validation::field_values;

    fn ana() -> FieldValues {
        field_values([
            ("nome", "Ana Silva"),
            ("email", "ana@x.com"),
            ("idade", "30"),
            ("telefone", "11987654321"),
        ])
    }

    #[test]
    fn valid_user_is_saved() {
        let store = InMemoryStore::new();
        let engine = ValidationEngine::new();

        let result = submit_user(&store, &engine, &ana()).unwrap();

        assert!(result.is_success());
        assert!(result.validation.as_ref().unwrap().all_valid);
        assert_eq!(result.affected_users.len(), 1);
        let user = &result.affected_users[0];
        assert_eq!(user.nome, "Ana Silva");
        assert_eq!(user.idade, 30);
        assert_eq!(user.data_atualizacao, user.data_criacao);
        assert_eq!(store.get_by_id::<User>(user.id).as_ref(), Some(user));
        assert_eq!(
            result.messages[0],
            CmdMessage::success("Usuário cadastrado com sucesso!")
        );
    }

    #[test]
    fn invalid_user_is_not_saved() {
        let store = InMemoryStore::new();
        let engine = ValidationEngine::new();
        let mut values = ana();
        values.insert("idade".into(), "15".into());

        let result = submit_user(&store, &engine, &values).unwrap();

        assert!(!result.is_success());
        assert!(result.affected_users.is_empty());
        let validation = result.validation.unwrap();
        assert_eq!(
            validation.get("idade").unwrap().message,
            "Idade deve ser entre 18 e 120 anos"
        );
        assert_eq!(result.messages[0].content, INVALID_FORM_NOTICE);
        assert!(store.get_all::<User>().is_empty());
    }

    #[test]
    fn product_fields_are_converted() {
        let store = InMemoryStore::new();
        let engine = ValidationEngine::new();
        let values = field_values([
            ("nome", " Caderno "),
            ("categoria", "papelaria"),
            ("preco", "12.90"),
            ("estoque", "7.9"),
        ]);

        let result = submit_product(&store, &engine, &values).unwrap();

        let product = &result.affected_products[0];
        assert_eq!(product.nome, "Caderno");
        assert_eq!(product.preco, 12.90);
        assert_eq!(product.estoque, 7);
        assert_eq!(product.categoria, "papelaria");
    }

    #[test]
    fn stock_beyond_integer_range_is_not_saved() {
        let store = InMemoryStore::new();
        let engine = ValidationEngine::new();
        let values = field_values([
            ("nome", "Caneta"),
            ("categoria", "papelaria"),
            ("preco", "2.5"),
            ("estoque", "1e30"),
        ]);

        let result = submit_product(&store, &engine, &values).unwrap();

        assert!(result.validation.as_ref().unwrap().all_valid);
        assert!(result.affected_products.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(result.messages[0].content, "Erro ao cadastrar produto!");
        assert!(store.get_all::<Product>().is_empty());
    }

    #[test]
    fn integer_keeps_large_in_range_values() {
        let values = field_values([("estoque", "9007199254740992")]);
        assert_eq!(integer(&values, "estoque"), Some(9_007_199_254_740_992));
        let values = field_values([("estoque", "-1e19")]);
        assert_eq!(integer(&values, "estoque"), None);
    }

    #[test]
    fn product_draft_defaults_blank_category() {
        let values = field_values([("nome", "Caderno"), ("preco", "1"), ("estoque", "0")]);
        let draft = product_draft(&values).unwrap();
        assert_eq!(draft.categoria, None);
    }

    #[test]
    fn contact_keeps_subject() {
        let store = InMemoryStore::new();
        let engine = ValidationEngine::new();
        let values = field_values([
            ("nome", "Rui"),
            ("email", "rui@x.com"),
            ("assunto", "suporte"),
            ("mensagem", "Meu pedido não chegou ainda."),
        ]);

        let result = submit_contact(&store, &engine, &values).unwrap();

        assert!(result.is_success());
        let msg = &result.affected_contacts[0];
        assert_eq!(msg.assunto.as_deref(), Some("suporte"));
        assert_eq!(store.get_all::<ContactMessage>().len(), 1);
    }

    #[test]
    fn storage_failure_becomes_error_notice() {
        let store = InMemoryStore::new();
        let engine = ValidationEngine::new();
        store.backend().set_simulate_write_error(true);

        let result = submit_user(&store, &engine, &ana()).unwrap();

        assert!(result.affected_users.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(result.messages[0].content, "Erro ao cadastrar usuário!");
    }
}
