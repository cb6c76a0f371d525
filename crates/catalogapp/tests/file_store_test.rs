use assert_matches::assert_matches;
use catalogapp::error::CatalogError;
use catalogapp::model::{
    ContactDraft, ContactMessage, Product, ProductDraft, ProductPatch, User, UserDraft,
};
use catalogapp::store::fs::FileStore;
use catalogapp::store::Snapshot;
use std::fs;
use tempfile::TempDir;

fn ana() -> UserDraft {
    UserDraft {
        nome: "Ana Silva".into(),
        email: "ana@x.com".into(),
        idade: 30,
        telefone: "11987654321".into(),
    }
}

fn caderno() -> ProductDraft {
    ProductDraft {
        nome: "Caderno".into(),
        preco: 12.9,
        estoque: 7,
        categoria: None,
    }
}

#[test]
fn test_init_writes_empty_collections() {
    let dir = TempDir::new().unwrap();
    let _store = FileStore::new(dir.path().to_path_buf());

    for key in ["catalogo_usuarios", "catalogo_produtos", "catalogo_contatos"] {
        let raw = fs::read_to_string(dir.path().join(format!("{}.json", key))).unwrap();
        assert_eq!(raw, "[]");
    }
}

#[test]
fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let created = {
        let store = FileStore::new(dir.path().to_path_buf());
        store.create::<User>(ana()).unwrap()
    };

    let store = FileStore::new(dir.path().to_path_buf());
    assert_eq!(store.get_all::<User>(), vec![created.clone()]);

    // A fresh generator still never reuses a stored id.
    let next = store.create::<User>(ana()).unwrap();
    assert!(next.id > created.id);
}

#[test]
fn test_default_category_and_update() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());

    let product = store.create::<Product>(caderno()).unwrap();
    assert_eq!(product.categoria, "geral");

    let updated = store
        .update::<Product>(
            product.id,
            ProductPatch {
                estoque: Some(5),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.estoque, 5);
    assert_eq!(updated.nome, "Caderno");
    assert!(updated.data_atualizacao >= product.data_atualizacao);
}

#[test]
fn test_malformed_collection_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    fs::write(dir.path().join("catalogo_produtos.json"), "{ broken").unwrap();

    assert!(store.get_all::<Product>().is_empty());
}

#[test]
fn test_export_import_between_directories() {
    let source_dir = TempDir::new().unwrap();
    let target_dir = TempDir::new().unwrap();
    let source = FileStore::new(source_dir.path().to_path_buf());
    source.create::<User>(ana()).unwrap();
    source
        .create::<ContactMessage>(ContactDraft {
            nome: "Rui".into(),
            email: "rui@x.com".into(),
            assunto: None,
            mensagem: "Quando chega o pedido?".into(),
        })
        .unwrap();

    let json = source.export_all().to_json().unwrap();
    let target = FileStore::new(target_dir.path().to_path_buf());
    target.create::<Product>(caderno()).unwrap();
    target.import_all(&Snapshot::from_json(&json).unwrap()).unwrap();

    assert_eq!(target.get_all::<User>(), source.get_all::<User>());
    assert_eq!(
        target.get_all::<ContactMessage>(),
        source.get_all::<ContactMessage>()
    );
    assert!(target.get_all::<Product>().is_empty());
}

#[test]
fn test_backup_restore_and_clear() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    assert_matches!(store.restore(), Err(CatalogError::BackupNotFound));

    store.create::<User>(ana()).unwrap();
    store.backup().unwrap();
    assert!(dir.path().join("catalogo_backup.json").is_file());

    store.clear_all().unwrap();
    assert_eq!(store.stats().user_count, 0);
    assert!(store.has_backup());

    store.restore().unwrap();
    assert_eq!(store.stats().user_count, 1);
}

#[test]
fn test_corrupt_backup_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    fs::write(dir.path().join("catalogo_backup.json"), "nope").unwrap();

    assert_matches!(store.restore(), Err(CatalogError::Serialization(_)));
}

#[test]
fn test_create_keeps_unreadable_collection_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    let path = dir.path().join("catalogo_usuarios.json");
    let legacy = r#"[{"id":1,"nome":"Ana","email":"ana@x.com","idade":30,"telefone":"11987654321","dataCriacao":"01/05/2024, 10:00:00","dataAtualizacao":"01/05/2024, 10:00:00"}]"#;
    fs::write(&path, legacy).unwrap();

    assert_matches!(
        store.create::<User>(ana()),
        Err(CatalogError::MalformedStoredData { .. })
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), legacy);
}
