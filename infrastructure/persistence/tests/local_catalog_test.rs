use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, ProductPatch};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{Price, ProductId};
use persistence::local::repository::ProductRepositoryJson;

fn new_product(title: &str) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        description: "Made to order".to_string(),
        price: Price::new(9000.0).unwrap(),
        image_url: "https://images.example.com/new.jpeg".to_string(),
    }
}

#[tokio::test]
async fn should_seed_starter_catalog_on_first_use() {
    let dir = tempfile::tempdir().unwrap();
    let repo = ProductRepositoryJson::new(dir.path().join("products.json"));

    let products = repo.list_newest_first().await.unwrap();

    assert_eq!(products.len(), 12);
    assert_eq!(products[0].title, "Boho Crochet Tote Bag");
    assert!(repo.path().exists());
}

#[tokio::test]
async fn should_restore_starter_catalog_when_file_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");
    std::fs::write(&path, b"{ not json").unwrap();
    let repo = ProductRepositoryJson::new(&path);

    let products = repo.list_newest_first().await.unwrap();

    assert_eq!(products.len(), 12);
}

#[tokio::test]
async fn should_assign_id_and_timestamp_on_insert() {
    let dir = tempfile::tempdir().unwrap();
    let repo = ProductRepositoryJson::new(dir.path().join("products.json"));

    let created = repo.insert(&new_product("Granny Square Bag")).await.unwrap();

    assert!(!created.id.as_str().is_empty());
    let products = repo.list_newest_first().await.unwrap();
    assert_eq!(products.len(), 13);
    assert_eq!(products[0], created);
}

#[tokio::test]
async fn should_persist_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("products.json");

    let created = ProductRepositoryJson::new(&path)
        .insert(&new_product("Granny Square Bag"))
        .await
        .unwrap();

    let reopened = ProductRepositoryJson::new(&path);
    let products = reopened.list_newest_first().await.unwrap();
    assert!(products.iter().any(|p| p.id == created.id));
}

#[tokio::test]
async fn should_update_only_patched_fields() {
    let dir = tempfile::tempdir().unwrap();
    let repo = ProductRepositoryJson::new(dir.path().join("products.json"));
    let created = repo.insert(&new_product("Granny Square Bag")).await.unwrap();

    let updated = repo
        .update(
            &created.id,
            &ProductPatch {
                price: Some(Price::new(9900.0).unwrap()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price.amount(), 9900.0);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.image_url, created.image_url);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn should_report_not_found_when_updating_unknown_id() {
    let dir = tempfile::tempdir().unwrap();
    let repo = ProductRepositoryJson::new(dir.path().join("products.json"));

    let result = repo
        .update(
            &ProductId::new("missing"),
            &ProductPatch {
                title: Some("Anything".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn should_delete_idempotently() {
    let dir = tempfile::tempdir().unwrap();
    let repo = ProductRepositoryJson::new(dir.path().join("products.json"));
    let created = repo.insert(&new_product("Granny Square Bag")).await.unwrap();

    repo.delete(&created.id).await.unwrap();
    repo.delete(&created.id).await.unwrap();

    let products = repo.list_newest_first().await.unwrap();
    assert_eq!(products.len(), 12);
    assert!(products.iter().all(|p| p.id != created.id));
}
