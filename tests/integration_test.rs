use catalog_store::brand_actor::BrandError;
use catalog_store::category_actor::CategoryError;
use catalog_store::config::{ActorConfig, StorageConfig};
use catalog_store::framework::{ActorClient, StorageKind};
use catalog_store::lifecycle::CatalogSystem;
use catalog_store::model::{
    BrandCreate, BrandId, BrandUpdate, CategoryCreate, CategoryId, ProductCreate, ProductUpdate,
    UserCreate, UserUpdate,
};
use catalog_store::product_actor::ProductError;
use catalog_store::user_actor::UserError;

/// Full end-to-end flow with all real actors: a category in use cannot be deleted until its
/// product is gone.
#[tokio::test]
async fn test_category_delete_blocked_until_product_removed() {
    let system = CatalogSystem::new(&ActorConfig::default());

    let tools = system
        .category_client
        .create(CategoryCreate::named("Tools"))
        .await
        .expect("Failed to create category");
    assert_eq!(tools.id, CategoryId(1));
    assert!(tools.active);

    let acme = system
        .brand_client
        .create(BrandCreate::named("Acme"))
        .await
        .expect("Failed to create brand");

    let hammer = system
        .product_client
        .create(ProductCreate::new("Hammer", 9.99, tools.id, acme.id))
        .await
        .expect("Failed to create product");
    assert_eq!(hammer.stock, 0);
    assert_eq!(hammer.category_id, tools.id);
    assert_eq!(hammer.brand_id, acme.id);

    let err = system.category_client.delete(tools.id).await.unwrap_err();
    assert_eq!(err, CategoryError::HasProducts("1".into()));
    assert!(system.category_client.get(tools.id).await.unwrap().is_some());

    let removed = system.product_client.delete(hammer.id).await.unwrap();
    assert_eq!(removed, hammer);

    let deleted = system
        .category_client
        .delete(tools.id)
        .await
        .expect("Category should be deletable once unused");
    assert_eq!(deleted, tools);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_brand_delete_conflict_and_missing() {
    let system = CatalogSystem::new(&ActorConfig::default());

    let tools = system
        .category_client
        .create(CategoryCreate::named("Tools"))
        .await
        .unwrap();
    let acme = system
        .brand_client
        .create(BrandCreate::named("Acme"))
        .await
        .unwrap();
    system
        .product_client
        .create(ProductCreate::new("Hammer", 9.99, tools.id, acme.id))
        .await
        .unwrap();

    assert_eq!(
        system.brand_client.delete(acme.id).await.unwrap_err(),
        BrandError::HasProducts(acme.id.to_string())
    );
    assert_eq!(
        system.brand_client.delete(BrandId(99)).await.unwrap_err(),
        BrandError::NotFound("99".into())
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_product_references_must_exist() {
    let system = CatalogSystem::new(&ActorConfig::default());

    let tools = system
        .category_client
        .create(CategoryCreate::named("Tools"))
        .await
        .unwrap();
    let acme = system
        .brand_client
        .create(BrandCreate::named("Acme"))
        .await
        .unwrap();

    let err = system
        .product_client
        .create(ProductCreate::new("Hammer", 9.99, CategoryId(7), acme.id))
        .await
        .unwrap_err();
    assert_eq!(err, ProductError::CategoryNotFound("7".into()));

    let err = system
        .product_client
        .create(ProductCreate::new("Hammer", 9.99, tools.id, BrandId(8)))
        .await
        .unwrap_err();
    assert_eq!(err, ProductError::BrandNotFound("8".into()));

    // failed creates did not consume ids
    let hammer = system
        .product_client
        .create(ProductCreate::new("Hammer", 9.99, tools.id, acme.id))
        .await
        .unwrap();
    assert_eq!(hammer.id.0, 1);

    let err = system
        .product_client
        .patch(
            hammer.id,
            ProductUpdate {
                brand_id: Some(BrandId(8)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, ProductError::BrandNotFound("8".into()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_products_by_category_and_brand() {
    let system = CatalogSystem::new(&ActorConfig::default());

    let tools = system
        .category_client
        .create(CategoryCreate::named("Tools"))
        .await
        .unwrap();
    let garden = system
        .category_client
        .create(CategoryCreate::named("Garden"))
        .await
        .unwrap();
    let acme = system
        .brand_client
        .create(BrandCreate::named("Acme"))
        .await
        .unwrap();
    let globex = system
        .brand_client
        .create(BrandCreate::named("Globex"))
        .await
        .unwrap();

    for (name, category, brand) in [
        ("Hammer", tools.id, acme.id),
        ("Rake", garden.id, acme.id),
        ("Wrench", tools.id, globex.id),
    ] {
        system
            .product_client
            .create(ProductCreate::new(name, 5.0, category, brand))
            .await
            .unwrap();
    }

    let in_tools: Vec<_> = system
        .product_client
        .list_by_category(tools.id)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(in_tools, ["Hammer", "Wrench"]);

    let by_acme: Vec<_> = system
        .product_client
        .list_by_brand(acme.id)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(by_acme, ["Hammer", "Rake"]);

    assert!(system
        .product_client
        .list_by_brand(BrandId(42))
        .await
        .unwrap()
        .is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let system = CatalogSystem::new(&ActorConfig::default());

    let alice = system
        .user_client
        .create(UserCreate::new("Alice", "a@x.com"))
        .await
        .unwrap();
    assert!(alice.active);

    let err = system
        .user_client
        .create(UserCreate::new("Another Alice", "a@x.com"))
        .await
        .unwrap_err();
    assert_eq!(err, UserError::EmailInUse("a@x.com".into()));

    let bob = system
        .user_client
        .create(UserCreate::new("Bob", "b@x.com"))
        .await
        .unwrap();

    // taking an existing email through an update is rejected too
    let err = system
        .user_client
        .patch(
            bob.id,
            UserUpdate {
                email: Some("a@x.com".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, UserError::EmailInUse("a@x.com".into()));

    // keeping one's own email is fine
    let renamed = system
        .user_client
        .patch(
            alice.id,
            UserUpdate {
                name: Some("Alice Liddell".into()),
                email: Some("a@x.com".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Alice Liddell");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_brand_patch_semantics() {
    let system = CatalogSystem::new(&ActorConfig::default());

    let acme = system
        .brand_client
        .create(BrandCreate::named("Acme"))
        .await
        .unwrap();

    let err = system
        .brand_client
        .patch(
            acme.id,
            BrandUpdate {
                brand_name: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BrandError::ValidationError(_)));

    let patched = system
        .brand_client
        .patch(
            acme.id,
            BrandUpdate {
                description: Some("new".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(patched.brand_name, "Acme");
    assert_eq!(patched.description, "new");
    assert_eq!(patched.id, acme.id);

    let unchanged = system
        .brand_client
        .patch(acme.id, BrandUpdate::default())
        .await
        .unwrap();
    assert_eq!(unchanged, patched);

    // PUT needs the name, and keeps optional fields it does not mention
    let err = system
        .brand_client
        .update(
            acme.id,
            BrandUpdate {
                active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BrandError::ValidationError(_)));

    let replaced = system
        .brand_client
        .update(
            acme.id,
            BrandUpdate {
                brand_name: Some("Acme Corp".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(replaced.brand_name, "Acme Corp");
    assert_eq!(replaced.description, "new");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let system = CatalogSystem::new(&ActorConfig::default());

    let acme = system
        .brand_client
        .create(BrandCreate::named("Acme"))
        .await
        .unwrap();
    system.brand_client.delete(acme.id).await.unwrap();

    assert_eq!(
        system.brand_client.delete(acme.id).await.unwrap_err(),
        BrandError::NotFound(acme.id.to_string())
    );

    // ids are not reused after a delete
    let next = system
        .brand_client
        .create(BrandCreate::named("Globex"))
        .await
        .unwrap();
    assert_eq!(next.id, BrandId(2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_json_backend_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageConfig {
        backend: StorageKind::Json,
        data_dir: dir.path().to_path_buf(),
    };
    let actors = ActorConfig::default();

    let system = CatalogSystem::start(&storage, &actors).unwrap();
    let tools = system
        .category_client
        .create(CategoryCreate::named("Tools"))
        .await
        .unwrap();
    let acme = system
        .brand_client
        .create(BrandCreate::named("Acme"))
        .await
        .unwrap();
    let scrap = system
        .brand_client
        .create(BrandCreate::named("Scrap"))
        .await
        .unwrap();
    system.brand_client.delete(scrap.id).await.unwrap();
    let hammer = system
        .product_client
        .create(ProductCreate::new("Hammer", 9.99, tools.id, acme.id))
        .await
        .unwrap();
    system.shutdown().await.unwrap();

    assert!(dir.path().join("brands.json").exists());

    let system = CatalogSystem::start(&storage, &actors).unwrap();
    assert_eq!(
        system.product_client.get(hammer.id).await.unwrap(),
        Some(hammer)
    );
    assert_eq!(system.brand_client.list().await.unwrap(), vec![acme.clone()]);

    // the id sequence survives as well
    let globex = system
        .brand_client
        .create(BrandCreate::named("Globex"))
        .await
        .unwrap();
    assert_eq!(globex.id, BrandId(3));

    // and so do the reference rules
    assert!(matches!(
        system.brand_client.delete(acme.id).await,
        Err(BrandError::HasProducts(_))
    ));

    system.shutdown().await.unwrap();
}
