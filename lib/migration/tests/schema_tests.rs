#![allow(clippy::unwrap_used)]

use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use sea_orm_migration::SchemaManager;

#[tokio::test]
async fn test_db_schema_item() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(manager.has_table("item").await.unwrap());

    for column in [
        "id",
        "brand",
        "code",
        "core_material",
        "finish",
        "name",
        "company_id",
        "custom",
        "created_date",
    ] {
        assert!(
            manager.has_column("item", column).await.unwrap(),
            "missing column {column}"
        );
    }

    assert!(
        manager
            .has_index("item", "index-Item-CompanyId-Custom")
            .await
            .unwrap()
    );
    assert!(manager.has_index("item", "index-Item-Name").await.unwrap());
}

#[tokio::test]
async fn test_db_schema_down_drops_item() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Migrator::down(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(!manager.has_table("item").await.unwrap());
}

#[tokio::test]
async fn test_db_schema_migration_status() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    assert_eq!(Migrator::get_pending_migrations(&db).await.unwrap().len(), 1);

    Migrator::up(&db, None).await.unwrap();

    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
    assert_eq!(Migrator::get_applied_migrations(&db).await.unwrap().len(), 1);
}
