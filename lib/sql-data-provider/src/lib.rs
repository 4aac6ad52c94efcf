#![cfg_attr(feature = "strict", deny(warnings))]

use std::sync::Arc;

use grid_core::DataRepository;
use grid_core::repository::item_repository::ItemRepository;
use item::ItemProvider;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};

mod entity;
mod list_query_generic;
mod mapper;

pub mod item;

#[derive(Clone)]
pub struct DataLayer {
    // Used for tests for now
    #[allow(unused)]
    db: DatabaseConnection,
    item_repository: Arc<dyn ItemRepository>,
}

impl DataLayer {
    pub fn build(db: DbConn) -> Self {
        let item_repository = Arc::new(ItemProvider { db: db.clone() });

        Self {
            db,
            item_repository,
        }
    }
}

impl DataRepository for DataLayer {
    fn get_item_repository(&self) -> Arc<dyn ItemRepository> {
        self.item_repository.clone()
    }
}

pub type DbConn = DatabaseConnection;

/// Connects to the database and brings its schema up to date
pub async fn db_conn(database_url: impl Into<String>) -> Result<DbConn, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    let db = sea_orm::Database::connect(options).await?;

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(db)
}

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utilities;
