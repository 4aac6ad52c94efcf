use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::entity::item;
use crate::{DataLayer, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

#[derive(Clone, Debug, Default)]
pub struct TestItem {
    pub brand: Option<String>,
    pub code: Option<String>,
    pub core_material: Option<String>,
    pub finish: Option<String>,
    pub name: Option<String>,
    pub company_id: i64,
    pub custom: bool,
}

impl TestItem {
    pub fn named(name: &str, company_id: i64) -> Self {
        Self {
            name: Some(name.to_owned()),
            company_id,
            ..Default::default()
        }
    }
}

pub async fn insert_item(db: &DatabaseConnection, item: TestItem) -> Result<i64, DbErr> {
    let model = item::ActiveModel {
        brand: Set(item.brand),
        code: Set(item.code),
        core_material: Set(item.core_material),
        finish: Set(item.finish),
        name: Set(item.name),
        company_id: Set(item.company_id),
        custom: Set(item.custom),
        created_date: Set(get_dummy_date()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(model.id)
}

pub async fn insert_items(
    db: &DatabaseConnection,
    items: impl IntoIterator<Item = TestItem>,
) -> Result<Vec<i64>, DbErr> {
    let mut ids = vec![];
    for item in items {
        ids.push(insert_item(db, item).await?);
    }
    Ok(ids)
}

pub async fn setup_test_data_layer_and_connection_with_custom_url(
    database_url: &str,
) -> Result<DataLayer, DbErr> {
    let db_conn = db_conn(database_url).await?;
    Ok(DataLayer::build(db_conn))
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    setup_test_data_layer_and_connection_with_custom_url("sqlite::memory:")
        .await
        .expect("in-memory database")
}
