use sql_data_provider::DbConn;
use sql_data_provider::test_utilities::{TestItem, insert_items};

pub struct ItemsDB {
    db: DbConn,
}

impl ItemsDB {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create_many(&self, items: impl IntoIterator<Item = TestItem>) -> Vec<i64> {
        insert_items(&self.db, items).await.unwrap()
    }
}
