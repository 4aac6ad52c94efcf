use sql_data_provider::DbConn;

use self::items::ItemsDB;

pub mod items;

pub struct DbClient {
    pub items: ItemsDB,
}

impl DbClient {
    pub fn new(db: DbConn) -> Self {
        Self {
            items: ItemsDB::new(db),
        }
    }
}
