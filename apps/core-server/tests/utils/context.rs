use core_server::router::start_server;
use tokio::task::JoinHandle;

use super::api_clients::Client;
use super::db_clients::DbClient;
use crate::fixtures;

pub struct TestContext {
    pub db: DbClient,
    pub api: Client,
    _handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::new_with_config(None).await
    }

    pub async fn new_with_config(additional_config: Option<String>) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let config = fixtures::create_config(additional_config);
        let db = fixtures::create_db(&config).await;
        let _handle = tokio::spawn({
            let db = db.clone();
            async move { start_server(listener, config, db).await }
        });

        Self {
            db: DbClient::new(db),
            api: Client::new(base_url),
            _handle,
        }
    }

    /// Context with `count` generated items, see [`fixtures::item`]
    pub async fn new_with_items(count: usize) -> (Self, Vec<i64>) {
        let context = Self::new().await;
        let ids = context
            .db
            .items
            .create_many((0..count).map(fixtures::item))
            .await;
        (context, ids)
    }
}
