use serde_json::{Value, json};

use super::{HttpClient, Response};

pub struct ItemsApi {
    client: HttpClient,
}

impl ItemsApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn rows(
        &self,
        start_row: i64,
        end_row: i64,
        sort_model: Value,
        filter_model: Value,
    ) -> Response {
        let body = json!({
            "startRow": start_row,
            "endRow": end_row,
            "sortModel": sort_model,
            "filterModel": filter_model,
        });

        self.client.post("/api/item/v1/rows", body).await
    }

    pub async fn rows_raw(&self, body: &'static str) -> Response {
        self.client.post_raw("/api/item/v1/rows", body).await
    }

    pub async fn list(&self, query: &str) -> Response {
        self.client.get(&format!("/api/item/v1?{query}")).await
    }
}
