use serde_json::Value;
use similar_asserts::assert_eq;
use sql_data_provider::test_utilities::TestItem;

use crate::utils::context::TestContext;

fn value_ids(body: &Value) -> Vec<i64> {
    body["values"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["nItemID"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_get_item_list_pages() {
    // GIVEN
    let (context, ids) = TestContext::new_with_items(25).await;

    // WHEN
    let resp = context.api.items.list("page=2&pageSize=10").await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["totalItems"], 25);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(value_ids(&body), ids[20..].to_vec());
}

#[tokio::test]
async fn test_get_item_list_sorted_and_filtered_by_name() {
    // GIVEN
    let context = TestContext::new().await;
    let ids = context
        .db
        .items
        .create_many([
            TestItem::named("oak board", 113),
            TestItem::named("pine board", 113),
            TestItem::named("oak veneer", 113),
            TestItem::named("board of oak", 113),
        ])
        .await;

    // WHEN
    let resp = context
        .api
        .items
        .list("page=0&pageSize=10&sort=sName&sortDirection=DESC&name=oak")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["totalItems"], 2);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(value_ids(&body), vec![ids[2], ids[0]]);
}

#[tokio::test]
async fn test_get_item_list_invalid_page_size() {
    // GIVEN
    let context = TestContext::new().await;

    for query in ["page=0&pageSize=0", "page=0&pageSize=1001"] {
        // WHEN
        let resp = context.api.items.list(query).await;

        // THEN
        assert_eq!(resp.status(), 400);
        let body = resp.json_value().await;
        assert_eq!(body["code"], "BR_0093");
        assert_eq!(body["error"], "Invalid page size");
    }
}

#[tokio::test]
async fn test_get_item_list_invalid_query() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .items
        .list("page=0&pageSize=10&sortDirection=UP")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0084");
}
