use serde_json::{Value, json};
use similar_asserts::assert_eq;
use sql_data_provider::test_utilities::TestItem;

use crate::utils::context::TestContext;

fn row_ids(body: &Value) -> Vec<i64> {
    body["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["nItemID"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_get_item_rows_first_window() {
    // GIVEN
    let (context, ids) = TestContext::new_with_items(120).await;

    // WHEN
    let resp = context.api.items.rows(0, 50, json!([]), json!({})).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["lastRow"], 120);
    assert_eq!(row_ids(&body), ids[..50].to_vec());
    assert_eq!(body["rows"][0]["sName"], "item 0");
    assert_eq!(body["rows"][0]["sCode"], "C-000");
}

#[tokio::test]
async fn test_get_item_rows_last_partial_window() {
    // GIVEN
    let (context, ids) = TestContext::new_with_items(120).await;

    // WHEN
    let resp = context.api.items.rows(100, 150, json!([]), json!({})).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["lastRow"], 120);
    assert_eq!(row_ids(&body), ids[100..].to_vec());
}

#[tokio::test]
async fn test_get_item_rows_window_past_the_end() {
    // GIVEN
    let (context, _) = TestContext::new_with_items(120).await;

    // WHEN
    let resp = context.api.items.rows(200, 250, json!([]), json!({})).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["rows"], json!([]));
    assert_eq!(body["lastRow"], 200);
}

#[tokio::test]
async fn test_get_item_rows_inverted_window() {
    // GIVEN
    let (context, _) = TestContext::new_with_items(30).await;

    // WHEN
    let resp = context.api.items.rows(20, 10, json!([]), json!({})).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["rows"], json!([]));
    assert_eq!(body["lastRow"], 30);
}

#[tokio::test]
async fn test_get_item_rows_is_idempotent() {
    // GIVEN
    let (context, _) = TestContext::new_with_items(60).await;
    let sort_model = json!([{ "colId": "sBrand", "sort": "desc" }]);
    let filter_model = json!({ "sCoreMaterial": { "filterType": "text", "type": "equals", "filter": "oak" } });

    // WHEN
    let first = context
        .api
        .items
        .rows(0, 20, sort_model.clone(), filter_model.clone())
        .await
        .json_value()
        .await;
    let second = context
        .api
        .items
        .rows(0, 20, sort_model, filter_model)
        .await
        .json_value()
        .await;

    // THEN
    assert_eq!(first, second);
    assert_eq!(first["lastRow"], 30);
}

#[tokio::test]
async fn test_get_item_rows_malformed_filters_return_all_rows() {
    // GIVEN
    let (context, _) = TestContext::new_with_items(30).await;

    // WHEN
    let resp = context
        .api
        .items
        .rows(
            0,
            100,
            json!(["sName", { "colId": "sColour", "sort": "desc" }]),
            json!({
                "nItemID": { "filterType": "number", "type": "equals", "filter": "abc" },
                "sName": { "filterType": "text", "type": "fuzzy", "filter": "item" },
                "sColour": { "filterType": "text", "type": "contains", "filter": "red" },
                "sCode": null,
                "quickFilter": "  "
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["rows"].as_array().unwrap().len(), 30);
    assert_eq!(body["lastRow"], 30);
}

#[tokio::test]
async fn test_get_item_rows_mistyped_models_return_all_rows() {
    // GIVEN
    let (context, _) = TestContext::new_with_items(30).await;

    // WHEN
    let swapped = context
        .api
        .items
        .rows(0, 100, json!({ "colId": "sName" }), json!([]))
        .await;
    let scalars = context
        .api
        .items
        .rows_raw(r#"{"startRow":0,"endRow":100,"sortModel":"sName","filterModel":"garbage"}"#)
        .await;

    // THEN
    for resp in [swapped, scalars] {
        assert_eq!(resp.status(), 200);
        let body = resp.json_value().await;
        assert_eq!(body["rows"].as_array().unwrap().len(), 30);
        assert_eq!(body["lastRow"], 30);
    }
}

#[tokio::test]
async fn test_get_item_rows_text_contains_and_complement() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .db
        .items
        .create_many([
            TestItem::named("abc board", 113),
            TestItem::named("xabcx", 113),
            TestItem::named("plain", 113),
            TestItem::default(),
        ])
        .await;

    // WHEN
    let contains = context
        .api
        .items
        .rows(
            0,
            100,
            json!([]),
            json!({ "sName": { "filterType": "text", "type": "contains", "filter": "abc" } }),
        )
        .await
        .json_value()
        .await;
    let not_contains = context
        .api
        .items
        .rows(
            0,
            100,
            json!([]),
            json!({ "sName": { "type": "notContains", "filter": "abc" } }),
        )
        .await
        .json_value()
        .await;

    // THEN
    assert_eq!(contains["lastRow"], 2);
    assert_eq!(contains["rows"][0]["sName"], "abc board");
    assert_eq!(contains["rows"][1]["sName"], "xabcx");

    assert_eq!(not_contains["lastRow"], 1);
    assert_eq!(not_contains["rows"][0]["sName"], "plain");
}

#[tokio::test]
async fn test_get_item_rows_number_in_range() {
    // GIVEN
    let (context, ids) = TestContext::new_with_items(30).await;

    // WHEN
    let resp = context
        .api
        .items
        .rows(
            0,
            100,
            json!([]),
            json!({
                "nItemID": { "filterType": "number", "type": "inRange", "filter": 10, "filterTo": "20" }
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    let expected: Vec<i64> = ids.into_iter().filter(|id| (10..=20).contains(id)).collect();
    assert_eq!(row_ids(&body), expected);
    assert_eq!(body["lastRow"], 11);
}

#[tokio::test]
async fn test_get_item_rows_quick_filter_matches_text_and_id() {
    // GIVEN
    let (context, ids) = TestContext::new_with_items(50).await;
    let id_42 = ids[41];

    // WHEN
    let resp = context
        .api
        .items
        .rows(0, 100, json!([]), json!({ "quickFilter": format!(" {id_42} ") }))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert!(row_ids(&body).contains(&id_42));
    for row in body["rows"].as_array().unwrap() {
        let matches_text = ["sBrand", "sCode", "sCoreMaterial", "sFinish", "sName"]
            .iter()
            .any(|column| {
                row[column]
                    .as_str()
                    .is_some_and(|value| value.contains(&id_42.to_string()))
            });
        assert!(matches_text || row["nItemID"] == id_42);
    }
}

#[tokio::test]
async fn test_get_item_rows_sorting() {
    // GIVEN
    let context = TestContext::new().await;
    let ids = context
        .db
        .items
        .create_many([
            TestItem::named("b", 113),
            TestItem::named("a", 113),
            TestItem::named("c", 113),
            TestItem::named("a", 113),
        ])
        .await;

    // WHEN
    let resp = context
        .api
        .items
        .rows(0, 10, json!([{ "colId": "sName", "sort": "desc" }]), json!({}))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(row_ids(&body), vec![ids[2], ids[0], ids[1], ids[3]]);
}

#[tokio::test]
async fn test_get_item_rows_scope_from_config() {
    // GIVEN
    let context = TestContext::new_with_config(Some(
        indoc::indoc! {"
            item:
                companyId: 7
                includeCustom: false
        "}
        .to_string(),
    ))
    .await;
    context
        .db
        .items
        .create_many([
            TestItem::named("visible", 7),
            TestItem {
                custom: true,
                ..TestItem::named("custom", 7)
            },
            TestItem::named("other company", 113),
        ])
        .await;

    // WHEN
    let resp = context.api.items.rows(0, 10, json!([]), json!({})).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["lastRow"], 1);
    assert_eq!(body["rows"][0]["sName"], "visible");
}

#[tokio::test]
async fn test_get_item_rows_missing_window_is_empty() {
    // GIVEN
    let (context, _) = TestContext::new_with_items(5).await;

    // WHEN
    let resp = context.api.items.rows_raw("{}").await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["rows"], json!([]));
    assert_eq!(body["lastRow"], 5);
}

#[tokio::test]
async fn test_get_item_rows_invalid_body() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let not_json = context.api.items.rows_raw("startRow=0").await;
    let not_integer = context
        .api
        .items
        .rows_raw(r#"{ "startRow": "zero", "endRow": 10 }"#)
        .await;

    // THEN
    assert_eq!(not_json.status(), 400);
    let body = not_json.json_value().await;
    assert_eq!(body["code"], "BR_0084");
    assert!(body["error"].is_string());

    assert_eq!(not_integer.status(), 400);
    assert_eq!(not_integer.json_value().await["code"], "BR_0084");
}
