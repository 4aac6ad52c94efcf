use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_health_check() {
    let context = TestContext::new().await;

    let resp = context.api.other.health().await;

    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn test_build_info() {
    let context = TestContext::new().await;

    let resp = context.api.other.build_info().await;

    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["name"], "core-server");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_metrics() {
    let context = TestContext::new().await;

    let resp = context.api.other.metrics().await;

    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_openapi_document_lists_item_endpoints() {
    let context = TestContext::new().await;

    let resp = context.api.other.openapi().await;

    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert!(body["paths"]["/api/item/v1/rows"]["post"].is_object());
    assert!(body["paths"]["/api/item/v1"]["get"].is_object());
}

#[tokio::test]
async fn test_technical_endpoints_disabled() {
    let context = TestContext::new_with_config(Some(
        indoc::indoc! {"
            app:
                enableMetrics: false
                enableServerInfo: false
                enableOpenApi: false
        "}
        .to_string(),
    ))
    .await;

    assert_eq!(context.api.other.health().await.status(), 404);
    assert_eq!(context.api.other.metrics().await.status(), 404);
    assert_eq!(context.api.other.openapi().await.status(), 404);
}
