mod common;

use serde_json::json;

#[tokio::test]
async fn test_health_reports_link_count() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/health").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["links"], 0);

    server
        .post("/shorten")
        .json(&json!({ "urls": ["https://a.com", "https://b.com"] }))
        .await
        .assert_status_ok();

    let json = server.get("/health").await.json::<serde_json::Value>();
    assert_eq!(json["links"], 2);
}

#[tokio::test]
async fn test_unknown_route_returns_json_not_found() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/a/b/c").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}
