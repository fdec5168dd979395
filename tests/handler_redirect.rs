mod common;

use axum_test::TestServer;
use serde_json::json;

fn server() -> TestServer {
    let state = common::create_test_state();
    TestServer::new(common::create_test_app(state)).unwrap()
}

#[tokio::test]
async fn test_redirect_round_trip() {
    let server = server();

    let created = server
        .post("/api/create")
        .add_header("Authorization", common::bearer())
        .json(&json!({ "original_url": "https://example.com/a", "shorthand": "x" }))
        .await;
    assert_eq!(created.status_code(), 201);

    let response = server.get("/x").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/a");
}

#[tokio::test]
async fn test_redirect_with_generated_shorthand() {
    let server = server();

    let created = server
        .post("/api/create")
        .add_header("Authorization", common::bearer())
        .json(&json!({ "original_url": "https://example.com/generated" }))
        .await;
    assert_eq!(created.status_code(), 201);

    let shorthand = created.json::<serde_json::Value>()["shorthand"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{shorthand}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/generated");
}

#[tokio::test]
async fn test_redirect_unknown_shorthand_fails() {
    let server = server();

    let response = server.get("/missing").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "The provided shorthand was not found." })
    );
}

#[tokio::test]
async fn test_redirect_requires_no_authorization() {
    let server = server();

    server
        .post("/api/create")
        .add_header("Authorization", common::bearer())
        .json(&json!({ "original_url": "https://example.com/a", "shorthand": "pub" }))
        .await;

    // No Authorization header on the redirect path.
    let response = server.get("/pub").await;
    assert_eq!(response.status_code(), 302);
}
