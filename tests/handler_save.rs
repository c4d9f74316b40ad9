mod common;

use aliaslink::domain::entities::UrlRecord;
use aliaslink::domain::repositories::UrlRepository;
use serde_json::json;

#[tokio::test]
async fn test_save_with_custom_alias() {
    let (state, backends) = common::create_test_state(true);
    let server = common::create_test_server(state);

    let response = server
        .post("/api/url")
        .add_header("Authorization", common::AUTH_HEADER)
        .json(&json!({ "url": "https://example.com", "alias": "docs" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["alias"], "docs");
    assert_eq!(json["url"], "https://example.com");

    assert_eq!(
        backends.repository.records(),
        vec![UrlRecord::new("docs", "https://example.com")]
    );
    let cache = backends.cache.unwrap();
    assert_eq!(
        cache.forward_entry("docs").await.as_deref(),
        Some("https://example.com")
    );
    assert_eq!(
        cache.reverse_entry("https://example.com").await.as_deref(),
        Some("docs")
    );
}

#[tokio::test]
async fn test_save_generates_alias() {
    let (state, backends) = common::create_test_state(false);
    let server = common::create_test_server(state);

    let response = server
        .post("/api/url")
        .add_header("Authorization", common::AUTH_HEADER)
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let alias = json["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));

    assert_eq!(
        backends.repository.get_url(alias).await.unwrap(),
        "https://example.com"
    );
}

#[tokio::test]
async fn test_save_empty_alias_generates_one() {
    let (state, _backends) = common::create_test_state(false);
    let server = common::create_test_server(state);

    let response = server
        .post("/api/url")
        .add_header("Authorization", common::AUTH_HEADER)
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["alias"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_save_duplicate_alias_conflict() {
    let (state, backends) = common::create_test_state(true);
    let server = common::create_test_server(state);

    server
        .post("/api/url")
        .add_header("Authorization", common::AUTH_HEADER)
        .json(&json!({ "url": "https://first.example.com", "alias": "dup" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/url")
        .add_header("Authorization", common::AUTH_HEADER)
        .json(&json!({ "url": "https://second.example.com", "alias": "dup" }))
        .await;

    assert_eq!(response.status_code(), 409);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["details"]["alias"], "dup");

    assert_eq!(
        backends.repository.get_url("dup").await.unwrap(),
        "https://first.example.com"
    );
}

#[tokio::test]
async fn test_save_invalid_url() {
    let (state, backends) = common::create_test_state(false);
    let server = common::create_test_server(state);

    let response = server
        .post("/api/url")
        .add_header("Authorization", common::AUTH_HEADER)
        .json(&json!({ "url": "not-a-url" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(backends.repository.is_empty());
}

#[tokio::test]
async fn test_save_invalid_alias_characters() {
    let (state, _backends) = common::create_test_state(false);
    let server = common::create_test_server(state);

    let response = server
        .post("/api/url")
        .add_header("Authorization", common::AUTH_HEADER)
        .json(&json!({ "url": "https://example.com", "alias": "no spaces" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_save_requires_auth() {
    let (state, backends) = common::create_test_state(false);
    let server = common::create_test_server(state);

    let response = server
        .post("/api/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(
        response.header("www-authenticate"),
        "Basic realm=\"aliaslink\""
    );
    assert!(backends.repository.is_empty());
}

#[tokio::test]
async fn test_save_wrong_password() {
    let (state, _backends) = common::create_test_state(false);
    let server = common::create_test_server(state);

    // admin:wrong
    let response = server
        .post("/api/url")
        .add_header("Authorization", "Basic YWRtaW46d3Jvbmc=")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_save_store_failure_is_internal_error() {
    let state = common::state_from(std::sync::Arc::new(common::UnreachableRepository), None);
    let server = common::create_test_server(state);

    let response = server
        .post("/api/url")
        .add_header("Authorization", common::AUTH_HEADER)
        .json(&json!({ "url": "https://example.com", "alias": "docs" }))
        .await;

    assert_eq!(response.status_code(), 500);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert!(!response.text().contains("database is down"));
}

#[tokio::test]
async fn test_save_response_carries_request_id() {
    let (state, _backends) = common::create_test_state(false);
    let server = common::create_test_server(state);

    let response = server
        .post("/api/url")
        .add_header("Authorization", common::AUTH_HEADER)
        .add_header("x-request-id", "req-42")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), "req-42");
}
