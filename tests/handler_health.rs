mod common;

use std::sync::Arc;

#[tokio::test]
async fn test_health_without_cache() {
    let (state, _backends) = common::create_test_state(false);
    let server = common::create_test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["status"], "disabled");
}

#[tokio::test]
async fn test_health_with_cache() {
    let (state, _backends) = common::create_test_state(true);
    let server = common::create_test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_cache_down() {
    let state = common::state_from(
        Arc::new(aliaslink::infrastructure::persistence::InMemoryUrlRepository::new()),
        Some(Arc::new(common::FailingCache)),
    );
    let server = common::create_test_server(state);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["status"], "error");
}

#[tokio::test]
async fn test_health_database_down() {
    let state = common::state_from(Arc::new(common::UnreachableRepository), None);
    let server = common::create_test_server(state);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["database"]["status"], "error");
}
