//! Liveness endpoint tests

use crate::common::{FakeBackend, TestApp};

#[tokio::test]
async fn test_health_returns_200() {
    let app = TestApp::new().await;

    let response = app.client.get(app.url("/health")).send().await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_health_returns_json_status() {
    let app = TestApp::new().await;

    let response = app.client.get(app.url("/health")).send().await.unwrap();

    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().contains("application/json"));

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "MoodBot Backend");
}

#[tokio::test]
async fn test_root_returns_running_message() {
    let app = TestApp::new().await;

    let response = app.client.get(app.url("/")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "MoodBot Backend is running!");
}

#[tokio::test]
async fn test_liveness_ignores_backend_state() {
    // Backend fails every call; liveness must not notice
    let app = TestApp::with_backend(FakeBackend::failing()).await;

    let health = app.client.get(app.url("/health")).send().await.unwrap();
    let root = app.client.get(app.url("/")).send().await.unwrap();

    assert_eq!(health.status(), 200);
    assert_eq!(root.status(), 200);
    assert_eq!(app.backend.calls(), 0);
}

#[tokio::test]
async fn test_multiple_apps_can_run_concurrently() {
    let app1 = TestApp::new().await;
    let app2 = TestApp::new().await;

    assert_ne!(app1.address, app2.address);

    let response1 = app1.client.get(app1.url("/health")).send().await.unwrap();
    let response2 = app2.client.get(app2.url("/health")).send().await.unwrap();

    assert_eq!(response1.status(), 200);
    assert_eq!(response2.status(), 200);
}
