//! Mood listing endpoint tests

use crate::common::TestApp;

#[tokio::test]
async fn test_moods_lists_six_entries_in_order() {
    let app = TestApp::new().await;

    let response = app.client.get(app.url("/moods")).send().await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let moods = body["moods"].as_array().unwrap();
    let ids: Vec<&str> = moods.iter().map(|m| m["id"].as_str().unwrap()).collect();

    assert_eq!(ids, vec!["sad", "relaxed", "business", "tech", "happy", "funny"]);
}

#[tokio::test]
async fn test_moods_entries_have_name_and_description() {
    let app = TestApp::new().await;

    let body: serde_json::Value = app
        .client
        .get(app.url("/moods"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let tech = &body["moods"][3];
    assert_eq!(tech["id"], "tech");
    assert_eq!(tech["name"], "Tech");
    assert_eq!(tech["description"], "Technical and knowledgeable guidance");
    assert_eq!(tech.as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn test_moods_is_stable_across_calls() {
    let app = TestApp::new().await;

    let first: serde_json::Value = app.client.get(app.url("/moods")).send().await.unwrap().json().await.unwrap();
    let second: serde_json::Value = app.client.get(app.url("/moods")).send().await.unwrap().json().await.unwrap();

    assert_eq!(first, second);
}
