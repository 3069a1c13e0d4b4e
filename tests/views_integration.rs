use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use vitrine::{
    Config, ContentApiConfig, content::MemoryContentSource, create_app_with_source,
    views::CreatedView,
};

fn setup_test_server() -> TestServer {
    let source = MemoryContentSource::new()
        .with_record(
            "7",
            json!({
                "id": 7,
                "title": "Expo",
                "description": "Pavilion walkthrough",
                "publishedAt": "2024-03-12T10:00:00Z",
                "image": "/img/a.jpg",
                "photos": [{"image": "/img/b.jpg"}, {"image": "/img/a.jpg"}]
            }),
        )
        .with_record(
            "8",
            json!({"data": {"id": 8, "title": "Empty room", "photos": []}}),
        );

    let config = Config {
        content: ContentApiConfig {
            asset_host: "https://cms.example.org/".to_string(),
            ..ContentApiConfig::default()
        },
        ..Config::default()
    };

    let app = create_app_with_source(config, Arc::new(source));
    TestServer::new(app).unwrap()
}

async fn mount(server: &TestServer, body: Value) -> String {
    let response = server.post("/views").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<CreatedView>().view_id.to_string()
}

async fn command(server: &TestServer, view_id: &str, body: Value) -> Value {
    let response = server
        .post(&format!("/views/{}/commands", view_id))
        .json(&body)
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

#[tokio::test]
async fn test_mount_renders_record() {
    let server = setup_test_server();
    let view_id = mount(&server, json!({"id": "7"})).await;

    let response = server.get(&format!("/views/{}", view_id)).await;
    response.assert_status_ok();
    let view = response.json::<Value>();

    assert_eq!(view["title"], "Expo");
    assert_eq!(view["locale"], "ru");
    assert_eq!(view["date"], "12 марта 2024");
    assert_eq!(view["photo_count"], "2 фотографии");
    assert_eq!(
        view["hero"],
        json!({"kind": "url", "url": "https://cms.example.org/img/a.jpg"})
    );
    assert_eq!(view["images"].as_array().unwrap().len(), 2);
    assert_eq!(view["images"][1]["cell"], "skeleton");
    assert_eq!(view["lightbox"], Value::Null);
    assert_eq!(view["status"], json!({"state": "ready"}));
    assert_eq!(view["can_retry"], false);
}

#[tokio::test]
async fn test_mount_with_language() {
    let server = setup_test_server();
    let view_id = mount(&server, json!({"id": "7", "lang": "en-US"})).await;

    let view = server
        .get(&format!("/views/{}", view_id))
        .await
        .json::<Value>();
    assert_eq!(view["locale"], "en");
    assert_eq!(view["date"], "March 12, 2024");
    assert_eq!(view["photo_count"], "2 photos");
}

#[tokio::test]
async fn test_lightbox_commands() {
    let server = setup_test_server();
    let view_id = mount(&server, json!({"id": "7"})).await;

    let view = command(&server, &view_id, json!({"command": "open_at", "index": 1})).await;
    assert_eq!(view["lightbox"]["position"], "2 / 2");
    assert_eq!(
        view["lightbox"]["source"]["url"],
        "https://cms.example.org/img/b.jpg"
    );

    let view = command(&server, &view_id, json!({"command": "key", "key": "ArrowRight"})).await;
    assert_eq!(view["lightbox"]["index"], 0);

    let view = command(&server, &view_id, json!({"command": "prev"})).await;
    assert_eq!(view["lightbox"]["index"], 1);

    let view = command(&server, &view_id, json!({"command": "key", "key": "Tab"})).await;
    assert_eq!(view["lightbox"]["index"], 1);

    let view = command(&server, &view_id, json!({"command": "key", "key": "Escape"})).await;
    assert_eq!(view["lightbox"], Value::Null);

    // Keys are ignored once the lightbox is closed.
    let view = command(&server, &view_id, json!({"command": "key", "key": "ArrowLeft"})).await;
    assert_eq!(view["lightbox"], Value::Null);
}

#[tokio::test]
async fn test_image_load_commands() {
    let server = setup_test_server();
    let view_id = mount(&server, json!({"id": "7"})).await;

    command(&server, &view_id, json!({"command": "image_loaded", "index": 0})).await;
    let view = command(&server, &view_id, json!({"command": "image_failed", "index": 1})).await;

    assert_eq!(view["images"][0]["cell"], "loaded");
    assert_eq!(view["images"][1]["cell"], "placeholder");

    let view = command(&server, &view_id, json!({"command": "image_loaded", "index": 1})).await;
    assert_eq!(view["images"][1]["cell"], "placeholder");
}

#[tokio::test]
async fn test_empty_gallery_hides_strip() {
    let server = setup_test_server();
    let view_id = mount(&server, json!({"id": "8"})).await;

    let view = command(&server, &view_id, json!({"command": "open_at", "index": 0})).await;
    assert_eq!(view["title"], "Empty room");
    assert_eq!(view["photo_count"], Value::Null);
    assert_eq!(view["hero"], json!({"kind": "no_image"}));
    assert_eq!(view["lightbox"], Value::Null);
    assert_eq!(view["date"], "Дата не указана");
}

#[tokio::test]
async fn test_navigate_to_missing_record_falls_back() {
    let server = setup_test_server();
    let view_id = mount(&server, json!({"id": "7"})).await;
    command(&server, &view_id, json!({"command": "open_at", "index": 0})).await;

    let response = server
        .post(&format!("/views/{}/navigate", view_id))
        .json(&json!({"id": "99", "lang": "ky"}))
        .await;
    response.assert_status_ok();
    let view = response.json::<Value>();

    assert_eq!(view["id"], "99");
    assert_eq!(view["title"], "");
    assert_eq!(view["locale"], "kg");
    assert_eq!(
        view["status"],
        json!({"state": "failed", "error": "network_failure"})
    );
    assert_eq!(view["error"], "network_failure");
    assert_eq!(view["can_retry"], true);
    assert_eq!(view["lightbox"], Value::Null);
    assert!(view["images"].as_array().unwrap().is_empty());
    assert!(view["description"].is_string());

    let view = command(&server, &view_id, json!({"command": "retry"})).await;
    assert_eq!(view["error"], "network_failure");
}

#[tokio::test]
async fn test_missing_identifier_is_not_retryable() {
    let server = setup_test_server();
    let view_id = mount(&server, json!({})).await;

    let view = server
        .get(&format!("/views/{}", view_id))
        .await
        .json::<Value>();
    assert_eq!(view["error"], "missing_identifier");
    assert_eq!(view["can_retry"], false);
}

#[tokio::test]
async fn test_unmount_view() {
    let server = setup_test_server();
    let view_id = mount(&server, json!({"id": "7"})).await;

    let response = server.delete(&format!("/views/{}", view_id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = server.get(&format!("/views/{}", view_id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server.delete(&format!("/views/{}", view_id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_view_id() {
    let server = setup_test_server();

    let response = server.get("/views/not-a-uuid").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server
        .post("/views/not-a-uuid/commands")
        .json(&json!({"command": "next"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
