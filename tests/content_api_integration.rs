use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use std::{collections::HashMap, sync::Arc};
use vitrine::{
    ContentApiConfig,
    content::{ContentError, ContentId, ContentSource, FetchErrorKind, HttpContentSource},
    detail::{DetailView, ViewStatus},
    gallery::KeyboardHub,
    locale::Locale,
    presentation::AssetHost,
};

async fn content_handler(
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let lang = query.get("lang").cloned().unwrap_or_default();

    match id.as_str() {
        "7" => Json(json!({
            "id": 7,
            "title": format!("Expo [{}]", lang),
            "image": "/img/a.jpg",
            "photos": [{"image": "/img/b.jpg"}, {"image": "/img/a.jpg"}]
        }))
        .into_response(),
        "12" => Json(json!({
            "data": {"id": "12", "title": "Sector", "photos": [{"image": "https://cdn.example.org/x.jpg"}]}
        }))
        .into_response(),
        "list" => Json(json!([{"id": 1}])).into_response(),
        "garbled" => (StatusCode::OK, "<html>oops</html>").into_response(),
        _ => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

/// Serves a fake content API on an ephemeral port and returns its base URL.
async fn spawn_fake_api() -> String {
    let app = Router::new().route("/api/content/{id}", get(content_handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", addr)
}

fn source_for(base_url: String) -> HttpContentSource {
    HttpContentSource::new(&ContentApiConfig {
        base_url,
        asset_host: "https://cms.example.org".to_string(),
        request_timeout_secs: Some(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_direct_record_with_locale_code() {
    let source = source_for(spawn_fake_api().await);

    let body = source
        .fetch_raw(&ContentId::new("7"), Locale::Ky)
        .await
        .unwrap();

    assert_eq!(body["title"], "Expo [kg]");
}

#[tokio::test]
async fn test_http_errors_are_network_failures() {
    let source = source_for(spawn_fake_api().await);

    let err = source
        .fetch_raw(&ContentId::new("missing"), Locale::Ru)
        .await
        .unwrap_err();
    assert!(matches!(err, ContentError::NetworkFailure(ref msg) if msg.contains("404")));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_shape() {
    let source = source_for(spawn_fake_api().await);

    let err = source
        .fetch_raw(&ContentId::new("garbled"), Locale::Ru)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::InvalidResponseShape);
}

#[tokio::test]
async fn test_unreachable_host_is_network_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = source_for(format!("http://{}/api", addr));
    let err = source
        .fetch_raw(&ContentId::new("7"), Locale::En)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::NetworkFailure);
}

#[tokio::test]
async fn test_detail_view_over_http() {
    let base_url = spawn_fake_api().await;
    let source = Arc::new(source_for(base_url));
    let view = DetailView::new(
        source,
        AssetHost::new("https://cms.example.org"),
        KeyboardHub::new(),
    );

    assert!(view.load(Some("7"), Locale::En).await);
    let snapshot = view.snapshot().await;
    assert_eq!(snapshot.status, ViewStatus::Ready);
    assert_eq!(snapshot.record.title, "Expo [en]");
    assert_eq!(snapshot.gallery.images, vec!["/img/a.jpg", "/img/b.jpg"]);

    assert!(view.load(Some("12"), Locale::Ru).await);
    let rendered = view.render().await;
    assert_eq!(rendered.title, "Sector");
    assert_eq!(
        rendered.hero.url(),
        Some("https://cdn.example.org/x.jpg")
    );

    assert!(view.load(Some("list"), Locale::Ru).await);
    let snapshot = view.snapshot().await;
    assert_eq!(
        snapshot.status,
        ViewStatus::Failed(FetchErrorKind::InvalidResponseShape)
    );
    assert!(snapshot.gallery.images.is_empty());
    assert!(snapshot.can_retry);
}
