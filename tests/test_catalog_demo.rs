//! Integration tests for catalog-backed demo rendering.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use slotwise::{router, AppState, Config};
use std::io::Write;
use std::sync::Arc;
use tower::ServiceExt;

fn catalog_json() -> Value {
    json!({
        "tools": [
            {
                "id": "sora",
                "name": "Sora",
                "name_ge": "სორა",
                "type": "text-to-video",
                "prompt": "A paper boat on a rainy street",
                "result_video_url": "https://vimeo.com/555444",
                "demos": [
                    {
                        "title": "Clip from a still",
                        "title_ge": "კლიპი ფოტოდან",
                        "demo_type": "image-to-video",
                        "order": 1,
                        "input_image_url": "https://cdn.example.com/still.jpg",
                        "output_video_url": "https://cdn.example.com/clip.mp4"
                    },
                    {
                        "title": "Empty demo",
                        "demo_type": "text-to-text",
                        "order": 0
                    }
                ]
            },
            { "id": 7, "name": "Writer", "type": "text-to-text" },
            { "name": "skipped, no id" }
        ]
    })
}

/// Helper to build the app around a catalog file on disk.
fn create_test_app() -> (Router, tempfile::NamedTempFile) {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", catalog_json()).unwrap();

    let config = Config {
        catalog_path: Some(file.path().to_path_buf()),
        ..Config::default()
    };
    let state = AppState::new(config).expect("Failed to create AppState");

    (router(Arc::new(state)), file)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

#[tokio::test]
async fn test_catalog_lists_valid_tools() {
    let (app, _file) = create_test_app();
    let (status, body) = get_json(app, "/catalog").await;

    assert_eq!(status, StatusCode::OK);
    let tools = body["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 2);
    assert_eq!(tools[0]["id"], "sora");
    assert_eq!(tools[0]["tool_type"], "text-to-video");
    assert_eq!(tools[0]["demos"], 2);
    assert_eq!(tools[1]["id"], "7");
    assert_eq!(body["version"].as_str().unwrap().len(), 64);
}

#[tokio::test]
async fn test_tool_demo_plan() {
    let (app, _file) = create_test_app();
    let (status, body) = get_json(app, "/catalog/sora/demo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Sora");
    assert_eq!(body["plan"]["inputs"][0]["body"], "A paper boat on a rainy street");

    let video = &body["plan"]["outputs"][0];
    assert_eq!(video["kind"], "video");
    assert_eq!(video["embed_url"], "https://player.vimeo.com/video/555444");
    assert_eq!(video["embeddable"], true);
}

#[tokio::test]
async fn test_tool_demo_records_in_order() {
    let (app, _file) = create_test_app();
    let (_, body) = get_json(app, "/catalog/sora/demo?lang=ka").await;

    let demos = body["demos"].as_array().unwrap();
    assert_eq!(demos.len(), 2);

    assert_eq!(demos[0]["title"], "Empty demo");
    assert!(demos[0]["plan"].is_null());

    assert_eq!(demos[1]["title"], "კლიპი ფოტოდან");
    assert_eq!(demos[1]["tool_type"], "image-to-video");
    let output = &demos[1]["plan"]["outputs"][0];
    assert_eq!(output["embed_url"], "https://cdn.example.com/clip.mp4");
    assert_eq!(output["embeddable"], false);
    assert_eq!(body["name"], "სორა");
}

#[tokio::test]
async fn test_tool_without_content_has_no_plan() {
    let (app, _file) = create_test_app();
    let (status, body) = get_json(app, "/catalog/7/demo").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["plan"].is_null());
    assert_eq!(body["demos"], json!([]));
}

#[tokio::test]
async fn test_unknown_tool_returns_404() {
    let (app, _file) = create_test_app();
    let (status, body) = get_json(app, "/catalog/missing/demo").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[test]
fn test_missing_catalog_file_fails_startup() {
    let config = Config {
        catalog_path: Some("/nonexistent/slotwise/catalog.json".into()),
        ..Config::default()
    };

    assert!(AppState::new(config).is_err());
}

#[tokio::test]
async fn test_ready_reports_loaded_catalog() {
    let (app, _file) = create_test_app();
    let (status, body) = get_json(app, "/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["tools"], 2);
    assert_eq!(body["catalog_version"].as_str().map(str::len), Some(64));
}

#[tokio::test]
async fn test_ready_is_503_when_configured_catalog_is_empty() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[]").unwrap();

    let config = Config {
        catalog_path: Some(file.path().to_path_buf()),
        ..Config::default()
    };
    let app = router(Arc::new(AppState::new(config).unwrap()));

    let (status, body) = get_json(app.clone(), "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "catalog_empty");
    assert_eq!(body["tools"], 0);

    // Liveness and the resolver stay up.
    let (status, _) = get_json(app, "/types/other").await;
    assert_eq!(status, StatusCode::OK);
}
