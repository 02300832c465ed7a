use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wordcloud_api::{
    app,
    app::env::Envy,
    wordclouds::renderer::{ImageRenderer, WordcloudRenderer},
    AppState,
};

const API_KEY: &str = "test-key";
const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

fn test_app() -> Router {
    let state = AppState {
        envy: Arc::new(Envy {
            app_env: "test".to_string(),
            port: None,
            api_key: API_KEY.to_string(),
        }),
        renderer: Arc::new(ImageRenderer::new().unwrap()) as Arc<dyn WordcloudRenderer>,
    };

    app(state)
}

fn generate_request(body: Value, api_key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/generate-wordcloud")
        .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref());

    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    hyper::body::to_bytes(response.into_body())
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn generates_png_from_comments() {
    let request = generate_request(
        json!({ "comments": ["great product", "loved it", "amazing amazing"] }),
        Some(API_KEY),
    );

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "inline; filename=wordcloud.png"
    );

    let body = body_bytes(response).await;
    assert!(!body.is_empty());
    assert_eq!(&body[..8], &PNG_MAGIC);
}

#[tokio::test]
async fn generates_png_with_custom_options() {
    let request = generate_request(
        json!({
            "comments": ["tiny cloud tiny"],
            "width": 10,
            "height": 10,
            "max_words": 1
        }),
        Some(API_KEY),
    );

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_bytes(response).await;
    assert_eq!(&body[..8], &PNG_MAGIC);
}

#[tokio::test]
async fn missing_api_key_is_unauthorized() {
    let request = generate_request(json!({ "comments": ["great product"] }), None);

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Unauthorized: Invalid or missing API key");
}

#[tokio::test]
async fn wrong_api_key_is_unauthorized() {
    let request = generate_request(json!({ "comments": ["great product"] }), Some("wrong-key"));

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_comment_list_is_a_bad_request() {
    let request = generate_request(json!({ "comments": [] }), Some(API_KEY));

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn blank_comments_are_a_bad_request() {
    let request = generate_request(json!({ "comments": ["   ", ""] }), Some(API_KEY));

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn invalid_dimensions_are_a_bad_request() {
    let request = generate_request(
        json!({ "comments": ["great product"], "width": 0 }),
        Some(API_KEY),
    );

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_colormap_is_a_bad_request() {
    let request = generate_request(
        json!({ "comments": ["great product"], "colormap": "sparkles" }),
        Some(API_KEY),
    );

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn root_lists_endpoints() {
    let app = test_app();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "WordCloud API");
        assert!(body["endpoints"].is_object());
    }
}

#[tokio::test]
async fn health_check_is_healthy() {
    let app = test_app();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "status": "healthy" }));
    }
}
