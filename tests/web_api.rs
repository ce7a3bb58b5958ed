// Web API tests: drive the Axum router in-process with tower's oneshot.
//
// No sockets: each test builds the router around the default classifier and
// sends a single request through it.

#![cfg(feature = "web")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use textmood::config::Config;
use textmood::mood::models::{TOO_SHORT_EXPLANATION, UNSAFE_EXPLANATION};
use textmood::web::handlers::mood::MAX_SENTENCE_CHARS;
use textmood::web::{build_router, AppState};

fn app() -> Router {
    let classifier = Config::default().build_classifier().unwrap();
    build_router(AppState {
        classifier: Arc::new(classifier),
        lexicon_entries: Some(42),
    })
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_mood(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/mood")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ============================================================
// POST /api/mood
// ============================================================

#[tokio::test]
async fn mood_happy_sentence() {
    let body = serde_json::json!({ "sentence": "I love learning about code!" }).to_string();
    let response = app().oneshot(post_mood(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["mood"], "happy");
    assert_eq!(json["emoji"], "😀");
    assert_eq!(json["outcome"], "scored");
    assert!(json["polarity"].as_f64().unwrap() >= 0.2);
}

#[tokio::test]
async fn mood_short_sentence_is_neutral() {
    let body = serde_json::json!({ "sentence": "hi" }).to_string();
    let response = app().oneshot(post_mood(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["mood"], "neutral");
    assert_eq!(json["emoji"], "😐");
    assert_eq!(json["outcome"], "insufficient_input");
    assert_eq!(json["explanation"], TOO_SHORT_EXPLANATION);
    assert!(json["polarity"].is_null());
}

#[tokio::test]
async fn mood_blocked_sentence_is_unsafe() {
    let body = serde_json::json!({ "sentence": "you are a bitch" }).to_string();
    let response = app().oneshot(post_mood(body)).await.unwrap();

    let json = body_json(response).await;
    assert_eq!(json["outcome"], "unsafe_content");
    assert_eq!(json["explanation"], UNSAFE_EXPLANATION);
}

#[tokio::test]
async fn mood_malformed_json_is_client_error() {
    let response = app()
        .oneshot(post_mood("{not json".to_string()))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn mood_missing_field_is_client_error() {
    let body = serde_json::json!({ "text": "I love code" }).to_string();
    let response = app().oneshot(post_mood(body)).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn mood_sentence_at_the_cap_is_classified() {
    let sentence = "a".repeat(MAX_SENTENCE_CHARS);
    let body = serde_json::json!({ "sentence": sentence }).to_string();
    let response = app().oneshot(post_mood(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn mood_oversized_sentence_is_rejected() {
    let sentence = "happy ".repeat(MAX_SENTENCE_CHARS);
    let body = serde_json::json!({ "sentence": sentence }).to_string();
    let response = app().oneshot(post_mood(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

// ============================================================
// Other routes
// ============================================================

#[tokio::test]
async fn health_is_ok() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn explain_returns_diagram() {
    let response = app().oneshot(get("/api/explain")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["diagram_dot"].as_str().unwrap().starts_with("digraph"));
    assert_eq!(json["happy_threshold"], 0.2);
    assert_eq!(json["sad_threshold"], -0.2);
}

#[tokio::test]
async fn status_reports_components() {
    let response = app().oneshot(get("/api/status")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["scorer"], "lexicon");
    assert_eq!(json["lexicon_entries"], 42);
    assert!(json["blocked_words"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn root_serves_the_page() {
    let response = app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Analyze Mood"));
}

#[tokio::test]
async fn unknown_path_falls_back_to_index() {
    let response = app().oneshot(get("/some/where")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
