// Web server: Axum backend for the browser UI.
//
// The page under web/ is embedded at compile time via include_dir!.
// All /api/* routes serve JSON; every other path serves the embedded assets,
// falling back to index.html.
//
// No sessions and no storage: each request is classified and forgotten.

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use include_dir::{include_dir, Dir};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::mood::classifier::MoodClassifier;

pub mod handlers;

static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/web");

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<MoodClassifier>,
    /// Size of the sentiment lexicon, when the scorer is lexicon-backed
    pub lexicon_entries: Option<usize>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    classifier: Arc<MoodClassifier>,
    lexicon_entries: Option<usize>,
    port: u16,
    bind: &str,
) -> Result<()> {
    // Build the word list now so the first request doesn't pay for it.
    classifier.filter().load();

    let state = AppState {
        classifier,
        lexicon_entries,
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("textmood listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/api/mood", post(handlers::mood::classify_mood))
        .route("/api/explain", get(handlers::explain::get_explanation))
        .route("/api/status", get(handlers::status::get_status));

    api.fallback(serve_asset)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe: always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Serve an embedded asset, or index.html for any unknown path.
async fn serve_asset(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    if let Some(file) = ASSETS.get_file(path) {
        return asset_response(file.contents(), path);
    }

    match ASSETS.get_file("index.html") {
        Some(index) => asset_response(index.contents(), "index.html"),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain")],
            Body::from("Web assets not found in the build."),
        )
            .into_response(),
    }
}

fn asset_response(contents: &'static [u8], path: &str) -> Response {
    let mime = mime_type(path);
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HeaderValue::from_static(mime))
        .body(Body::from(contents))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn mime_type(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("");
    match ext {
        "html" => "text/html; charset=utf-8",
        "js" => "application/javascript",
        "css" => "text/css",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_by_extension() {
        assert_eq!(mime_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(mime_type("app.js"), "application/javascript");
        assert_eq!(mime_type("style.css"), "text/css");
        assert_eq!(mime_type("noext"), "application/octet-stream");
    }

    #[test]
    fn test_assets_include_index() {
        assert!(ASSETS.get_file("index.html").is_some());
    }
}
