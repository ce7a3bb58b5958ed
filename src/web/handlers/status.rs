// GET /api/status: which filter and scorer the server is running with.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::mood::models::{HAPPY_THRESHOLD, SAD_THRESHOLD};
use crate::web::AppState;

pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let classifier = &state.classifier;

    Json(serde_json::json!({
        "scorer": classifier.scorer().name(),
        "blocked_words": classifier.filter().blocked_word_count(),
        "lexicon_entries": state.lexicon_entries,
        "thresholds": {
            "happy": HAPPY_THRESHOLD,
            "sad": SAD_THRESHOLD,
        }
    }))
}
