// POST /api/mood: classify one sentence.
//
// Always answers 200 with a mood for any sentence the classifier sees,
// including rejected and unscorable ones; `outcome` says which rule fired.
// Oversized bodies are refused before they reach the classifier.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::mood::models::Mood;
use crate::web::{api_error, AppState};

/// Longest sentence the API will classify, in characters.
pub const MAX_SENTENCE_CHARS: usize = 1000;

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub sentence: String,
}

#[derive(Debug, Serialize)]
pub struct MoodResponse {
    pub mood: Mood,
    pub emoji: &'static str,
    pub explanation: String,
    pub polarity: Option<f64>,
    pub outcome: &'static str,
}

pub async fn classify_mood(
    State(state): State<AppState>,
    Json(request): Json<MoodRequest>,
) -> impl IntoResponse {
    if request.sentence.chars().count() > MAX_SENTENCE_CHARS {
        return api_error(
            StatusCode::PAYLOAD_TOO_LARGE,
            &format!("Sentences are limited to {MAX_SENTENCE_CHARS} characters"),
        );
    }

    let outcome = state.classifier.evaluate(&request.sentence).await;
    let kind = outcome.kind();
    let result = outcome.into_result();

    Json(MoodResponse {
        mood: result.mood,
        emoji: result.emoji(),
        explanation: result.explanation,
        polarity: result.polarity,
        outcome: kind,
    })
    .into_response()
}
