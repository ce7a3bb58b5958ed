// GET /api/explain: teacher-mode text and decision diagram.

use axum::response::IntoResponse;
use axum::Json;

use crate::explain::explanation;

pub async fn get_explanation() -> impl IntoResponse {
    Json(explanation())
}
