use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::{Database, dto::scoreboard::ScoreboardResponse};

use super::services;

/// The polling client tells a failed refresh apart from an empty board by
/// the `success` flag, so this endpoint keeps its envelope on both paths
/// instead of the shared error body.
#[utoipa::path(
    get,
    path = "/api/scoreboard",
    responses(
        (status = 200, description = "Ranked scoreboard snapshot", body = ScoreboardResponse),
        (status = 500, description = "Aggregation failed")
    ),
    tag = "scoreboard"
)]
pub async fn get_scoreboard(State(db): State<Database>) -> Response {
    match services::get_scoreboard(db.pool()).await {
        Ok(entries) => Json(ScoreboardResponse::new(entries)).into_response(),
        Err(e) => {
            tracing::error!("Failed to load scoreboard data: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": "Failed to load scoreboard data"
                })),
            )
                .into_response()
        }
    }
}
