use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::score::{ScoreResponse, SubmitScoreRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/scores",
    request_body = SubmitScoreRequest,
    responses(
        (status = 201, description = "Score recorded successfully", body = ScoreResponse),
        (status = 400, description = "Points out of range"),
        (status = 422, description = "Unknown user or judge id")
    ),
    tag = "scores"
)]
pub async fn submit_score(
    State(db): State<Database>,
    Json(req): Json<SubmitScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let score = services::submit_score(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(ScoreResponse::from(score))).into_response())
}
